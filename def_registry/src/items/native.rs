//! The host-native item.

use serde::{Deserialize, Serialize};

use entity_defs::EntityType;

/// Numeric item stats copied between natives and definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStats {
    pub damage: i32,
    pub defense: i32,
    pub use_time: i32,
    /// Sell value in copper coins.
    pub value: i32,
    pub rarity: i32,
}

/// An item as the host represents it at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Slot the item was created from. Negative for alias variants.
    pub net_id: EntityType,
    /// Canonical item type.
    pub item_type: EntityType,
    pub name: String,
    pub stats: ItemStats,
    pub max_stack: u32,
    pub texture: Option<String>,
    /// Item type this item fires, or `NONE`.
    pub ammo: EntityType,
    pub has_behaviour: bool,
}

impl Item {
    /// Create an item occupying its own canonical slot.
    pub fn new(ty: EntityType, name: impl Into<String>) -> Self {
        Self {
            net_id: ty,
            item_type: ty,
            name: name.into(),
            stats: ItemStats::default(),
            max_stack: 1,
            texture: None,
            ammo: EntityType::NONE,
            has_behaviour: false,
        }
    }

    /// An unused slot: no name, no data.
    pub fn blank(ty: EntityType) -> Self {
        Self::new(ty, "")
    }

    /// Create an alias item that resolves to another canonical type.
    pub fn alias(net_id: EntityType, regular: EntityType, name: impl Into<String>) -> Self {
        Self {
            net_id,
            ..Self::new(regular, name)
        }
    }

    pub fn with_stats(mut self, stats: ItemStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_texture(mut self, path: impl Into<String>) -> Self {
        self.texture = Some(path.into());
        self
    }

    pub fn with_max_stack(mut self, max_stack: u32) -> Self {
        self.max_stack = max_stack;
        self
    }

    pub fn with_ammo(mut self, ammo: EntityType) -> Self {
        self.ammo = ammo;
        self
    }

    /// Check if this item is an alias of another type.
    pub fn is_alias(&self) -> bool {
        self.net_id != self.item_type
    }
}
