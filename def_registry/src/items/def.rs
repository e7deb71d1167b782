//! Item definitions and behaviours.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use entity_defs::{ConfigError, DisplayInfo, EntityBehaviour, EntityDef, EntityType};

use super::{Item, ItemStats};

/// A registrable item definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemDef {
    /// Set by the registry from the batch key or the identifier table.
    #[serde(skip)]
    pub internal_name: String,
    /// Assigned by the registry.
    #[serde(skip)]
    pub entity_type: EntityType,

    pub display: DisplayInfo,
    pub texture: Option<String>,
    pub stats: ItemStats,
    pub max_stack: u32,

    /// Internal name of the item this item fires.
    pub ammo: Option<String>,
    /// Resolved type of `ammo`, filled in after the built-in fill.
    #[serde(skip)]
    pub ammo_type: EntityType,

    /// Whether spawned items get an [`ItemBehaviour`].
    pub scripted: bool,

    /// Free-form data for host-side consumers.
    pub extra: HashMap<String, serde_json::Value>,
}

impl ItemDef {
    /// Create a definition with the given display name.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display: DisplayInfo::named(display_name),
            ..Self::default()
        }
    }

    pub fn with_texture(mut self, path: impl Into<String>) -> Self {
        self.texture = Some(path.into());
        self
    }

    pub fn with_stats(mut self, stats: ItemStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_max_stack(mut self, max_stack: u32) -> Self {
        self.max_stack = max_stack;
        self
    }

    pub fn scripted(mut self) -> Self {
        self.scripted = true;
        self
    }
}

impl EntityDef for ItemDef {
    type Entity = Item;
    type Behaviour = ItemBehaviour;

    fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    fn set_entity_type(&mut self, ty: EntityType) {
        self.entity_type = ty;
    }

    fn internal_name(&self) -> &str {
        &self.internal_name
    }

    fn set_internal_name(&mut self, name: String) {
        self.internal_name = name;
    }

    fn create_behaviour(&self) -> Option<ItemBehaviour> {
        self.scripted.then(|| ItemBehaviour::new(self.entity_type))
    }
}

/// Behaviour bound to a spawned item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemBehaviour {
    pub owner: EntityType,
    pub attached: bool,
}

impl ItemBehaviour {
    pub fn new(owner: EntityType) -> Self {
        Self {
            owner,
            attached: false,
        }
    }
}

impl EntityBehaviour<Item> for ItemBehaviour {
    fn attach(&mut self, entity: &mut Item) {
        entity.has_behaviour = true;
        self.attached = true;
    }
}

/// Parse an extension batch where each top-level table is one item.
///
/// ```toml
/// [Gold]
/// texture = "gold.png"
/// max_stack = 99
/// ```
pub fn batch_from_toml(src: &str) -> Result<BTreeMap<String, ItemDef>, ConfigError> {
    Ok(toml::from_str(src)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_accessors() {
        let mut def = ItemDef::new("Gold Bar");
        def.set_internal_name("GoldBar".into());
        def.set_entity_type(EntityType(12));

        assert_eq!(def.internal_name(), "GoldBar");
        assert_eq!(def.entity_type(), EntityType(12));
        assert_eq!(def.display.name, "Gold Bar");
    }

    #[test]
    fn test_behaviour_only_for_scripted() {
        let mut def = ItemDef::new("Bomb");
        assert!(def.create_behaviour().is_none());

        def = def.scripted();
        def.set_entity_type(EntityType(9));
        let mut behaviour = def.create_behaviour().unwrap();
        assert_eq!(behaviour.owner, EntityType(9));

        let mut item = Item::new(EntityType(9), "Bomb");
        behaviour.attach(&mut item);
        assert!(item.has_behaviour);
        assert!(behaviour.attached);
    }

    #[test]
    fn test_batch_from_toml() {
        let batch = batch_from_toml(
            r#"
            [Silver]
            texture = "silver.png"
            max_stack = 99

            [Gold]
            texture = "gold.png"
            scripted = true
            extra = { glow = 0.5 }

            [Gold.display]
            name = "Gold Bar"
            tooltip = ["Shiny"]
            "#,
        )
        .unwrap();

        let names: Vec<_> = batch.keys().cloned().collect();
        assert_eq!(names, vec!["Gold", "Silver"]);

        let gold = &batch["Gold"];
        assert_eq!(gold.texture.as_deref(), Some("gold.png"));
        assert_eq!(gold.display.name, "Gold Bar");
        assert!(gold.scripted);
        assert!(gold.extra.contains_key("glow"));
        assert!(gold.internal_name.is_empty());
        assert_eq!(batch["Silver"].max_stack, 99);
    }

    #[test]
    fn test_batch_from_toml_error() {
        assert!(batch_from_toml("[Gold]\nmax_stack = -1").is_err());
    }
}
