//! Item handler: native lookups, texture slots and defaults.

use std::collections::HashMap;

use entity_defs::{ConstValue, EntityDef, EntityType, IdTable, LoaderError, LoaderErrorKind};
use tracing::trace;

use super::{Item, ItemBehaviour, ItemDef};
use crate::handler::{CapacityRequest, DefHandler};

/// A decoded texture held in a type slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    pub path: String,
    pub size: usize,
}

/// Handler for item definitions.
///
/// Texture slots are keyed by item type. Types below the baseline (the end of
/// the built-in range) belong to built-in items and survive a rewind; types
/// from the baseline up are extension slots reserved by `extend_capacity`.
#[derive(Debug, Clone, Default)]
pub struct ItemHandler {
    id_fields: Vec<(String, ConstValue)>,
    natives: HashMap<EntityType, Item>,
    assets: HashMap<String, Vec<u8>>,
    textures: HashMap<EntityType, Texture>,
    baseline: EntityType,
    extension_slots: usize,
}

impl ItemHandler {
    /// Create a handler over the host's item identifier constants.
    pub fn new<I, S>(id_fields: I) -> Self
    where
        I: IntoIterator<Item = (S, ConstValue)>,
        S: Into<String>,
    {
        let id_fields: Vec<(String, ConstValue)> = id_fields
            .into_iter()
            .map(|(name, value)| (name.into(), value))
            .collect();

        let baseline = IdTable::from_fields(id_fields.clone())
            .map(|table| table.max())
            .unwrap_or_default();

        Self {
            id_fields,
            natives: HashMap::new(),
            assets: HashMap::new(),
            textures: HashMap::new(),
            baseline,
            extension_slots: 0,
        }
    }

    /// Register the native item resolved for its `net_id` slot.
    pub fn with_native(mut self, item: Item) -> Self {
        self.natives.insert(item.net_id, item);
        self
    }

    /// Make an asset file available to resource checks.
    pub fn with_asset(mut self, path: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.assets.insert(path.into(), bytes);
        self
    }

    /// The texture loaded into a type slot.
    pub fn texture(&self, ty: EntityType) -> Option<&Texture> {
        self.textures.get(&ty)
    }

    /// Extension slots currently reserved past the baseline.
    pub fn extension_slots(&self) -> usize {
        self.extension_slots
    }

    /// First extension type; lower types are built-in slots.
    pub fn baseline(&self) -> EntityType {
        self.baseline
    }

    fn has_slot(&self, ty: EntityType) -> bool {
        let offset = i64::from(ty.get()) - i64::from(self.baseline.get());
        offset < 0 || (offset as u64) < self.extension_slots as u64
    }
}

impl DefHandler for ItemHandler {
    type Entity = Item;
    type Behaviour = ItemBehaviour;
    type Def = ItemDef;

    fn id_fields(&self) -> Vec<(String, ConstValue)> {
        self.id_fields.clone()
    }

    fn extend_capacity(&mut self, request: CapacityRequest) {
        match request {
            CapacityRequest::Rewind => {
                let baseline = self.baseline;
                self.textures.retain(|ty, _| *ty < baseline);
                self.extension_slots = 0;
            }
            CapacityRequest::Additional(n) => {
                self.extension_slots = self.extension_slots.saturating_add(n);
            }
        }
    }

    fn resolve_native(&self, ty: EntityType) -> Item {
        self.natives
            .get(&ty)
            .cloned()
            .unwrap_or_else(|| Item::blank(ty))
    }

    fn copy_native_to_def(&self, entity: &Item, def: &mut ItemDef) {
        def.stats = entity.stats.clone();
        def.max_stack = entity.max_stack;
        def.texture = entity.texture.clone();
        def.ammo_type = entity.ammo;
    }

    fn copy_def_to_native(&self, def: &ItemDef, entity: &mut Item) {
        entity.item_type = def.entity_type;
        entity.name = def.display.name.clone();
        entity.stats = def.stats.clone();
        entity.max_stack = def.max_stack;
        entity.texture = def.texture.clone();
        entity.ammo = def.ammo_type;
    }

    fn check_resources(&self, def: &ItemDef) -> Vec<LoaderError> {
        let name = def.internal_name();
        match &def.texture {
            None => vec![LoaderError::new(name, LoaderErrorKind::MissingTexture)],
            Some(path) if !self.assets.contains_key(path) => vec![LoaderError::new(
                name,
                LoaderErrorKind::TextureNotFound { path: path.clone() },
            )],
            Some(_) => Vec::new(),
        }
    }

    fn load_resources(&mut self, def: &ItemDef) -> Vec<LoaderError> {
        let name = def.internal_name();
        let Some(path) = def.texture.as_ref() else {
            return vec![LoaderError::new(name, LoaderErrorKind::MissingTexture)];
        };
        let load_error = |reason: &str| {
            vec![LoaderError::new(
                name,
                LoaderErrorKind::TextureLoad {
                    path: path.clone(),
                    reason: reason.to_string(),
                },
            )]
        };

        let Some(bytes) = self.assets.get(path) else {
            return load_error("asset disappeared");
        };
        if bytes.is_empty() {
            return load_error("empty image data");
        }

        let size = bytes.len();
        if !self.has_slot(def.entity_type) {
            return load_error("no texture slot for this type");
        }
        self.textures.insert(
            def.entity_type,
            Texture {
                path: path.clone(),
                size,
            },
        );
        trace!(item = name, ty = %def.entity_type, path = %path, "loaded item texture");

        Vec::new()
    }

    fn apply_defaults(&self, def: &mut ItemDef) {
        if !def.display.has_name() {
            def.display.name = def.internal_name.clone();
        }
        if def.max_stack == 0 {
            def.max_stack = 1;
        }
    }

    fn new_def_with_display_name(&self, entity: &Item) -> ItemDef {
        ItemDef::new(entity.name.clone())
    }

    fn regular_type(&self, entity: &Item) -> EntityType {
        entity.item_type
    }

    fn after_fill(&mut self, defs: &mut HashMap<EntityType, ItemDef>) {
        let names: HashMap<EntityType, String> = defs
            .iter()
            .map(|(ty, def)| (*ty, def.internal_name.clone()))
            .collect();

        for def in defs.values_mut() {
            if def.ammo_type.is_none() {
                continue;
            }
            def.ammo = names.get(&def.ammo_type).cloned();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> ItemHandler {
        ItemHandler::new(vec![
            ("None", ConstValue::Int(0)),
            ("Wood", ConstValue::Int(1)),
            ("Iron", ConstValue::Int(5)),
            ("Count", ConstValue::Int(6)),
        ])
        .with_asset("gold.png", vec![1, 2, 3])
        .with_asset("broken.png", Vec::new())
    }

    fn named(name: &str, texture: Option<&str>, ty: i32) -> ItemDef {
        let mut def = ItemDef::new("");
        def.internal_name = name.into();
        def.texture = texture.map(String::from);
        def.entity_type = EntityType(ty);
        def
    }

    #[test]
    fn test_baseline_is_table_max() {
        let handler = handler();
        assert_eq!(handler.baseline(), EntityType(5));
        assert_eq!(handler.extension_slots(), 0);
    }

    #[test]
    fn test_sparse_count_allocates_nothing() {
        let handler = ItemHandler::new(vec![
            ("Wood", ConstValue::Int(1)),
            ("Count", ConstValue::Int(1_000_000_000)),
        ]);
        assert_eq!(handler.baseline(), EntityType(1));
        assert!(handler.textures.is_empty());
    }

    #[test]
    fn test_capacity_grow_and_rewind() {
        let mut handler = handler();
        handler.extend_capacity(CapacityRequest::Additional(3));
        assert_eq!(handler.extension_slots(), 3);

        handler.extend_capacity(CapacityRequest::Rewind);
        assert_eq!(handler.extension_slots(), 0);
    }

    #[test]
    fn test_check_resources() {
        let handler = handler();

        assert!(handler
            .check_resources(&named("Gold", Some("gold.png"), 0))
            .is_empty());

        let missing = handler.check_resources(&named("Tin", None, 0));
        assert_eq!(missing[0].kind, LoaderErrorKind::MissingTexture);

        let not_found = handler.check_resources(&named("Lead", Some("lead.png"), 0));
        assert!(matches!(
            not_found[0].kind,
            LoaderErrorKind::TextureNotFound { .. }
        ));
        assert_eq!(not_found[0].def_name, "Lead");
    }

    #[test]
    fn test_load_resources_fills_slot() {
        let mut handler = handler();
        handler.extend_capacity(CapacityRequest::Additional(1));

        let errors = handler.load_resources(&named("Gold", Some("gold.png"), 5));
        assert!(errors.is_empty());
        assert_eq!(handler.texture(EntityType(5)).unwrap().size, 3);

        handler.extend_capacity(CapacityRequest::Rewind);
        assert!(handler.texture(EntityType(5)).is_none());
    }

    #[test]
    fn test_builtin_slots_survive_rewind() {
        let mut handler = handler();
        assert!(handler
            .load_resources(&named("Wood", Some("gold.png"), 1))
            .is_empty());

        handler.extend_capacity(CapacityRequest::Rewind);
        assert!(handler.texture(EntityType(1)).is_some());
    }

    #[test]
    fn test_load_resources_errors() {
        let mut handler = handler();

        let empty = handler.load_resources(&named("Broken", Some("broken.png"), 2));
        assert!(matches!(empty[0].kind, LoaderErrorKind::TextureLoad { .. }));

        let no_slot = handler.load_resources(&named("Gold", Some("gold.png"), 5));
        assert!(matches!(no_slot[0].kind, LoaderErrorKind::TextureLoad { .. }));
        assert!(handler.texture(EntityType(5)).is_none());
    }

    #[test]
    fn test_apply_defaults() {
        let handler = handler();
        let mut def = named("Gold", Some("gold.png"), 6);
        handler.apply_defaults(&mut def);

        assert_eq!(def.display.name, "Gold");
        assert_eq!(def.max_stack, 1);
    }

    #[test]
    fn test_unknown_slot_resolves_blank() {
        let handler = handler();
        let item = handler.resolve_native(EntityType(3));
        assert!(item.name.is_empty());
        assert_eq!(handler.regular_type(&item), EntityType(3));
    }
}
