//! The definition registry: identifier allocation and lookups.
//!
//! Built-in identifiers occupy `[min, max)` of the identifier table; extension
//! identifiers are handed out from `max` upwards and never reused until the
//! next [`DefRegistry::reset`].

mod fill;
mod load;

use std::collections::HashMap;

use entity_defs::{EntityBehaviour, EntityDef, EntityType, IdTable, LoaderConfig, TableError};
use tracing::debug;

use crate::handler::{CapacityRequest, DefHandler};

/// Registry of built-in and extension definitions for one entity kind.
pub struct DefRegistry<H: DefHandler> {
    handler: H,
    config: LoaderConfig,

    /// Snapshot of the host's identifier container, taken once.
    ids: IdTable,

    /// Next identifier to assign to an extension definition.
    next_type: EntityType,

    /// Every registered definition by type identifier.
    defs_by_type: HashMap<EntityType, H::Def>,

    /// Index: built-in internal name -> type. Rebuilt by each fill.
    builtin_by_name: HashMap<String, EntityType>,

    /// Index: extension internal name -> type. Cleared by reset.
    extension_by_name: HashMap<String, EntityType>,
}

impl<H: DefHandler> DefRegistry<H> {
    /// Create a registry, reading the handler's identifier table once.
    pub fn new(handler: H, config: LoaderConfig) -> Result<Self, TableError> {
        let ids = IdTable::from_fields(handler.id_fields())?;
        let next_type = ids.max();

        let mut registry = Self {
            handler,
            config,
            ids,
            next_type,
            defs_by_type: HashMap::new(),
            builtin_by_name: HashMap::new(),
            extension_by_name: HashMap::new(),
        };
        registry.reset();
        Ok(registry)
    }

    /// Return to the post-construction empty state.
    ///
    /// Host storage is rewound to the built-in baseline and the cursor to the
    /// end of the built-in range. The built-in name index is left for the
    /// next fill to rebuild; until then its lookups resolve to nothing.
    pub fn reset(&mut self) {
        self.handler.extend_capacity(CapacityRequest::Rewind);
        self.next_type = self.ids.max();
        self.defs_by_type.clear();
        self.extension_by_name.clear();
        debug!(next_type = %self.next_type, "definition registry reset");
    }

    /// The identifier table snapshot.
    pub fn id_table(&self) -> &IdTable {
        &self.ids
    }

    /// Smallest built-in identifier.
    pub fn min_builtin(&self) -> EntityType {
        self.ids.min()
    }

    /// End of the built-in range; the first extension identifier.
    pub fn max_builtin(&self) -> EntityType {
        self.ids.max()
    }

    /// Identifier the next accepted extension definition will receive.
    pub fn next_type(&self) -> EntityType {
        self.next_type
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Get a definition by type identifier.
    pub fn get(&self, ty: EntityType) -> Option<&H::Def> {
        self.defs_by_type.get(&ty)
    }

    /// Get a built-in definition by internal name.
    pub fn get_builtin(&self, name: &str) -> Option<&H::Def> {
        self.builtin_by_name
            .get(name)
            .and_then(|ty| self.defs_by_type.get(ty))
    }

    /// Get any definition by internal name, built-ins first.
    pub fn get_by_name(&self, name: &str) -> Option<&H::Def> {
        self.get_builtin(name).or_else(|| {
            self.extension_by_name
                .get(name)
                .and_then(|ty| self.defs_by_type.get(ty))
        })
    }

    /// Check if a type identifier has a definition.
    pub fn contains(&self, ty: EntityType) -> bool {
        self.defs_by_type.contains_key(&ty)
    }

    /// Check if a built-in or extension definition uses this name.
    pub fn contains_name(&self, name: &str) -> bool {
        self.get_by_name(name).is_some()
    }

    /// The identifier -> definition map.
    pub fn defs_by_type(&self) -> &HashMap<EntityType, H::Def> {
        &self.defs_by_type
    }

    /// The built-in name -> identifier index.
    pub fn builtin_names(&self) -> &HashMap<String, EntityType> {
        &self.builtin_by_name
    }

    /// All definitions, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityType, &H::Def)> {
        self.defs_by_type.iter().map(|(ty, def)| (*ty, def))
    }

    /// Total number of registered definitions.
    pub fn len(&self) -> usize {
        self.defs_by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs_by_type.is_empty()
    }

    /// Copy a registered definition onto a native entity.
    ///
    /// Returns false when `ty` has no definition.
    pub fn apply_to(&self, ty: EntityType, entity: &mut H::Entity) -> bool {
        let Some(def) = self.defs_by_type.get(&ty) else {
            return false;
        };
        self.handler.copy_def_to_native(def, entity);
        true
    }

    /// Create the definition's behaviour and attach it to `entity`.
    pub fn bind_behaviour(&self, ty: EntityType, entity: &mut H::Entity) -> Option<H::Behaviour> {
        let mut behaviour = self.defs_by_type.get(&ty)?.create_behaviour()?;
        behaviour.attach(entity);
        Some(behaviour)
    }
}

impl<H: DefHandler + std::fmt::Debug> std::fmt::Debug for DefRegistry<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefRegistry")
            .field("handler", &self.handler)
            .field("config", &self.config)
            .field("min_builtin", &self.ids.min())
            .field("max_builtin", &self.ids.max())
            .field("next_type", &self.next_type)
            .field("defs", &self.defs_by_type.len())
            .finish()
    }
}
