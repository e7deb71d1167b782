//! The collaborator contract between the registry and a concrete entity kind.

use std::collections::HashMap;

use entity_defs::{ConstValue, EntityBehaviour, EntityDef, EntityType, LoaderError};

/// How the host's backing storage should change size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityRequest {
    /// Shrink back to the built-in-only baseline.
    Rewind,
    /// Make room for this many more extension definitions.
    Additional(usize),
}

/// Hooks a concrete entity kind supplies to the registry.
///
/// The handler owns whatever host-side storage the kind needs (texture slots,
/// per-type arrays) and performs every side effect; the registry only
/// sequences the calls and keeps the identifier bookkeeping.
pub trait DefHandler {
    type Entity;
    type Behaviour: EntityBehaviour<Self::Entity>;
    type Def: EntityDef<Entity = Self::Entity, Behaviour = Self::Behaviour>;

    /// Constants of the host's built-in identifier container.
    ///
    /// Read once when the registry is constructed.
    fn id_fields(&self) -> Vec<(String, ConstValue)>;

    /// Grow or rewind host storage indexed by type identifier.
    fn extend_capacity(&mut self, request: CapacityRequest);

    /// The native entity for a built-in identifier.
    fn resolve_native(&self, ty: EntityType) -> Self::Entity;

    fn copy_native_to_def(&self, entity: &Self::Entity, def: &mut Self::Def);

    fn copy_def_to_native(&self, def: &Self::Def, entity: &mut Self::Entity);

    /// Check that every resource the definition needs exists.
    fn check_resources(&self, def: &Self::Def) -> Vec<LoaderError>;

    /// Load the definition's resources. The definition already carries its
    /// assigned type identifier.
    fn load_resources(&mut self, def: &Self::Def) -> Vec<LoaderError>;

    /// Fill in derived and default properties before registration.
    fn apply_defaults(&self, def: &mut Self::Def);

    /// An empty definition carrying the native entity's display name.
    fn new_def_with_display_name(&self, entity: &Self::Entity) -> Self::Def;

    /// The canonical identifier of a native entity; differs from the slot it
    /// was resolved from for alias identifiers.
    fn regular_type(&self, entity: &Self::Entity) -> EntityType;

    /// Post-processing after the built-in fill, e.g. cross-referencing.
    fn after_fill(&mut self, _defs: &mut HashMap<EntityType, Self::Def>) {}
}
