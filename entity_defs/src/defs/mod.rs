//! Definition and behaviour traits implemented by each entity kind.

use serde::{Deserialize, Serialize};

use crate::ids::EntityType;

/// A registrable entity definition.
///
/// The registry only touches identity: the type identifier and the internal
/// name. Everything else belongs to the concrete definition.
pub trait EntityDef {
    /// The host's native entity this definition describes.
    type Entity;

    /// Policy object bound to native entities of this kind.
    type Behaviour: EntityBehaviour<Self::Entity>;

    /// Assigned type identifier, or [`EntityType::NONE`] before registration.
    fn entity_type(&self) -> EntityType;

    fn set_entity_type(&mut self, ty: EntityType);

    /// Stable, case-sensitive internal name.
    fn internal_name(&self) -> &str;

    fn set_internal_name(&mut self, name: String);

    /// Create the behaviour for a freshly spawned native entity.
    fn create_behaviour(&self) -> Option<Self::Behaviour> {
        None
    }
}

/// Behaviour attached to a native entity.
pub trait EntityBehaviour<E> {
    /// Bind this behaviour to `entity`.
    fn attach(&mut self, entity: &mut E);
}

/// Presentation fields shared by every definition kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayInfo {
    pub name: String,
    #[serde(default)]
    pub tooltip: Vec<String>,
}

impl DisplayInfo {
    /// Create display info with just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tooltip: Vec::new(),
        }
    }

    /// Check whether a display name is set.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_info() {
        assert!(DisplayInfo::named("Wood").has_name());
        assert!(!DisplayInfo::default().has_name());
    }
}
