//! Entity type identifiers and the built-in identifier table.

mod table;

pub use table::*;

use serde::{Deserialize, Serialize};

/// Integer type identifier shared by built-in and extension definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityType(pub i32);

impl EntityType {
    /// The "no entity" sentinel. Never receives a definition.
    pub const NONE: EntityType = EntityType(0);

    /// Create a type identifier from a raw value.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw integer value.
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Check whether this is the sentinel identifier.
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// The identifier directly after this one, or `None` at `i32::MAX`.
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }

    /// Iterate every identifier in `[start, end)`.
    pub fn range(start: EntityType, end: EntityType) -> impl Iterator<Item = EntityType> {
        (start.0..end.0).map(EntityType)
    }
}

impl Default for EntityType {
    fn default() -> Self {
        Self::NONE
    }
}

impl From<i32> for EntityType {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel() {
        assert!(EntityType::NONE.is_none());
        assert!(!EntityType(3).is_none());
        assert_eq!(EntityType::default(), EntityType::NONE);
    }

    #[test]
    fn test_range_is_half_open() {
        let ids: Vec<_> = EntityType::range(EntityType(-1), EntityType(2)).collect();
        assert_eq!(ids, vec![EntityType(-1), EntityType(0), EntityType(1)]);
        assert_eq!(EntityType(7).next(), Some(EntityType(8)));
    }

    #[test]
    fn test_next_at_end_of_space() {
        assert_eq!(EntityType(i32::MAX).next(), None);
    }
}
