//! The built-in identifier table.
//!
//! A host describes its native identifier container as a flat list of named
//! constants. The table keeps the integer ones, computes the bounds once and
//! never changes afterwards.

use serde::{Deserialize, Serialize};

use super::EntityType;
use crate::error::TableError;

/// Constant name excluded from the table; it holds the container size.
pub const COUNT_FIELD: &str = "Count";

/// A constant declared on the host's identifier container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConstValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

/// Immutable snapshot of the built-in identifiers.
///
/// `names()[i]` is the name of `values()[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdTable {
    names: Vec<String>,
    values: Vec<EntityType>,
    min: EntityType,
    max: EntityType,
}

impl IdTable {
    /// Build the table from the container's constants, in declaration order.
    ///
    /// Only integer constants that fit an `i32` and are not named
    /// [`COUNT_FIELD`] are kept.
    pub fn from_fields<I, S>(fields: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (S, ConstValue)>,
        S: Into<String>,
    {
        let mut names = Vec::new();
        let mut values = Vec::new();

        for (name, value) in fields {
            let name = name.into();
            if name == COUNT_FIELD {
                continue;
            }
            let ConstValue::Int(raw) = value else {
                continue;
            };
            let Ok(raw) = i32::try_from(raw) else {
                continue;
            };
            names.push(name);
            values.push(EntityType(raw));
        }

        let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
            return Err(TableError::Empty);
        };

        Ok(Self {
            names,
            values,
            min,
            max,
        })
    }

    /// Build the table from a flat TOML document such as `Wood = 1`.
    ///
    /// Keys come out in sorted order; booleans and strings are read and then
    /// filtered like any other non-integer constant.
    pub fn from_toml_str(src: &str) -> Result<Self, TableError> {
        let table: toml::Table = src.parse()?;
        let fields = table.into_iter().filter_map(|(name, value)| {
            let value = match value {
                toml::Value::Integer(i) => ConstValue::Int(i),
                toml::Value::Boolean(b) => ConstValue::Bool(b),
                toml::Value::String(s) => ConstValue::Str(s),
                _ => return None,
            };
            Some((name, value))
        });
        Self::from_fields(fields)
    }

    /// Identifier values, in table order.
    pub fn values(&self) -> &[EntityType] {
        &self.values
    }

    /// Identifier names, in table order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Smallest identifier in the table.
    pub fn min(&self) -> EntityType {
        self.min
    }

    /// Largest identifier in the table. Extension identifiers start here.
    pub fn max(&self) -> EntityType {
        self.max
    }

    /// Index of the first entry carrying `value`.
    pub fn index_of(&self, value: EntityType) -> Option<usize> {
        self.values.iter().position(|v| *v == value)
    }

    /// Name of the first entry carrying `value`.
    pub fn name_of(&self, value: EntityType) -> Option<&str> {
        self.index_of(value).map(|i| self.names[i].as_str())
    }

    /// Iterate `(name, value)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, EntityType)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Number of identifiers in the table.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
