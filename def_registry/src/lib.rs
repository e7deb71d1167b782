//! # Def Registry
//!
//! Merges the host's built-in entity definitions with extension definitions
//! supplied at load time, giving each a unique and stable type identifier.
//!
//! ## Core Components
//!
//! - **handler**: The collaborator contract a concrete entity kind implements
//! - **registry**: Built-in fill, extension load, reset and lookups
//! - **shared**: Whole-batch locking for hosts that load from several threads
//! - **items**: A complete item specialization, usable as a template
//!
//! ## Lifecycle
//!
//! construct → `fill_builtin` → zero or more `load` batches → `reset` → repeat.

pub mod handler;
pub mod items;
pub mod registry;
pub mod shared;

pub use handler::*;
pub use registry::*;
pub use shared::*;

pub use entity_defs::{
    ConstValue, DisplayInfo, EntityBehaviour, EntityDef, EntityType, IdTable, LoaderConfig,
    LoaderError, LoaderErrorKind, TableError,
};
