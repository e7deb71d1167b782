//! # Entity Defs
//!
//! Shared vocabulary for entity definition registries: type identifiers, the
//! built-in identifier table, the definition/behaviour traits and the errors a
//! loader reports back to its caller.
//!
//! This crate holds no registry state of its own; see `def_registry` for the
//! allocation and loading pipeline.

pub mod config;
pub mod defs;
pub mod error;
pub mod ids;

pub use config::*;
pub use defs::*;
pub use error::*;
pub use ids::*;
