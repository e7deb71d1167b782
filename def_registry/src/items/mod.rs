//! Item definitions: a complete handler specialization.
//!
//! Hosts register their own entity kinds the same way: a native type, a
//! definition type, a behaviour and a [`DefHandler`](crate::DefHandler).

mod def;
mod handler;
mod native;

pub use def::*;
pub use handler::*;
pub use native::*;
