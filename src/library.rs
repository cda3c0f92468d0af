//! Track catalog: immutable track records and ordered lookups.
//!
//! The catalog is validated once at construction (non-empty, unique ids)
//! and read-only afterwards.

mod catalog;
mod model;

pub use catalog::*;
pub use model::*;
