//! In-memory service model consumed by the generator.
//!
//! The model arrives pre-validated from the definition-parsing layer: legal
//! identifiers, legal paths, no duplicate method names. Nothing here is
//! mutated after construction; one model plus one configuration produces one
//! generated unit.

mod types;

pub use types::*;
