//! `bookwire-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no codec or harness concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod range;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{BookId, CategoryId, RelationId};
pub use range::BoundedRange;
pub use value_object::{
    Field, HashCache, StructuralValue, ValueObject, opt_structural_eq, structural_eq,
    structural_hash,
};
