//! `bookwire-codec` — pluggable binary serialization strategies.
//!
//! One contract ([`Serializer`]), two interchangeable implementations:
//!
//! - [`BinarySerializer`] - a type-framed bincode field dump, reconstructing
//!   the full object graph exactly.
//! - [`TaggedSerializer`] - a contract-based tagged encoding where every type
//!   and field is explicitly opted in via [`WireContract`], producing
//!   materially smaller payloads and tolerating unknown or absent fields.
//!
//! The two wire formats are mutually incompatible; no cross-format reads are
//! supported.

pub mod binary;
pub mod contracts;
pub mod error;
pub mod serializer;
pub mod tagged;
pub mod wire;

pub use binary::BinarySerializer;
pub use error::{DecodeError, EncodeError};
pub use serializer::{Payload, Serializer};
pub use tagged::TaggedSerializer;
pub use wire::{WireContract, WireReader, WireType, WireWriter};
