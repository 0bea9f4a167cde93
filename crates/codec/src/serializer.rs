//! The serialization strategy contract.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{DecodeError, EncodeError};
use crate::wire::WireContract;

/// Types the strategies declare support for.
///
/// Support is opted into at compile time: the serde bounds feed the binary
/// dump strategy and `WireContract` feeds the tagged strategy, so handing an
/// unsupported type to either strategy is a type error rather than a runtime
/// failure.
pub trait Payload: Serialize + DeserializeOwned + WireContract + 'static {}

impl<T> Payload for T where T: Serialize + DeserializeOwned + WireContract + 'static {}

/// A binary serialization strategy.
///
/// Strategies are stateless, pure and reentrant: every call allocates its own
/// buffer and touches no shared state, so concurrent calls on independent
/// inputs need no coordination.
///
/// Round-trip law: for every supported payload `x`,
/// `deserialize(serialize(x))` yields a value structurally equal to `x`.
pub trait Serializer {
    /// Encode `value` into a fresh byte buffer.
    fn serialize<T: Payload>(&self, value: &T) -> Result<Vec<u8>, EncodeError>;

    /// Decode a value of type `T` from `bytes`.
    fn deserialize<T: Payload>(&self, bytes: &[u8]) -> Result<T, DecodeError>;
}
