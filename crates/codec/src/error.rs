//! Codec error taxonomy.
//!
//! Serialization is a deterministic pure function: none of these errors are
//! retried or swallowed internally, they surface to the caller as failed
//! results.

use thiserror::Error;

/// Serialization failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The value cannot be represented by the chosen strategy.
    #[error("value not representable by this strategy: {0}")]
    Unrepresentable(String),

    /// The backing codec rejected the value.
    #[error("codec failure: {0}")]
    Codec(String),
}

impl EncodeError {
    pub fn unrepresentable(msg: impl Into<String>) -> Self {
        Self::Unrepresentable(msg.into())
    }

    pub fn codec(msg: impl Into<String>) -> Self {
        Self::Codec(msg.into())
    }
}

/// Deserialization failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload ended before the declared content did.
    #[error("payload truncated at offset {offset}: {needed} more byte(s) needed")]
    Truncated { offset: usize, needed: usize },

    /// The payload violates the wire format or carries invalid values.
    #[error("malformed payload: {0}")]
    Malformed(String),

    /// The payload's framing declares a different type than the requested one.
    #[error("payload type mismatch: expected `{expected}`, found `{found}`")]
    TypeMismatch { expected: String, found: String },

    /// Bytes remained after the payload was fully decoded.
    #[error("{0} trailing byte(s) after payload")]
    TrailingBytes(usize),
}

impl DecodeError {
    pub fn truncated(offset: usize, needed: usize) -> Self {
        Self::Truncated { offset, needed }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}
