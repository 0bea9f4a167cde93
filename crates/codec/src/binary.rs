//! Type-framed binary dump strategy.

use std::io::Cursor;

use crate::error::{DecodeError, EncodeError};
use crate::serializer::{Payload, Serializer};

/// Direct binary field dump with a type-name frame.
///
/// Layout: `u32` little-endian name length, type name bytes, bincode body.
/// The frame is what lets `deserialize::<T>` reject a payload produced for a
/// different type instead of misreading its bytes. Within one serialized
/// graph, cross-references between entities travel as identifiers and are
/// restored as the same identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct BinarySerializer;

impl BinarySerializer {
    pub fn new() -> Self {
        Self
    }
}

impl Serializer for BinarySerializer {
    fn serialize<T: Payload>(&self, value: &T) -> Result<Vec<u8>, EncodeError> {
        let name = core::any::type_name::<T>();
        let body = bincode::serialize(value).map_err(|e| EncodeError::codec(e.to_string()))?;

        let mut out = Vec::with_capacity(4 + name.len() + body.len());
        out.extend_from_slice(&(name.len() as u32).to_le_bytes());
        out.extend_from_slice(name.as_bytes());
        out.extend_from_slice(&body);
        Ok(out)
    }

    fn deserialize<T: Payload>(&self, bytes: &[u8]) -> Result<T, DecodeError> {
        if bytes.len() < 4 {
            return Err(DecodeError::truncated(bytes.len(), 4 - bytes.len()));
        }
        let name_len = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;

        let rest = &bytes[4..];
        if rest.len() < name_len {
            return Err(DecodeError::truncated(bytes.len(), name_len - rest.len()));
        }
        let found = core::str::from_utf8(&rest[..name_len])
            .map_err(|_| DecodeError::malformed("type frame is not valid UTF-8"))?;

        let expected = core::any::type_name::<T>();
        if found != expected {
            return Err(DecodeError::TypeMismatch {
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }

        let body = &rest[name_len..];
        let mut cursor = Cursor::new(body);
        let value: T = bincode::deserialize_from(&mut cursor)
            .map_err(|e| DecodeError::malformed(e.to_string()))?;

        let consumed = cursor.position() as usize;
        if consumed < body.len() {
            return Err(DecodeError::TrailingBytes(body.len() - consumed));
        }
        Ok(value)
    }
}
