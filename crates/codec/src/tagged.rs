//! Contract-based tagged strategy.

use crate::error::{DecodeError, EncodeError};
use crate::serializer::{Payload, Serializer};
use crate::wire::{WireReader, WireWriter};

/// Tagged field-number encoding over explicitly opted-in contracts.
///
/// Serializes only the fields a type's [`crate::wire::WireContract`] impl
/// declares, producing materially smaller payloads than the binary dump.
/// Decoding skips unknown field numbers and substitutes documented defaults
/// for absent fields, so payloads tolerate some structural evolution.
#[derive(Debug, Default, Clone, Copy)]
pub struct TaggedSerializer;

impl TaggedSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl Serializer for TaggedSerializer {
    fn serialize<T: Payload>(&self, value: &T) -> Result<Vec<u8>, EncodeError> {
        let mut writer = WireWriter::new();
        value.encode_wire(&mut writer);
        Ok(writer.into_bytes())
    }

    fn deserialize<T: Payload>(&self, bytes: &[u8]) -> Result<T, DecodeError> {
        let mut reader = WireReader::new(bytes);
        T::decode_wire(&mut reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookwire_catalog::{Book, Money, sample};

    #[test]
    fn round_trips_a_single_book() {
        let book = sample::random_book(5);
        let strategy = TaggedSerializer::new();

        let payload = strategy.serialize(&book).unwrap();
        let restored: Book = strategy.deserialize(&payload).unwrap();

        assert_eq!(restored, book);
    }

    #[test]
    fn produces_smaller_payloads_than_the_binary_dump() {
        use crate::binary::BinarySerializer;

        let books = sample::random_books(50);
        let tagged = TaggedSerializer::new().serialize(&books).unwrap();
        let binary = BinarySerializer::new().serialize(&books).unwrap();

        assert!(tagged.len() < binary.len());
    }

    #[test]
    fn an_unknown_currency_in_the_payload_is_malformed() {
        let mut writer = WireWriter::new();
        writer.sint_field(1, 100);
        writer.str_field(2, "XYZ");
        let bytes = writer.into_bytes();

        let err = TaggedSerializer::new()
            .deserialize::<Money>(&bytes)
            .unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }
}
