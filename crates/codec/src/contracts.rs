//! Wire contracts for the catalog types.
//!
//! Field numbers are part of the wire contract: never renumber an existing
//! field, only append. Decoding goes through the domain constructors, so a
//! payload cannot produce a value the domain could not have built itself.

use bookwire_catalog::{Book, BookCategory, BookDifficulty, CategoryLink, DateRange, Image, Money};
use bookwire_core::{BookId, BoundedRange, CategoryId, Entity, RelationId};

use crate::error::DecodeError;
use crate::wire::{WireContract, WireReader, WireType, WireWriter};

fn decode_i32(reader: &mut WireReader<'_>, field: &str) -> Result<i32, DecodeError> {
    let value = reader.sint()?;
    i32::try_from(value)
        .map_err(|_| DecodeError::malformed(format!("{field} score {value} out of range")))
}

impl WireContract for Money {
    fn encode_wire(&self, w: &mut WireWriter) {
        w.sint_field(1, self.amount_minor());
        w.str_field(2, self.currency());
    }

    fn decode_wire(r: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        let mut amount_minor = 0i64;
        let mut currency: Option<String> = None;

        while let Some((number, wire)) = r.next_key()? {
            match (number, wire) {
                (1, WireType::Varint) => amount_minor = r.sint()?,
                (2, WireType::Len) => currency = Some(r.str()?.to_owned()),
                _ => r.skip(wire)?,
            }
        }

        // Currency is a required field of the contract: there is no usable
        // default for it.
        let currency =
            currency.ok_or_else(|| DecodeError::malformed("money payload missing currency"))?;
        Money::parse(amount_minor, &currency).map_err(|e| DecodeError::malformed(e.to_string()))
    }
}

impl WireContract for DateRange {
    fn encode_wire(&self, w: &mut WireWriter) {
        w.opt_instant_field(1, self.from());
        w.opt_instant_field(2, self.to());
    }

    fn decode_wire(r: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        let mut from = None;
        let mut to = None;

        while let Some((number, wire)) = r.next_key()? {
            match (number, wire) {
                (1, WireType::Varint) => from = Some(r.instant()?),
                (2, WireType::Varint) => to = Some(r.instant()?),
                _ => r.skip(wire)?,
            }
        }

        Ok(DateRange::from_bounds(from, to))
    }
}

impl WireContract for Image {
    fn encode_wire(&self, w: &mut WireWriter) {
        w.opt_str_field(1, self.original());
        w.opt_str_field(2, self.thumbnail());
    }

    fn decode_wire(r: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        let mut original = None;
        let mut thumbnail = None;

        while let Some((number, wire)) = r.next_key()? {
            match (number, wire) {
                (1, WireType::Len) => original = Some(r.str()?.to_owned()),
                (2, WireType::Len) => thumbnail = Some(r.str()?.to_owned()),
                _ => r.skip(wire)?,
            }
        }

        Ok(Image::from_parts(original, thumbnail))
    }
}

impl WireContract for BookDifficulty {
    fn encode_wire(&self, w: &mut WireWriter) {
        w.opt_sint_field(1, self.lix().map(i64::from));
        w.opt_sint_field(2, self.let_index().map(i64::from));
        w.opt_sint_field(3, self.atos().map(i64::from));
    }

    fn decode_wire(r: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        let mut lix = None;
        let mut let_index = None;
        let mut atos = None;

        while let Some((number, wire)) = r.next_key()? {
            match (number, wire) {
                (1, WireType::Varint) => lix = Some(decode_i32(r, "lix")?),
                (2, WireType::Varint) => let_index = Some(decode_i32(r, "let")?),
                (3, WireType::Varint) => atos = Some(decode_i32(r, "atos")?),
                _ => r.skip(wire)?,
            }
        }

        Ok(BookDifficulty::new(lix, let_index, atos))
    }
}

impl WireContract for BookCategory {
    fn encode_wire(&self, w: &mut WireWriter) {
        w.uuid_field(1, self.id().as_uuid());
        w.str_field(2, self.name());
    }

    fn decode_wire(r: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        let mut id = None;
        let mut name = String::new();

        while let Some((number, wire)) = r.next_key()? {
            match (number, wire) {
                (1, WireType::Len) => id = Some(CategoryId::from_uuid(r.uuid()?)),
                (2, WireType::Len) => name = r.str()?.to_owned(),
                _ => r.skip(wire)?,
            }
        }

        let id = id.ok_or_else(|| DecodeError::malformed("category payload missing id"))?;
        Ok(BookCategory::reconstitute(id, name))
    }
}

impl WireContract for CategoryLink {
    fn encode_wire(&self, w: &mut WireWriter) {
        w.uuid_field(1, self.id().as_uuid());
        w.uuid_field(2, self.book_id().as_uuid());
        w.uuid_field(3, self.category_id().as_uuid());
    }

    fn decode_wire(r: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        let mut id = None;
        let mut book_id = None;
        let mut category_id = None;

        while let Some((number, wire)) = r.next_key()? {
            match (number, wire) {
                (1, WireType::Len) => id = Some(RelationId::from_uuid(r.uuid()?)),
                (2, WireType::Len) => book_id = Some(BookId::from_uuid(r.uuid()?)),
                (3, WireType::Len) => category_id = Some(CategoryId::from_uuid(r.uuid()?)),
                _ => r.skip(wire)?,
            }
        }

        match (id, book_id, category_id) {
            (Some(id), Some(book_id), Some(category_id)) => {
                Ok(CategoryLink::reconstitute(id, book_id, category_id))
            }
            _ => Err(DecodeError::malformed(
                "category link payload missing an identifier",
            )),
        }
    }
}

impl WireContract for Book {
    fn encode_wire(&self, w: &mut WireWriter) {
        w.uuid_field(1, self.id().as_uuid());
        w.str_field(2, self.name());
        w.str_field(3, self.author());
        w.str_field(4, self.language());
        w.message_field(5, |w| self.valid().encode_wire(w));
        w.message_field(6, |w| self.image().encode_wire(w));
        w.message_field(7, |w| self.price().encode_wire(w));
        w.str_field(8, self.isbn());
        w.message_field(9, |w| self.difficulty().encode_wire(w));
        w.uint_field(10, self.length());
        for link in self.category_links() {
            w.message_field(11, |w| link.encode_wire(w));
        }
    }

    fn decode_wire(r: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        let mut id = None;
        let mut name = String::new();
        let mut author = String::new();
        let mut language = String::new();
        let mut valid = DateRange::empty();
        let mut image = Image::none();
        let mut price = None;
        let mut isbn = String::new();
        let mut difficulty = BookDifficulty::empty();
        let mut length = 0u64;
        let mut categories = Vec::new();

        while let Some((number, wire)) = r.next_key()? {
            match (number, wire) {
                (1, WireType::Len) => id = Some(BookId::from_uuid(r.uuid()?)),
                (2, WireType::Len) => name = r.str()?.to_owned(),
                (3, WireType::Len) => author = r.str()?.to_owned(),
                (4, WireType::Len) => language = r.str()?.to_owned(),
                (5, WireType::Len) => valid = DateRange::decode_wire(&mut r.message()?)?,
                (6, WireType::Len) => image = Image::decode_wire(&mut r.message()?)?,
                (7, WireType::Len) => price = Some(Money::decode_wire(&mut r.message()?)?),
                (8, WireType::Len) => isbn = r.str()?.to_owned(),
                (9, WireType::Len) => difficulty = BookDifficulty::decode_wire(&mut r.message()?)?,
                (10, WireType::Varint) => length = r.uint()?,
                (11, WireType::Len) => categories.push(CategoryLink::decode_wire(&mut r.message()?)?),
                _ => r.skip(wire)?,
            }
        }

        let id = id.ok_or_else(|| DecodeError::malformed("book payload missing id"))?;
        // Contract default for an absent price: zero US dollars.
        let price = price.unwrap_or_else(|| Money::usd(0));

        Ok(Book::reconstitute(
            id, name, author, language, valid, image, price, isbn, difficulty, length, categories,
        ))
    }
}

/// A dataset: repeated field 1, one length-delimited message per element.
impl<T: WireContract> WireContract for Vec<T> {
    fn encode_wire(&self, w: &mut WireWriter) {
        for element in self {
            w.message_field(1, |w| element.encode_wire(w));
        }
    }

    fn decode_wire(r: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        let mut elements = Vec::new();
        while let Some((number, wire)) = r.next_key()? {
            match (number, wire) {
                (1, WireType::Len) => elements.push(T::decode_wire(&mut r.message()?)?),
                _ => r.skip(wire)?,
            }
        }
        Ok(elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializer::Serializer;
    use crate::tagged::TaggedSerializer;
    use bookwire_catalog::sample;

    #[test]
    fn value_objects_round_trip() {
        let strategy = TaggedSerializer::new();

        let money = Money::dkk(249_95);
        let bytes = strategy.serialize(&money).unwrap();
        assert_eq!(strategy.deserialize::<Money>(&bytes).unwrap(), money);

        let difficulty = BookDifficulty::new(Some(30), None, Some(-2));
        let bytes = strategy.serialize(&difficulty).unwrap();
        assert_eq!(
            strategy.deserialize::<BookDifficulty>(&bytes).unwrap(),
            difficulty
        );
    }

    #[test]
    fn absent_fields_decode_to_defaults() {
        // A payload carrying only the id: every other field takes its default.
        let book = sample::random_book(1);
        let mut writer = WireWriter::new();
        writer.uuid_field(1, book.id().as_uuid());
        let bytes = writer.into_bytes();

        let decoded: Book = TaggedSerializer::new().deserialize(&bytes).unwrap();
        assert_eq!(decoded.id(), book.id());
        assert_eq!(decoded.name(), "");
        assert_eq!(*decoded.valid(), DateRange::empty());
        assert_eq!(*decoded.image(), Image::none());
        assert_eq!(*decoded.price(), Money::usd(0));
        assert!(decoded.categories().is_empty());
    }

    #[test]
    fn unknown_fields_are_skipped() {
        let money = Money::usd(42);
        let mut writer = WireWriter::new();
        money.encode_wire(&mut writer);
        writer.str_field(99, "from a future schema");
        let bytes = writer.into_bytes();

        let decoded: Money = TaggedSerializer::new().deserialize(&bytes).unwrap();
        assert_eq!(decoded, money);
    }

    #[test]
    fn missing_book_id_is_malformed() {
        let mut writer = WireWriter::new();
        writer.str_field(2, "a book with no identity");
        let bytes = writer.into_bytes();

        let err = TaggedSerializer::new()
            .deserialize::<Book>(&bytes)
            .unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn datasets_preserve_order_and_cross_references() {
        let books = sample::random_books(4);
        let strategy = TaggedSerializer::new();

        let bytes = strategy.serialize(&books).unwrap();
        let restored: Vec<Book> = strategy.deserialize(&bytes).unwrap();

        assert_eq!(restored, books);
        for (restored, original) in restored.iter().zip(&books) {
            assert_eq!(restored.categories(), original.categories());
        }
    }
}
