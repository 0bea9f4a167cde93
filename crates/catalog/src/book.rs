//! Book aggregate root.

use serde::{Deserialize, Serialize};

use bookwire_core::{BookId, CategoryId, Entity, RelationId};

use crate::category::BookCategory;
use crate::date_range::DateRange;
use crate::difficulty::BookDifficulty;
use crate::image::Image;
use crate::money::Money;

/// Join record linking a book to a category.
///
/// Created only by [`Book::add_categories`]; the aggregate hands out resolved
/// category ids, and link records themselves are only surfaced read-only for
/// serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLink {
    id: RelationId,
    book_id: BookId,
    category_id: CategoryId,
}

impl CategoryLink {
    pub(crate) fn new(book_id: BookId, category_id: CategoryId) -> Self {
        Self {
            id: RelationId::new(),
            book_id,
            category_id,
        }
    }

    /// Rebuild an existing link from persisted parts.
    pub fn reconstitute(id: RelationId, book_id: BookId, category_id: CategoryId) -> Self {
        Self {
            id,
            book_id,
            category_id,
        }
    }

    pub fn book_id(&self) -> BookId {
        self.book_id
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }
}

impl Entity for CategoryLink {
    type Id = RelationId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Aggregate root: a book and the join records it owns.
///
/// All fields are set at construction; the only mutation the aggregate allows
/// is [`Book::add_categories`], which creates join records referencing the
/// book's own identifier. Derived equality compares full content including the
/// identifier, so two books with identical fields but fresh ids are unequal -
/// use [`Entity::same_identity`] for a pure identity check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    name: String,
    author: String,
    language: String,
    valid: DateRange,
    image: Image,
    price: Money,
    isbn: String,
    difficulty: BookDifficulty,
    length: u64,
    categories: Vec<CategoryLink>,
}

impl Book {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        language: impl Into<String>,
        valid: DateRange,
        image: Image,
        price: Money,
        isbn: impl Into<String>,
        difficulty: BookDifficulty,
        length: u64,
    ) -> Self {
        Self {
            id: BookId::new(),
            name: name.into(),
            author: author.into(),
            language: language.into(),
            valid,
            image,
            price,
            isbn: isbn.into(),
            difficulty,
            length,
            categories: Vec::new(),
        }
    }

    /// Rebuild an existing aggregate from persisted parts.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: BookId,
        name: String,
        author: String,
        language: String,
        valid: DateRange,
        image: Image,
        price: Money,
        isbn: String,
        difficulty: BookDifficulty,
        length: u64,
        categories: Vec<CategoryLink>,
    ) -> Self {
        Self {
            id,
            name,
            author,
            language,
            valid,
            image,
            price,
            isbn,
            difficulty,
            length,
            categories,
        }
    }

    /// Link this book to the given categories.
    ///
    /// Adds are idempotent: a pair already linked does not produce a second
    /// join record.
    pub fn add_categories(&mut self, categories: &[BookCategory]) {
        for category in categories {
            let category_id = *category.id();
            if !self
                .categories
                .iter()
                .any(|link| link.category_id() == category_id)
            {
                self.categories.push(CategoryLink::new(self.id, category_id));
            }
        }
    }

    /// Resolved ids of the linked categories.
    pub fn categories(&self) -> Vec<CategoryId> {
        self.categories.iter().map(CategoryLink::category_id).collect()
    }

    /// Read-only view of the owned join records, for serialization.
    pub fn category_links(&self) -> &[CategoryLink] {
        &self.categories
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn valid(&self) -> &DateRange {
        &self.valid
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn difficulty(&self) -> &BookDifficulty {
        &self.difficulty
    }

    pub fn length(&self) -> u64 {
        self.length
    }
}

impl Entity for Book {
    type Id = BookId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
