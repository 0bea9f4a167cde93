//! Sample dataset generation for benches and the timing harness.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::book::Book;
use crate::category::BookCategory;
use crate::date_range::DateRange;
use crate::difficulty::BookDifficulty;
use crate::image::Image;
use crate::money::Money;

/// Categories created per generated book.
const CATEGORIES_PER_BOOK: usize = 3;

fn token() -> String {
    Uuid::now_v7().simple().to_string()
}

fn validity_window() -> (DateTime<Utc>, DateTime<Utc>) {
    (
        Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2100, 1, 1, 0, 0, 0).unwrap(),
    )
}

/// One generated book with UUID-derived text fields and three fresh categories.
pub fn random_book(seed: usize) -> Book {
    let (from, to) = validity_window();
    let score = seed as i32;

    let mut book = Book::new(
        token(),
        token(),
        token(),
        DateRange::between(from, to),
        Image::new(token(), token()),
        Money::usd(100_00),
        token(),
        BookDifficulty::new(Some(score * 3), Some(score * 2), Some(score * 4)),
        (seed as u64) * 2018,
    );

    let categories: Vec<BookCategory> = (0..CATEGORIES_PER_BOOK)
        .map(|_| BookCategory::new(token()))
        .collect();
    book.add_categories(&categories);

    book
}

/// A dataset of `count` generated books.
pub fn random_books(count: usize) -> Vec<Book> {
    (0..count).map(random_book).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookwire_core::Entity;

    #[test]
    fn generates_the_requested_count() {
        assert_eq!(random_books(25).len(), 25);
    }

    #[test]
    fn generated_books_carry_three_categories() {
        let book = random_book(7);
        assert_eq!(book.categories().len(), CATEGORIES_PER_BOOK);
    }

    #[test]
    fn generated_books_have_distinct_identities() {
        let books = random_books(2);
        assert_ne!(books[0].id(), books[1].id());
    }
}
