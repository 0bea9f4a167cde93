//! Validity window value object.

use core::any::Any;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bookwire_core::{BoundedRange, Field, HashCache, StructuralValue};

/// A date range where either bound may be absent.
///
/// `empty()` is the distinguished no-value instance: all empty ranges are
/// structurally equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRange {
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
    #[serde(skip)]
    hash: HashCache,
}

impl DateRange {
    /// Fully bounded range.
    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self::from_bounds(Some(from), Some(to))
    }

    /// Lower-bounded range.
    pub fn lower(from: DateTime<Utc>) -> Self {
        Self::from_bounds(Some(from), None)
    }

    /// Upper-bounded range.
    pub fn upper(to: DateTime<Utc>) -> Self {
        Self::from_bounds(None, Some(to))
    }

    /// Range with no bounds set.
    pub fn empty() -> Self {
        Self::from_bounds(None, None)
    }

    /// General constructor, used when reconstructing from a payload.
    pub fn from_bounds(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        Self {
            from,
            to,
            hash: HashCache::new(),
        }
    }
}

impl BoundedRange<DateTime<Utc>> for DateRange {
    fn from(&self) -> Option<DateTime<Utc>> {
        self.from
    }

    fn to(&self) -> Option<DateTime<Utc>> {
        self.to
    }
}

impl StructuralValue for DateRange {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn structural_fields(&self) -> Vec<Field<'_>> {
        vec![Field::opt_instant(self.from), Field::opt_instant(self.to)]
    }

    fn hash_cache(&self) -> &HashCache {
        &self.hash
    }
}

bookwire_core::value_object!(DateRange);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn empty_range_is_not_defined() {
        let range = DateRange::empty();
        assert!(!range.is_defined());
        assert!(range.is_empty());
        assert!(range.from().is_none());
        assert!(range.to().is_none());
    }

    #[test]
    fn lower_bounded_range_is_defined_with_absent_upper_bound() {
        let start = day(2020, 1, 1);
        let range = DateRange::lower(start);

        assert!(range.is_defined());
        assert!(!range.is_fully_bounded());
        assert_eq!(range.from(), Some(start));
        assert!(range.to().is_none());
    }

    #[test]
    fn fully_bounded_range() {
        let range = DateRange::between(day(2020, 1, 1), day(2021, 1, 1));
        assert!(range.is_fully_bounded());
    }

    #[test]
    fn empty_ranges_are_structurally_equal() {
        assert_eq!(DateRange::empty(), DateRange::empty());
    }

    #[test]
    fn lower_and_upper_bounded_ranges_differ() {
        let instant = day(2020, 1, 1);
        assert_ne!(DateRange::lower(instant), DateRange::upper(instant));
    }
}
