//! Reading difficulty value object.

use core::any::Any;

use serde::{Deserialize, Serialize};

use bookwire_core::{Field, HashCache, StructuralValue};

/// Readability scores for a book, each on its own optional scale.
///
/// `empty()` is the distinguished not-rated instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDifficulty {
    lix: Option<i32>,
    let_index: Option<i32>,
    atos: Option<i32>,
    #[serde(skip)]
    hash: HashCache,
}

impl BookDifficulty {
    pub fn new(lix: Option<i32>, let_index: Option<i32>, atos: Option<i32>) -> Self {
        Self {
            lix,
            let_index,
            atos,
            hash: HashCache::new(),
        }
    }

    pub fn empty() -> Self {
        Self::new(None, None, None)
    }

    pub fn lix(&self) -> Option<i32> {
        self.lix
    }

    pub fn let_index(&self) -> Option<i32> {
        self.let_index
    }

    pub fn atos(&self) -> Option<i32> {
        self.atos
    }
}

impl StructuralValue for BookDifficulty {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn structural_fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::opt_int(self.lix.map(i64::from)),
            Field::opt_int(self.let_index.map(i64::from)),
            Field::opt_int(self.atos.map(i64::from)),
        ]
    }

    fn hash_cache(&self) -> &HashCache {
        &self.hash
    }
}

bookwire_core::value_object!(BookDifficulty);

#[cfg(test)]
mod tests {
    use super::*;
    use bookwire_core::structural_hash;

    #[test]
    fn empty_instances_are_equal() {
        assert_eq!(BookDifficulty::empty(), BookDifficulty::empty());
    }

    #[test]
    fn scores_compare_by_content() {
        let a = BookDifficulty::new(Some(30), Some(20), Some(40));
        let b = BookDifficulty::new(Some(30), Some(20), Some(40));

        assert_eq!(a, b);
        assert_eq!(structural_hash(&a), structural_hash(&b));
        assert_ne!(a, BookDifficulty::new(Some(30), Some(20), Some(41)));
    }

    #[test]
    fn an_unset_score_differs_from_zero() {
        assert_ne!(
            BookDifficulty::new(None, Some(20), Some(40)),
            BookDifficulty::new(Some(0), Some(20), Some(40))
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn score() -> impl Strategy<Value = Option<i32>> {
            proptest::option::of(-100..500i32)
        }

        fn difficulty() -> impl Strategy<Value = BookDifficulty> {
            (score(), score(), score())
                .prop_map(|(lix, let_index, atos)| BookDifficulty::new(lix, let_index, atos))
        }

        proptest! {
            #[test]
            fn equality_is_symmetric(a in difficulty(), b in difficulty()) {
                prop_assert_eq!(a == b, b == a);
            }

            #[test]
            fn equal_values_hash_equal(a in difficulty(), b in difficulty()) {
                if a == b {
                    prop_assert_eq!(structural_hash(&a), structural_hash(&b));
                }
                prop_assert_eq!(structural_hash(&a), structural_hash(&a));
            }
        }
    }
}
