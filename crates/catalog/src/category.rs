//! Book category entity.

use serde::{Deserialize, Serialize};

use bookwire_core::{CategoryId, Entity};

/// A category a book can belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCategory {
    id: CategoryId,
    name: String,
}

impl BookCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
        }
    }

    /// Rebuild an existing category from persisted parts.
    pub fn reconstitute(id: CategoryId, name: String) -> Self {
        Self { id, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for BookCategory {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_with_equal_names_keep_distinct_identities() {
        let a = BookCategory::new("thriller");
        let b = BookCategory::new("thriller");

        assert_eq!(a.name(), b.name());
        assert!(!a.same_identity(&b));
    }
}
