//! Cover image value object.

use core::any::Any;

use serde::{Deserialize, Serialize};

use bookwire_core::{Field, HashCache, StructuralValue};

/// Cover image locations.
///
/// `none()` is the distinguished no-image instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    original: Option<String>,
    thumbnail: Option<String>,
    #[serde(skip)]
    hash: HashCache,
}

impl Image {
    pub fn new(original: impl Into<String>, thumbnail: impl Into<String>) -> Self {
        Self::from_parts(Some(original.into()), Some(thumbnail.into()))
    }

    pub fn none() -> Self {
        Self::from_parts(None, None)
    }

    /// General constructor, used when reconstructing from a payload.
    pub fn from_parts(original: Option<String>, thumbnail: Option<String>) -> Self {
        Self {
            original,
            thumbnail,
            hash: HashCache::new(),
        }
    }

    pub fn original(&self) -> Option<&str> {
        self.original.as_deref()
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }
}

impl StructuralValue for Image {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn structural_fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::opt_text(self.original.as_deref()),
            Field::opt_text(self.thumbnail.as_deref()),
        ]
    }

    fn hash_cache(&self) -> &HashCache {
        &self.hash
    }
}

bookwire_core::value_object!(Image);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_instances_are_equal() {
        assert_eq!(Image::none(), Image::none());
    }

    #[test]
    fn images_compare_by_content() {
        let a = Image::new("covers/1.png", "thumbs/1.png");
        let b = Image::new("covers/1.png", "thumbs/1.png");
        let c = Image::new("covers/2.png", "thumbs/1.png");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Image::none());
    }
}
