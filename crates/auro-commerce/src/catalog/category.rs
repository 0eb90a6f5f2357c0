//! Category types for product organization.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier (also its URL slug).
    pub id: CategoryId,
    /// Display title.
    pub title: String,
    /// Category image URL.
    pub image: String,
}

impl Category {
    /// Create a category.
    pub fn new(
        id: impl Into<CategoryId>,
        title: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: image.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_new() {
        let cat = Category::new("rings", "Rings", "https://example.com/r.jpg");
        assert_eq!(cat.id.as_str(), "rings");
        assert_eq!(cat.title, "Rings");
    }
}
