//! Product types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cart::CartProduct;
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;

/// Separator between a product name and its selected size in cart lines.
const SIZE_SEPARATOR: &str = " \u{b7} Size ";

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Primary image URL.
    pub image: String,
    /// Gallery image URLs, primary first.
    #[serde(default)]
    pub images: Vec<String>,
    /// Optional badge such as "new".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Category this product belongs to.
    pub category: CategoryId,
    /// Date the product was added to the catalog.
    pub created_at: NaiveDate,
    /// Arbitrary popularity score; higher is more popular.
    pub popularity: u32,
}

impl Product {
    /// Create a product with no gallery and no tag.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
        category: impl Into<CategoryId>,
        created_at: NaiveDate,
        popularity: u32,
    ) -> Self {
        let image = image.into();
        Self {
            id: id.into(),
            name: name.into(),
            price,
            images: vec![image.clone()],
            image,
            tag: None,
            category: category.into(),
            created_at,
            popularity,
        }
    }

    /// Set the gallery images.
    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    /// Set the badge.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Gallery images, falling back to the primary image.
    pub fn gallery(&self) -> Vec<&str> {
        if self.images.is_empty() {
            vec![self.image.as_str()]
        } else {
            self.images.iter().map(String::as_str).collect()
        }
    }

    /// The fields the cart captures when this product is added.
    pub fn cart_entry(&self) -> CartProduct {
        CartProduct {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            image: self.image.clone(),
        }
    }

    /// Cart entry whose display name carries the selected size.
    ///
    /// The line is still keyed by the product id, so two sizes of the same
    /// product share one line and the first size added names it.
    pub fn cart_entry_with_size(&self, size: &str) -> CartProduct {
        CartProduct {
            name: format!("{}{}{}", self.name, SIZE_SEPARATOR, size),
            ..self.cart_entry()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> Product {
        Product::new(
            "ring-sol",
            "Solitaire Diamond Ring",
            Money::from_units(1290),
            "https://example.com/ring.jpg",
            "rings",
            NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
            95,
        )
    }

    #[test]
    fn test_cart_entry_copies_display_fields() {
        let entry = ring().cart_entry();
        assert_eq!(entry.id.as_str(), "ring-sol");
        assert_eq!(entry.name, "Solitaire Diamond Ring");
        assert_eq!(entry.price, Money::from_units(1290));
        assert_eq!(entry.image, "https://example.com/ring.jpg");
    }

    #[test]
    fn test_cart_entry_with_size() {
        let entry = ring().cart_entry_with_size("7");
        assert_eq!(entry.name, "Solitaire Diamond Ring \u{b7} Size 7");
        assert_eq!(entry.id.as_str(), "ring-sol");
    }

    #[test]
    fn test_gallery_falls_back_to_image() {
        let product = ring().with_images(Vec::new());
        assert_eq!(product.gallery(), vec!["https://example.com/ring.jpg"]);
    }

    #[test]
    fn test_product_json_shape() {
        let json = serde_json::to_value(ring().with_tag("new")).unwrap();
        assert_eq!(json["price"], 1290);
        assert_eq!(json["createdAt"], "2025-02-10");
        assert_eq!(json["category"], "rings");
        assert_eq!(json["tag"], "new");
    }
}
