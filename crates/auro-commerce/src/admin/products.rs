//! Admin product and category editor.

use auro_cache::Cache;
use chrono::{DateTime, Utc};

use crate::admin::{Ledger, Record};
use crate::catalog::{Catalog, Category, Product};
use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;

pub const PRODUCTS_STORAGE_KEY: &str = "admin-products-v1";
pub const CATEGORIES_STORAGE_KEY: &str = "admin-categories-v1";

impl Record for Product {
    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

impl Record for Category {
    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

/// Fields to change on a product; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Money>,
    pub image: Option<String>,
    pub images: Option<Vec<String>>,
    pub category: Option<CategoryId>,
    pub popularity: Option<u32>,
}

/// The console's editable copy of the catalog.
#[derive(Debug)]
pub struct ProductBook {
    products: Ledger<Product>,
    categories: Ledger<Category>,
}

impl ProductBook {
    /// Open both lists, seeding each from `catalog` when nothing is stored.
    pub fn open(cache: Cache, catalog: &Catalog) -> Self {
        Self {
            products: Ledger::open(cache.clone(), PRODUCTS_STORAGE_KEY, || catalog.products().to_vec()),
            categories: Ledger::open(cache, CATEGORIES_STORAGE_KEY, || catalog.categories().to_vec()),
        }
    }

    pub fn products(&self) -> &[Product] {
        self.products.records()
    }

    pub fn categories(&self) -> &[Category] {
        self.categories.records()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    /// The category's title, or the raw id when it is unknown.
    pub fn category_title<'a>(&'a self, id: &'a str) -> &'a str {
        self.categories.get(id).map(|c| c.title.as_str()).unwrap_or(id)
    }

    /// Put a blank product at the front and return its id.
    ///
    /// It is priced at zero, dated `now`, and filed under the first category.
    pub fn start_new(&mut self, now: DateTime<Utc>) -> ProductId {
        let id = ProductId::timestamped(now);
        let category = self
            .categories()
            .first()
            .map(|c| c.id.clone())
            .unwrap_or_else(|| CategoryId::new(""));
        let product = Product::new(
            id.clone(),
            "New product",
            Money::zero(),
            "",
            category,
            now.date_naive(),
            0,
        )
        .with_images(Vec::new());
        self.products.prepend(product);
        id
    }

    /// Apply `patch` to the product with `id`.
    ///
    /// A patched category must already exist.
    pub fn save(&mut self, id: &str, patch: ProductPatch) -> Result<(), CommerceError> {
        if let Some(category) = &patch.category {
            if self.categories.get(category.as_str()).is_none() {
                return Err(CommerceError::CategoryNotFound(category.to_string()));
            }
        }
        self.products
            .modify(id, |p| {
                if let Some(name) = patch.name {
                    p.name = name;
                }
                if let Some(price) = patch.price {
                    p.price = price;
                }
                if let Some(image) = patch.image {
                    p.image = image;
                }
                if let Some(images) = patch.images {
                    p.images = images;
                }
                if let Some(category) = patch.category {
                    p.category = category;
                }
                if let Some(popularity) = patch.popularity {
                    p.popularity = popularity;
                }
            })
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    pub fn remove(&mut self, id: &str) -> Result<(), CommerceError> {
        if self.products.remove(id) {
            Ok(())
        } else {
            Err(CommerceError::ProductNotFound(id.to_string()))
        }
    }

    /// Add a category titled `title`, keyed by its slug.
    ///
    /// Returns the existing id when the slug is taken, and `None` when the
    /// title has nothing to slug.
    pub fn add_category(&mut self, title: &str) -> Option<CategoryId> {
        let title = title.trim();
        let slug = slugify(title);
        if slug.is_empty() {
            return None;
        }
        if self.categories.get(&slug).is_none() {
            self.categories.push(Category::new(slug.as_str(), title, ""));
        }
        Some(CategoryId::new(slug))
    }
}

/// Lowercase ASCII alphanumerics joined by single dashes.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    for c in value.trim().to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_735_000_000_000).unwrap()
    }

    fn book() -> ProductBook {
        ProductBook::open(Cache::in_memory(), &Catalog::sample())
    }

    #[test]
    fn test_seeded_from_catalog() {
        let catalog = Catalog::sample();
        let book = book();
        assert_eq!(book.products(), catalog.products());
        assert_eq!(book.categories(), catalog.categories());
        assert_eq!(book.category_title("mens"), "Men's");
        assert_eq!(book.category_title("gone"), "gone");
    }

    #[test]
    fn test_start_new_prepends_blank_product() {
        let mut book = book();
        let id = book.start_new(now());
        assert_eq!(id.as_str(), "prod-1735000000000");

        let product = &book.products()[0];
        assert_eq!(product.id, id);
        assert_eq!(product.name, "New product");
        assert_eq!(product.price, Money::zero());
        assert!(product.images.is_empty());
        assert_eq!(product.category.as_str(), "rings");
        assert_eq!(product.created_at, now().date_naive());
        assert_eq!(product.popularity, 0);
    }

    #[test]
    fn test_save_changes_only_given_fields() {
        let mut book = book();
        book.save(
            "ring-sol",
            ProductPatch {
                price: Some(Money::from_units(1190)),
                category: Some(CategoryId::new("bridal")),
                ..Default::default()
            },
        )
        .unwrap();

        let product = book.get("ring-sol").unwrap();
        assert_eq!(product.price, Money::from_units(1190));
        assert_eq!(product.category.as_str(), "bridal");
        assert_eq!(product.name, "Solitaire Diamond Ring");
        assert_eq!(product.popularity, 95);
    }

    #[test]
    fn test_save_rejects_unknown_ids() {
        let mut book = book();
        assert!(matches!(
            book.save("nope", ProductPatch::default()),
            Err(CommerceError::ProductNotFound(_))
        ));
        assert!(matches!(
            book.save(
                "ring-sol",
                ProductPatch {
                    category: Some(CategoryId::new("hats")),
                    ..Default::default()
                }
            ),
            Err(CommerceError::CategoryNotFound(_))
        ));
        assert_eq!(book.get("ring-sol").unwrap().category.as_str(), "rings");
    }

    #[test]
    fn test_remove() {
        let mut book = book();
        let before = book.products().len();
        book.remove("charm-mina").unwrap();
        assert_eq!(book.products().len(), before - 1);
        assert!(book.remove("charm-mina").is_err());
    }

    #[test]
    fn test_add_category() {
        let mut book = book();
        let id = book.add_category("  Anklets & Toe Rings ").unwrap();
        assert_eq!(id.as_str(), "anklets-toe-rings");
        assert_eq!(book.categories().last().map(|c| c.title.as_str()), Some("Anklets & Toe Rings"));

        let count = book.categories().len();
        assert_eq!(book.add_category("rings").map(|c| c.into_inner()), Some("rings".to_string()));
        assert_eq!(book.categories().len(), count);
        assert_eq!(book.add_category("  !! "), None);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Men's Rings"), "men-s-rings");
        assert_eq!(slugify("--Gold--"), "gold");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_edits_persist() {
        let cache = Cache::in_memory();
        let catalog = Catalog::sample();
        let mut book = ProductBook::open(cache.clone(), &catalog);
        let id = book.start_new(now());
        book.add_category("Anklets");

        let reopened = ProductBook::open(cache, &catalog);
        assert_eq!(reopened.products()[0].id, id);
        assert_eq!(reopened.products().len(), catalog.products().len() + 1);
        assert_eq!(reopened.category_title("anklets"), "Anklets");
    }
}
