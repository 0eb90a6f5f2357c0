//! Size options per category and size selection for the product page.

use crate::cart::CartProduct;
use crate::catalog::Product;
use crate::error::CommerceError;

/// Label for products that only come in one size.
pub const ONE_SIZE: &str = "One Size";

const RING_SIZES: &[&str] = &["5", "6", "7", "8", "9"];
const NECKLACE_LENGTHS: &[&str] = &["14\"", "16\"", "18\"", "20\""];
const LETTER_SIZES: &[&str] = &["S", "M", "L"];
const SINGLE_SIZE: &[&str] = &[ONE_SIZE];

/// Size options offered for a category.
///
/// Unknown categories get [`ONE_SIZE`].
pub fn size_options(category: &str) -> &'static [&'static str] {
    match category {
        "rings" => RING_SIZES,
        "necklaces" => NECKLACE_LENGTHS,
        "bracelets" | "bangles" | "bridal" | "mens" => LETTER_SIZES,
        _ => SINGLE_SIZE,
    }
}

/// The size picker state for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeSelection {
    options: &'static [&'static str],
    selected: Option<&'static str>,
}

impl SizeSelection {
    /// Picker for a product, preselected when only one size exists.
    pub fn for_product(product: &Product) -> Self {
        Self::auto(size_options(product.category.as_str()))
    }

    /// Picker over `options`, preselected when there is exactly one.
    pub fn auto(options: &'static [&'static str]) -> Self {
        let selected = match options {
            [only] => Some(*only),
            _ => None,
        };
        Self { options, selected }
    }

    /// Available options.
    pub fn options(&self) -> &'static [&'static str] {
        self.options
    }

    /// The current selection.
    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    /// Select a size. Matching ignores ASCII case.
    pub fn select(&mut self, product: &Product, size: &str) -> Result<(), CommerceError> {
        let wanted = size.trim();
        match self.options.iter().find(|o| o.eq_ignore_ascii_case(wanted)) {
            Some(option) => {
                self.selected = Some(*option);
                Ok(())
            }
            None => Err(CommerceError::InvalidSize {
                product: product.name.clone(),
                size: wanted.to_string(),
            }),
        }
    }

    /// Build the cart entry for `product` with the selected size.
    pub fn entry_for(&self, product: &Product) -> Result<CartProduct, CommerceError> {
        match self.selected {
            Some(size) => Ok(product.cart_entry_with_size(size)),
            None => Err(CommerceError::SizeRequired {
                product: product.name.clone(),
                options: self.options.join(", "),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_size_options_by_category() {
        assert_eq!(size_options("rings"), &["5", "6", "7", "8", "9"]);
        assert_eq!(size_options("necklaces").len(), 4);
        assert_eq!(size_options("bangles"), &["S", "M", "L"]);
        assert_eq!(size_options("earrings"), &[ONE_SIZE]);
        assert_eq!(size_options("unknown"), &[ONE_SIZE]);
    }

    #[test]
    fn test_single_option_is_preselected() {
        let catalog = Catalog::sample();
        let earrings = catalog.product("ear-etoile").unwrap();
        let picker = SizeSelection::for_product(earrings);
        assert_eq!(picker.selected(), Some(ONE_SIZE));
        let entry = picker.entry_for(earrings).unwrap();
        assert_eq!(entry.name, "\u{c9}toile Hoop Earrings \u{b7} Size One Size");
    }

    #[test]
    fn test_multiple_options_require_selection() {
        let catalog = Catalog::sample();
        let ring = catalog.product("ring-sol").unwrap();
        let mut picker = SizeSelection::for_product(ring);
        assert_eq!(picker.selected(), None);
        assert!(matches!(
            picker.entry_for(ring),
            Err(CommerceError::SizeRequired { .. })
        ));

        picker.select(ring, "7").unwrap();
        assert_eq!(
            picker.entry_for(ring).unwrap().name,
            "Solitaire Diamond Ring \u{b7} Size 7"
        );
    }

    #[test]
    fn test_select_rejects_unknown_size() {
        let catalog = Catalog::sample();
        let bracelet = catalog.product("brace-satin").unwrap();
        let mut picker = SizeSelection::for_product(bracelet);
        picker.select(bracelet, "m").unwrap();
        assert_eq!(picker.selected(), Some("M"));
        assert!(matches!(
            picker.select(bracelet, "XL"),
            Err(CommerceError::InvalidSize { .. })
        ));
        assert_eq!(picker.selected(), Some("M"));
    }
}
