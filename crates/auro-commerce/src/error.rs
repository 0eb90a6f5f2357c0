//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Cart mutations never return these; they only come from lookups and
/// call-site validation around the cart.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Order not found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Payment not found.
    #[error("Payment not found: {0}")]
    PaymentNotFound(String),

    /// Customer not found.
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// A size must be picked before the product can go in the bag.
    #[error("Please select a size for {product}; options: {options}")]
    SizeRequired { product: String, options: String },

    /// The chosen size is not offered for the product.
    #[error("Size {size} is not available for {product}")]
    InvalidSize { product: String, size: String },

    /// Unknown status name.
    #[error("Unknown status: {0}")]
    InvalidStatus(String),

    /// Cache error.
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<auro_cache::CacheError> for CommerceError {
    fn from(e: auro_cache::CacheError) -> Self {
        CommerceError::CacheError(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
