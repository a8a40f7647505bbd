//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Product
// =============================================================================

/// Availability assigned to newly created products
pub const DEFAULT_AVAILABILITY: bool = true;

/// Entity name used in not-found messages
pub const PRODUCT_ENTITY: &str = "Product";

/// Exclusive lower bound for product prices
pub const MIN_PRICE_EXCLUSIVE: f64 = 0.0;

// =============================================================================
// Validation messages
// =============================================================================

pub const MSG_NAME_EMPTY: &str = "Product name cannot be empty";
pub const MSG_NAME_NOT_TEXT: &str = "Product name must be text";
pub const MSG_PRICE_EMPTY: &str = "Product price cannot be empty";
pub const MSG_PRICE_NOT_NUMERIC: &str = "Invalid price value";
pub const MSG_PRICE_NOT_POSITIVE: &str = "Price must be greater than zero";
pub const MSG_AVAILABILITY_INVALID: &str = "Invalid availability value";
pub const MSG_ID_INVALID: &str = "Invalid ID";

/// Check whether a price satisfies the positivity invariant
pub fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price > MIN_PRICE_EXCLUSIVE
}

/// Parse a price sent as text, e.g. `"500"` or `"12.5"`
pub fn parse_price(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Check whether a name satisfies the non-empty invariant
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}
