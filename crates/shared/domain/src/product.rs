//! Product domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::constants::{
    is_valid_name, is_valid_price, parse_price, DEFAULT_AVAILABILITY, MSG_NAME_EMPTY,
    MSG_PRICE_NOT_NUMERIC, MSG_PRICE_NOT_POSITIVE,
};
use crate::error::{DomainError, DomainResult};

/// Product domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Product {
    /// Store-assigned identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i32,
    /// Product name
    #[cfg_attr(feature = "openapi", schema(example = "Monitor"))]
    pub name: String,
    /// Unit price, always greater than zero
    #[cfg_attr(feature = "openapi", schema(example = 500.0))]
    pub price: f64,
    /// Whether the product can currently be sold
    #[cfg_attr(feature = "openapi", schema(example = true))]
    pub availability: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Build a freshly created product with default availability
    pub fn new(id: i32, name: String, price: f64) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            price,
            availability: DEFAULT_AVAILABILITY,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite every mutable field
    pub fn apply_update(&mut self, update: UpdateProduct) {
        self.name = update.name;
        self.price = update.price;
        self.availability = update.availability;
        self.updated_at = Utc::now();
    }

    /// Flip availability, leaving name and price untouched
    pub fn toggle_availability(&mut self) {
        self.availability = !self.availability;
        self.updated_at = Utc::now();
    }
}

/// Name validator shared by the create and update payloads
pub fn validate_product_name(name: &str) -> Result<(), ValidationError> {
    if is_valid_name(name) {
        return Ok(());
    }
    let mut error = ValidationError::new("empty_name");
    error.message = Some(MSG_NAME_EMPTY.into());
    Err(error)
}

/// Accept a price as a JSON number or as a numeric string
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(price) => Ok(price),
        RawPrice::Text(text) => {
            parse_price(&text).ok_or_else(|| de::Error::custom(MSG_PRICE_NOT_NUMERIC))
        }
    }
}

fn check_invariants(name: &str, price: f64) -> DomainResult<()> {
    if !is_valid_name(name) {
        return Err(DomainError::validation("name", MSG_NAME_EMPTY));
    }
    if !is_valid_price(price) {
        return Err(DomainError::validation("price", MSG_PRICE_NOT_POSITIVE));
    }
    Ok(())
}

/// Product creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateProduct {
    /// Product name
    #[validate(custom(function = "validate_product_name"))]
    #[cfg_attr(feature = "openapi", schema(example = "Monitor"))]
    pub name: String,
    /// Unit price (must be greater than zero)
    #[serde(deserialize_with = "deserialize_price")]
    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than zero"))]
    #[cfg_attr(feature = "openapi", schema(example = 500.0))]
    pub price: f64,
}

impl CreateProduct {
    /// Verify the persisted-product invariants hold for this input
    pub fn check_invariants(&self) -> DomainResult<()> {
        check_invariants(&self.name, self.price)
    }
}

/// Full product update data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateProduct {
    /// New product name
    #[validate(custom(function = "validate_product_name"))]
    #[cfg_attr(feature = "openapi", schema(example = "Curved Monitor"))]
    pub name: String,
    /// New unit price (must be greater than zero)
    #[serde(deserialize_with = "deserialize_price")]
    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than zero"))]
    #[cfg_attr(feature = "openapi", schema(example = 650.0))]
    pub price: f64,
    /// New availability flag
    #[cfg_attr(feature = "openapi", schema(example = false))]
    pub availability: bool,
}

impl UpdateProduct {
    /// Verify the persisted-product invariants hold for this input
    pub fn check_invariants(&self) -> DomainResult<()> {
        check_invariants(&self.name, self.price)
    }
}
