//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The product entity and its input types are shared by the repository,
//! service and HTTP layers.

pub mod constants;
pub mod error;
pub mod product;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use product::{validate_product_name, CreateProduct, Product, UpdateProduct};
