//! Application services layer - product use cases.

mod product_service;

pub use product_service::{ProductManager, ProductService};
