//! HTTP request handlers.

pub mod health_handler;
pub mod product_handler;

pub use health_handler::{api_root, health_check};
pub use product_handler::product_routes;
