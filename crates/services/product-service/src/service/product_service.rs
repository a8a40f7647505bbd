//! Product service - Handles product-related use cases.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{CreateProduct, Product, UpdateProduct, PRODUCT_ENTITY};

use crate::repository::ProductRepository;

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// List every product
    async fn list_products(&self) -> AppResult<Vec<Product>>;

    /// Get product by ID
    async fn get_product(&self, id: i32) -> AppResult<Product>;

    /// Create a new product
    async fn create_product(&self, input: CreateProduct) -> AppResult<Product>;

    /// Replace all mutable fields of a product
    async fn update_product(&self, id: i32, input: UpdateProduct) -> AppResult<Product>;

    /// Flip product availability
    async fn toggle_availability(&self, id: i32) -> AppResult<Product>;

    /// Delete product
    async fn delete_product(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ProductService using repository.
pub struct ProductManager {
    repo: Arc<dyn ProductRepository>,
}

impl ProductManager {
    /// Create new product service instance with repository
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ProductService for ProductManager {
    async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.repo.list().await
    }

    async fn get_product(&self, id: i32) -> AppResult<Product> {
        self.repo.find_by_id(id).await?.ok_or_not_found(PRODUCT_ENTITY)
    }

    async fn create_product(&self, input: CreateProduct) -> AppResult<Product> {
        input.check_invariants()?;
        self.repo.create(input).await
    }

    async fn update_product(&self, id: i32, input: UpdateProduct) -> AppResult<Product> {
        input.check_invariants()?;
        self.repo.update(id, input).await
    }

    async fn toggle_availability(&self, id: i32) -> AppResult<Product> {
        self.repo.toggle_availability(id).await
    }

    async fn delete_product(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await
    }
}
