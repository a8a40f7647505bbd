//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::Database;
use crate::repository::ProductStore;
use crate::service::{ProductManager, ProductService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Product use cases
    pub product_service: Arc<dyn ProductService>,
    /// Database handle, used for health checks
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the SeaORM-backed repository and service over a database handle.
    pub fn from_database(database: Database) -> Self {
        let repo = Arc::new(ProductStore::new(database.clone()));
        let product_service = Arc::new(ProductManager::new(repo));

        Self {
            product_service,
            database: Arc::new(database),
        }
    }

    /// Create new app state with manually injected services.
    pub fn new(product_service: Arc<dyn ProductService>, database: Arc<Database>) -> Self {
        Self {
            product_service,
            database,
        }
    }
}
