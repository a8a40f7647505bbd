//! Product repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    UpdateMany,
};

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use crate::infra::Database;
use common::{AppError, AppResult, OptionExt};
use domain::{CreateProduct, Product, UpdateProduct, DEFAULT_AVAILABILITY, PRODUCT_ENTITY};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
///
/// Every method performs a single logical data-store operation. Mutations on
/// a missing id return `AppError::NotFound`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products ordered by id
    async fn list(&self) -> AppResult<Vec<Product>>;

    /// Find product by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>>;

    /// Insert a new product (availability defaults to true)
    async fn create(&self, input: CreateProduct) -> AppResult<Product>;

    /// Overwrite name, price and availability
    async fn update(&self, id: i32, input: UpdateProduct) -> AppResult<Product>;

    /// Flip the availability flag
    async fn toggle_availability(&self, id: i32) -> AppResult<Product>;

    /// Permanently delete product
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// SeaORM-backed implementation of ProductRepository
pub struct ProductStore {
    db: Database,
}

impl ProductStore {
    /// Create new repository instance
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: i32) -> AppResult<product::Model> {
        ProductEntity::find_by_id(id)
            .one(self.db.connection()?)
            .await?
            .ok_or_not_found(PRODUCT_ENTITY)
    }
}

/// Flip availability with a single `UPDATE ... SET availability = NOT availability`.
fn toggle_statement(id: i32, now: DateTime<Utc>) -> UpdateMany<ProductEntity> {
    ProductEntity::update_many()
        .col_expr(
            product::Column::Availability,
            Expr::col(product::Column::Availability).not(),
        )
        .col_expr(product::Column::UpdatedAt, Expr::value(now))
        .filter(product::Column::Id.eq(id))
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn list(&self) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .order_by_asc(product::Column::Id)
            .all(self.db.connection()?)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>> {
        let result = ProductEntity::find_by_id(id)
            .one(self.db.connection()?)
            .await?;

        Ok(result.map(Product::from))
    }

    async fn create(&self, input: CreateProduct) -> AppResult<Product> {
        let now = Utc::now();
        let active_model = ActiveModel {
            name: Set(input.name),
            price: Set(input.price),
            availability: Set(DEFAULT_AVAILABILITY),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model.insert(self.db.connection()?).await?;
        Ok(Product::from(model))
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> AppResult<Product> {
        let model = self.find_model(id).await?;

        let mut product = Product::from(model.clone());
        product.apply_update(input);

        let mut active: ActiveModel = model.into();
        active.name = Set(product.name);
        active.price = Set(product.price);
        active.availability = Set(product.availability);
        active.updated_at = Set(product.updated_at);

        let model = active.update(self.db.connection()?).await?;
        Ok(Product::from(model))
    }

    async fn toggle_availability(&self, id: i32) -> AppResult<Product> {
        toggle_statement(id, Utc::now())
            .exec_with_returning(self.db.connection()?)
            .await?
            .into_iter()
            .next()
            .map(Product::from)
            .ok_or_not_found(PRODUCT_ENTITY)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = ProductEntity::delete_by_id(id)
            .exec(self.db.connection()?)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(PRODUCT_ENTITY));
        }

        Ok(())
    }
}
