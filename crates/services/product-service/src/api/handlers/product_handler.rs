//! Product handlers.

use axum::{
    extract::{Path, State},
    handler::Handler,
    middleware::from_fn_with_state,
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::{CreateProduct, Product, UpdateProduct};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::validate_request;
use crate::api::state::AppState;
use crate::api::validation::{CREATE_PRODUCT, PRODUCT_ID, UPDATE_PRODUCT};
use crate::types::{Created, MessageResponse};

/// Create product routes, each guarded by its rule table
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_products).post(
                create_product.layer(from_fn_with_state(CREATE_PRODUCT, validate_request)),
            ),
        )
        .route(
            "/:id",
            get(get_product.layer(from_fn_with_state(PRODUCT_ID, validate_request)))
                .put(update_product.layer(from_fn_with_state(UPDATE_PRODUCT, validate_request)))
                .patch(update_availability.layer(from_fn_with_state(PRODUCT_ID, validate_request)))
                .delete(delete_product.layer(from_fn_with_state(PRODUCT_ID, validate_request))),
        )
}

/// List all products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    responses(
        (status = 200, description = "Successful response", body = Vec<Product>),
        (status = 500, description = "Database error", body = common::ErrorResponse)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.product_service.list_products().await?;
    Ok(Json(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "The ID of the product to retrieve")),
    responses(
        (status = 200, description = "Successful response", body = Product),
        (status = 400, description = "Bad request - Invalid ID", body = common::ErrorResponse),
        (status = 404, description = "Product not found", body = common::ErrorResponse)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Product>> {
    let product = state.product_service.get_product(id).await?;
    Ok(Json(product))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, description = "Bad request - Invalid input data", body = common::ErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProduct>,
) -> AppResult<Created<Product>> {
    let product = state.product_service.create_product(payload).await?;
    tracing::info!(id = product.id, "Product created");
    Ok(Created(product))
}

/// Update a product with user input
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "The ID of the product to update")),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Successful response", body = Product),
        (status = 400, description = "Bad request - Invalid ID or invalid input data", body = common::ErrorResponse),
        (status = 404, description = "Product not found", body = common::ErrorResponse)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateProduct>,
) -> AppResult<Json<Product>> {
    let product = state.product_service.update_product(id, payload).await?;
    Ok(Json(product))
}

/// Toggle product availability
#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "The ID of the product to update")),
    responses(
        (status = 200, description = "Successful response", body = Product),
        (status = 400, description = "Bad request - Invalid ID", body = common::ErrorResponse),
        (status = 404, description = "Product not found", body = common::ErrorResponse)
    )
)]
pub async fn update_availability(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Product>> {
    let product = state.product_service.toggle_availability(id).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "The ID of the product to delete")),
    responses(
        (status = 200, description = "Successful response", body = MessageResponse),
        (status = 400, description = "Bad request - Invalid ID", body = common::ErrorResponse),
        (status = 404, description = "Product not found", body = common::ErrorResponse)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.product_service.delete_product(id).await?;
    tracing::info!(id, "Product deleted");
    Ok(Json(MessageResponse::new("Product deleted")))
}
