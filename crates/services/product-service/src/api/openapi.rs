//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::types::MessageResponse;
use common::{ErrorBody, ErrorResponse, FieldError};
use domain::{CreateProduct, Product, UpdateProduct};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products REST API",
        version = "1.0.0",
        description = "API Docs for Products"
    ),
    paths(
        crate::api::handlers::product_handler::list_products,
        crate::api::handlers::product_handler::get_product,
        crate::api::handlers::product_handler::create_product,
        crate::api::handlers::product_handler::update_product,
        crate::api::handlers::product_handler::update_availability,
        crate::api::handlers::product_handler::delete_product,
    ),
    components(
        schemas(
            Product,
            CreateProduct,
            UpdateProduct,
            MessageResponse,
            ErrorResponse,
            ErrorBody,
            FieldError,
        )
    ),
    tags(
        (name = "Products", description = "API operations related to products"),
    )
)]
pub struct ApiDoc;
