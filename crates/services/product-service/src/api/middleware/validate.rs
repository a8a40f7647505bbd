//! Validation middleware that runs a route's rule table before its handler.

use std::collections::HashMap;

use axum::{
    body::{to_bytes, Body},
    extract::{Path, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use common::AppError;

use crate::api::validation::RouteRules;

/// Largest request body the validator will buffer (2 MiB)
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Evaluate the route's rules and short-circuit with 400 on any violation.
///
/// Attach with `middleware::from_fn_with_state(RULES, validate_request)`.
/// The body, when read, is buffered and handed on to the handler unchanged.
pub async fn validate_request(
    State(rules): State<RouteRules>,
    params: Option<Path<HashMap<String, String>>>,
    request: Request,
    next: Next,
) -> Response {
    let params = params.map(|Path(params)| params).unwrap_or_default();

    if !rules.reads_body() {
        let errors = rules.evaluate(&params, &Value::Null);
        if !errors.is_empty() {
            tracing::debug!(?errors, "Request rejected by validation");
            return AppError::Validation(errors).into_response();
        }
        return next.run(request).await;
    }

    let (parts, body) = request.into_parts();
    let bytes = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!("Failed to read request body: {}", e);
            return AppError::bad_request("Request body could not be read").into_response();
        }
    };

    let payload = if bytes.is_empty() {
        Value::Object(Default::default())
    } else {
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(value) => value,
            Err(e) => {
                return AppError::bad_request(format!("Malformed JSON body: {}", e)).into_response()
            }
        }
    };

    let errors = rules.evaluate(&params, &payload);
    if !errors.is_empty() {
        tracing::debug!(?errors, "Request rejected by validation");
        return AppError::Validation(errors).into_response();
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}
