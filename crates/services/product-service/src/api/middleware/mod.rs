//! API middleware.

mod validate;

pub use validate::validate_request;
