//! Shared response types.

mod response;

pub use response::{ApiMessage, Created, MessageResponse};
