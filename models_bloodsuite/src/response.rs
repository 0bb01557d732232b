use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A plain old json error response for use with axum.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Message to explain failure
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorResponse { error: error.into() }
    }
}

/// Acknowledgement body for writes with nothing interesting to return.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
