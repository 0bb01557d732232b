use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use models_bloodsuite::response::ErrorResponse;

/// The application error taxonomy, mapped onto HTTP statuses when a handler
/// returns it. Internal detail is logged and never sent to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// missing, duplicate, or illegal input
    #[error("{0}")]
    Validation(String),
    /// bad login credentials; one message for unknown email, inactive
    /// account, and wrong password alike
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// row missing by id
    #[error("{0} not found")]
    NotFound(&'static str),
    /// anything unexpected
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }
}

impl From<bloodsuite_auth::error::AuthError> for ApiError {
    fn from(err: bloodsuite_auth::error::AuthError) -> Self {
        ApiError::Internal(anyhow::Error::new(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Internal(error) => {
                tracing::error!(error=?error, "request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
