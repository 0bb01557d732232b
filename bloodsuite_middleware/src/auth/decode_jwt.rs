use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use bloodsuite_auth::{
    error::AuthError,
    token::{self, JwtKeys},
};
use models_bloodsuite::{response::ErrorResponse, user::UserContext};

/// Decodes the bearer token and attaches a [UserContext] to the request.
/// Every protected route sits behind this middleware; requests without a
/// valid token are rejected before any handler runs.
pub async fn handler(
    State(jwt_keys): State<JwtKeys>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let access_token =
        match bloodsuite_auth::headers::extract_access_token_from_request_headers(req.headers()) {
            Ok(access_token) => access_token,
            Err(e) => {
                tracing::trace!(error=?e, "unable to get access token");
                return Err(unauthorized("Access token required"));
            }
        };

    let claims = token::validate_access_token(&access_token, &jwt_keys).map_err(|e| match e {
        AuthError::JwtExpired => unauthorized("Token expired"),
        _ => {
            tracing::trace!(error=?e, "unable to decode jwt");
            unauthorized("Invalid token")
        }
    })?;

    // Attach user to the UserContext and to the request
    req.extensions_mut().insert(UserContext {
        user_id: claims.sub,
        email: claims.email,
        role: claims.role,
    });

    Ok(next.run(req).await)
}

fn unauthorized(message: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(ErrorResponse::new(message))).into_response()
}
