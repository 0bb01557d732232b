use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use models_bloodsuite::{response::ErrorResponse, user::UserContext, Role};

/// Rejects authenticated users whose role is not in the allowed set.
/// Must be layered inside (after) [super::decode_jwt::handler].
pub async fn handler(
    State(allowed): State<&'static [Role]>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    let Some(user) = req.extensions().get::<UserContext>() else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("Access token required")),
        )
            .into_response());
    };

    if !allowed.contains(&user.role) {
        tracing::warn!(user_id=%user.user_id, role=%user.role, "role not permitted for this route");
        return Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::new("Insufficient permissions")),
        )
            .into_response());
    }

    Ok(next.run(req).await)
}
