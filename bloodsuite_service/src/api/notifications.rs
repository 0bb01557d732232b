use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Extension, Json, Router,
};
use bloodsuite_db_client::notification;
use models_bloodsuite::notification::{NotificationFilter, NotificationRow, UnreadCountResponse};
use models_bloodsuite::response::{ErrorResponse, MessageResponse};
use models_bloodsuite::user::UserContext;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(list_notifications))
        .route("/unread-count", get(unread_count))
        .route("/:id/read", put(mark_read))
        .route("/mark-all-read", put(mark_all_read))
}

/// The caller's notifications, newest first.
#[utoipa::path(
    get,
    path = "/api/notifications",
    params(NotificationFilter),
    responses(
        (status = 200, body = [NotificationRow]),
        (status = 401, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "notifications"
)]
pub async fn list_notifications(
    State(ctx): State<ApiContext>,
    Extension(user): Extension<UserContext>,
    Query(filter): Query<NotificationFilter>,
) -> Result<Json<Vec<NotificationRow>>, ApiError> {
    let unread_only = filter.unread_only.unwrap_or(false);
    let notifications =
        notification::get::list_notifications(&ctx.db, user.user_id, unread_only).await?;

    Ok(Json(notifications))
}

#[utoipa::path(
    get,
    path = "/api/notifications/unread-count",
    responses(
        (status = 200, body = UnreadCountResponse),
        (status = 401, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "notifications"
)]
pub async fn unread_count(
    State(ctx): State<ApiContext>,
    Extension(user): Extension<UserContext>,
) -> Result<Json<UnreadCountResponse>, ApiError> {
    let count = notification::get::unread_count(&ctx.db, user.user_id).await?;
    Ok(Json(UnreadCountResponse { count }))
}

/// Marks one of the caller's notifications read. Another user's
/// notification id behaves as not-found.
#[utoipa::path(
    put,
    path = "/api/notifications/{id}/read",
    params(("id" = i32, Path, description = "Notification id")),
    responses(
        (status = 200, body = NotificationRow),
        (status = 404, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "notifications"
)]
pub async fn mark_read(
    State(ctx): State<ApiContext>,
    Path(id): Path<i32>,
    Extension(user): Extension<UserContext>,
) -> Result<Json<NotificationRow>, ApiError> {
    let notification = notification::read::mark_read(&ctx.db, id, user.user_id)
        .await?
        .ok_or(ApiError::NotFound("Notification"))?;

    Ok(Json(notification))
}

#[utoipa::path(
    put,
    path = "/api/notifications/mark-all-read",
    responses(
        (status = 200, body = MessageResponse),
        (status = 401, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "notifications"
)]
pub async fn mark_all_read(
    State(ctx): State<ApiContext>,
    Extension(user): Extension<UserContext>,
) -> Result<Json<MessageResponse>, ApiError> {
    notification::read::mark_all_read(&ctx.db, user.user_id).await?;

    Ok(Json(MessageResponse {
        message: "All notifications marked as read".to_string(),
    }))
}
