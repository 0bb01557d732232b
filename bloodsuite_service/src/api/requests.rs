use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use anyhow::Context;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Extension, Json, Router,
};
use bloodsuite_db_client::request;
use models_bloodsuite::request::{
    BloodRequestRow, BloodRequestSummary, CreateBloodRequestRequest, RequestFilter, RequestStats,
    UpdateRequestStatusRequest,
};
use models_bloodsuite::response::ErrorResponse;
use models_bloodsuite::user::UserContext;
use models_bloodsuite::{RequestStatus, Role};

const REQUEST_WRITE_ROLES: &[Role] = &[Role::Hospital, Role::BloodBank, Role::Admin];

pub fn router() -> Router<ApiContext> {
    let writers = Router::new()
        .route("/", post(create_request))
        .route("/:id/status", put(update_request_status))
        .route_layer(axum::middleware::from_fn_with_state(
            REQUEST_WRITE_ROLES,
            bloodsuite_middleware::auth::require_roles::handler,
        ));

    Router::new()
        .route("/", get(list_requests))
        .route("/stats", get(request_stats))
        .merge(writers)
}

/// Open and past requests, most urgent first.
#[utoipa::path(
    get,
    path = "/api/requests",
    params(RequestFilter),
    responses(
        (status = 200, body = [BloodRequestSummary]),
        (status = 401, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "requests"
)]
pub async fn list_requests(
    State(ctx): State<ApiContext>,
    Query(filter): Query<RequestFilter>,
) -> Result<Json<Vec<BloodRequestSummary>>, ApiError> {
    let requests = request::get::list_requests(&ctx.db, &filter).await?;
    Ok(Json(requests))
}

#[utoipa::path(
    get,
    path = "/api/requests/stats",
    responses(
        (status = 200, body = RequestStats),
        (status = 401, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "requests"
)]
pub async fn request_stats(State(ctx): State<ApiContext>) -> Result<Json<RequestStats>, ApiError> {
    let stats = request::stats::request_stats(&ctx.db).await?;
    Ok(Json(stats))
}

/// Files a request for units of a blood type. Urgent and critical requests
/// notify every eligible donor of that type; the request and its
/// notifications commit together.
#[utoipa::path(
    post,
    path = "/api/requests",
    request_body = CreateBloodRequestRequest,
    responses(
        (status = 201, body = BloodRequestRow),
        (status = 400, body = ErrorResponse),
        (status = 403, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "requests"
)]
#[tracing::instrument(
    skip(ctx, user, request),
    fields(user_id=%user.user_id, blood_type=%request.blood_type)
)]
pub async fn create_request(
    State(ctx): State<ApiContext>,
    Extension(user): Extension<UserContext>,
    Json(request): Json<CreateBloodRequestRequest>,
) -> Result<(StatusCode, Json<BloodRequestRow>), ApiError> {
    if request.units_needed <= 0 {
        return Err(ApiError::validation("unitsNeeded must be positive"));
    }

    let (created, notified) =
        request::create::create_request_with_fanout(&ctx.db, user.user_id, &request).await?;

    tracing::info!(request_id=%created.id, notified, "blood request created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// Moves a request through its lifecycle. Transitions are validated against
/// pending -> approved -> fulfilled (or pending -> rejected); anything else
/// is rejected without touching the row.
#[utoipa::path(
    put,
    path = "/api/requests/{id}/status",
    params(("id" = i32, Path, description = "Request id")),
    request_body = UpdateRequestStatusRequest,
    responses(
        (status = 200, body = BloodRequestRow),
        (status = 400, description = "Illegal status transition", body = ErrorResponse),
        (status = 404, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "requests"
)]
#[tracing::instrument(skip(ctx, user, update), fields(user_id=%user.user_id))]
pub async fn update_request_status(
    State(ctx): State<ApiContext>,
    Path(id): Path<i32>,
    Extension(user): Extension<UserContext>,
    Json(update): Json<UpdateRequestStatusRequest>,
) -> Result<Json<BloodRequestRow>, ApiError> {
    let existing = request::get::get_request(&ctx.db, id)
        .await?
        .ok_or(ApiError::NotFound("Request"))?;

    let current: RequestStatus = existing
        .status
        .parse()
        .context("stored request status is invalid")?;

    if !current.can_transition_to(update.status) {
        return Err(ApiError::validation(format!(
            "Cannot change request status from {current} to {}",
            update.status
        )));
    }

    let updated =
        request::status::update_request_status(&ctx.db, id, current, &update, user.user_id)
            .await?;

    match updated {
        Some(request) => Ok(Json(request)),
        // the pinned status no longer matched: someone else moved it first
        None => Err(ApiError::validation(
            "Request status changed concurrently, re-fetch and retry".to_string(),
        )),
    }
}
