use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use bloodsuite_db_client::analytics;
use models_bloodsuite::analytics::{
    DashboardResponse, DistrictSummaryResponse, DonationsTrendRow, TrendQuery,
};
use models_bloodsuite::response::ErrorResponse;
use models_bloodsuite::Role;

const REPORTING_ROLES: &[Role] = &[Role::Admin, Role::BloodBank];

const DEFAULT_TREND_MONTHS: i32 = 6;

pub fn router() -> Router<ApiContext> {
    let reporting = Router::new()
        .route("/donations-trend", get(donations_trend))
        .route("/district-summary", get(district_summary))
        .route_layer(axum::middleware::from_fn_with_state(
            REPORTING_ROLES,
            bloodsuite_middleware::auth::require_roles::handler,
        ));

    Router::new()
        .route("/dashboard", get(dashboard))
        .merge(reporting)
}

/// The overview counters every signed-in user sees. Counts are re-queried
/// on every call and are best-effort consistent with one another.
#[utoipa::path(
    get,
    path = "/api/analytics/dashboard",
    responses(
        (status = 200, body = DashboardResponse),
        (status = 401, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "analytics"
)]
pub async fn dashboard(State(ctx): State<ApiContext>) -> Result<Json<DashboardResponse>, ApiError> {
    let response = analytics::dashboard::dashboard(&ctx.db).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/analytics/donations-trend",
    params(TrendQuery),
    responses(
        (status = 200, body = [DonationsTrendRow]),
        (status = 403, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "analytics"
)]
pub async fn donations_trend(
    State(ctx): State<ApiContext>,
    Query(query): Query<TrendQuery>,
) -> Result<Json<Vec<DonationsTrendRow>>, ApiError> {
    let months = query.months.unwrap_or(DEFAULT_TREND_MONTHS);
    let trend = analytics::trend::donations_trend(&ctx.db, months).await?;
    Ok(Json(trend))
}

#[utoipa::path(
    get,
    path = "/api/analytics/district-summary",
    responses(
        (status = 200, body = DistrictSummaryResponse),
        (status = 403, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "analytics"
)]
pub async fn district_summary(
    State(ctx): State<ApiContext>,
) -> Result<Json<DistrictSummaryResponse>, ApiError> {
    let summary = analytics::district::district_summary(&ctx.db).await?;
    Ok(Json(summary))
}
