use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use bloodsuite_db_client::hospital;
use models_bloodsuite::hospital::{
    HospitalFilter, HospitalRow, HospitalWithEmail, RegisterHospitalRequest, VerifyHospitalRequest,
};
use models_bloodsuite::inventory::BloodTypeInventorySummary;
use models_bloodsuite::response::ErrorResponse;
use models_bloodsuite::Role;

const ADMIN_ROLES: &[Role] = &[Role::Admin];

pub fn router() -> Router<ApiContext> {
    let admin = Router::new()
        .route("/register", post(register_hospital))
        .route("/:id/verify", put(verify_hospital))
        .route_layer(axum::middleware::from_fn_with_state(
            ADMIN_ROLES,
            bloodsuite_middleware::auth::require_roles::handler,
        ));

    Router::new()
        .route("/", get(list_hospitals))
        .route("/:id", get(get_hospital))
        .route("/:id/inventory", get(hospital_inventory))
        .merge(admin)
}

#[utoipa::path(
    get,
    path = "/api/hospitals",
    params(HospitalFilter),
    responses(
        (status = 200, body = [HospitalWithEmail]),
        (status = 401, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "hospitals"
)]
pub async fn list_hospitals(
    State(ctx): State<ApiContext>,
    Query(filter): Query<HospitalFilter>,
) -> Result<Json<Vec<HospitalWithEmail>>, ApiError> {
    let hospitals = hospital::get::list_hospitals(&ctx.db, &filter).await?;
    Ok(Json(hospitals))
}

#[utoipa::path(
    get,
    path = "/api/hospitals/{id}",
    params(("id" = i32, Path, description = "Hospital id")),
    responses(
        (status = 200, body = HospitalWithEmail),
        (status = 404, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "hospitals"
)]
pub async fn get_hospital(
    State(ctx): State<ApiContext>,
    Path(id): Path<i32>,
) -> Result<Json<HospitalWithEmail>, ApiError> {
    let hospital = hospital::get::get_hospital(&ctx.db, id)
        .await?
        .ok_or(ApiError::NotFound("Hospital"))?;

    Ok(Json(hospital))
}

/// Per-blood-type shelf counts for one hospital.
#[utoipa::path(
    get,
    path = "/api/hospitals/{id}/inventory",
    params(("id" = i32, Path, description = "Hospital id")),
    responses(
        (status = 200, body = [BloodTypeInventorySummary]),
        (status = 401, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "hospitals"
)]
pub async fn hospital_inventory(
    State(ctx): State<ApiContext>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<BloodTypeInventorySummary>>, ApiError> {
    let summary = hospital::inventory::hospital_inventory_summary(&ctx.db, id).await?;
    Ok(Json(summary))
}

/// Registers a facility under an existing user account. Admin only; new
/// hospitals start unverified.
#[utoipa::path(
    post,
    path = "/api/hospitals/register",
    request_body = RegisterHospitalRequest,
    responses(
        (status = 201, body = HospitalRow),
        (status = 403, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "hospitals"
)]
#[tracing::instrument(skip(ctx, request), fields(name=%request.name))]
pub async fn register_hospital(
    State(ctx): State<ApiContext>,
    Json(request): Json<RegisterHospitalRequest>,
) -> Result<(StatusCode, Json<HospitalRow>), ApiError> {
    let hospital = hospital::create::create_hospital(&ctx.db, &request).await?;
    Ok((StatusCode::CREATED, Json(hospital)))
}

#[utoipa::path(
    put,
    path = "/api/hospitals/{id}/verify",
    params(("id" = i32, Path, description = "Hospital id")),
    request_body = VerifyHospitalRequest,
    responses(
        (status = 200, body = HospitalRow),
        (status = 404, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "hospitals"
)]
pub async fn verify_hospital(
    State(ctx): State<ApiContext>,
    Path(id): Path<i32>,
    Json(request): Json<VerifyHospitalRequest>,
) -> Result<Json<HospitalRow>, ApiError> {
    let hospital = hospital::verify::set_hospital_verified(&ctx.db, id, request.is_verified)
        .await?
        .ok_or(ApiError::NotFound("Hospital"))?;

    Ok(Json(hospital))
}
