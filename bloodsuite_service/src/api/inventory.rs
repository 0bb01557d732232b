use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use bloodsuite_db_client::inventory;
use models_bloodsuite::inventory::{
    CreateInventoryUnitRequest, ExpiringQuery, InventoryFilter, InventorySummary,
    InventoryUnitRow, InventoryUnitWithHospital, UpdateInventoryStatusRequest,
};
use models_bloodsuite::response::ErrorResponse;
use models_bloodsuite::Role;

const STOCK_WRITE_ROLES: &[Role] = &[Role::Hospital, Role::BloodBank, Role::Admin];

const DEFAULT_EXPIRING_WINDOW_DAYS: i32 = 7;

pub fn router() -> Router<ApiContext> {
    let writers = Router::new()
        .route("/", post(create_unit))
        .route("/:id/status", put(update_unit_status))
        .route_layer(axum::middleware::from_fn_with_state(
            STOCK_WRITE_ROLES,
            bloodsuite_middleware::auth::require_roles::handler,
        ));

    Router::new()
        .route("/", get(list_inventory))
        .route("/summary", get(inventory_summary))
        .route("/expiring", get(expiring_units))
        .merge(writers)
}

/// Inventory units across all hospitals, soonest expiry first.
#[utoipa::path(
    get,
    path = "/api/inventory",
    params(InventoryFilter),
    responses(
        (status = 200, body = [InventoryUnitWithHospital]),
        (status = 401, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "inventory"
)]
pub async fn list_inventory(
    State(ctx): State<ApiContext>,
    Query(filter): Query<InventoryFilter>,
) -> Result<Json<Vec<InventoryUnitWithHospital>>, ApiError> {
    let units = inventory::get::list_inventory(&ctx.db, &filter).await?;
    Ok(Json(units))
}

#[utoipa::path(
    get,
    path = "/api/inventory/summary",
    responses(
        (status = 200, body = InventorySummary),
        (status = 401, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "inventory"
)]
pub async fn inventory_summary(
    State(ctx): State<ApiContext>,
) -> Result<Json<InventorySummary>, ApiError> {
    let summary = inventory::summary::inventory_summary(&ctx.db).await?;
    Ok(Json(summary))
}

/// Available units expiring inside the window (default seven days).
#[utoipa::path(
    get,
    path = "/api/inventory/expiring",
    params(ExpiringQuery),
    responses(
        (status = 200, body = [InventoryUnitWithHospital]),
        (status = 401, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "inventory"
)]
pub async fn expiring_units(
    State(ctx): State<ApiContext>,
    Query(query): Query<ExpiringQuery>,
) -> Result<Json<Vec<InventoryUnitWithHospital>>, ApiError> {
    let days = query.days.unwrap_or(DEFAULT_EXPIRING_WINDOW_DAYS);
    let units = inventory::get::expiring_units(&ctx.db, days).await?;
    Ok(Json(units))
}

#[utoipa::path(
    post,
    path = "/api/inventory",
    request_body = CreateInventoryUnitRequest,
    responses(
        (status = 201, body = InventoryUnitRow),
        (status = 403, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "inventory"
)]
#[tracing::instrument(skip(ctx, unit), fields(unit_number=%unit.unit_number))]
pub async fn create_unit(
    State(ctx): State<ApiContext>,
    Json(unit): Json<CreateInventoryUnitRequest>,
) -> Result<(StatusCode, Json<InventoryUnitRow>), ApiError> {
    let created = inventory::create::create_inventory_unit(&ctx.db, &unit).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/inventory/{id}/status",
    params(("id" = i32, Path, description = "Inventory unit id")),
    request_body = UpdateInventoryStatusRequest,
    responses(
        (status = 200, body = InventoryUnitRow),
        (status = 404, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "inventory"
)]
pub async fn update_unit_status(
    State(ctx): State<ApiContext>,
    Path(id): Path<i32>,
    Json(update): Json<UpdateInventoryStatusRequest>,
) -> Result<Json<InventoryUnitRow>, ApiError> {
    let unit = inventory::status::update_unit_status(&ctx.db, id, update.status)
        .await?
        .ok_or(ApiError::NotFound("Blood unit"))?;

    Ok(Json(unit))
}
