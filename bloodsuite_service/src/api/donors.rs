use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use bloodsuite_db_client::{donation, donor};
use models_bloodsuite::donor::{
    DonorFilter, DonorRow, DonorStats, DonorWithContact, UpdateDonorProfileRequest,
};
use models_bloodsuite::donation::DonationWithHospital;
use models_bloodsuite::response::ErrorResponse;
use models_bloodsuite::user::UserContext;
use models_bloodsuite::Role;

/// Roles allowed to browse the donor directory.
const DIRECTORY_ROLES: &[Role] = &[Role::Admin, Role::Hospital, Role::BloodBank];
const DONOR_SELF_ROLES: &[Role] = &[Role::Donor];

pub fn router() -> Router<ApiContext> {
    let directory = Router::new().route("/", get(list_donors)).route_layer(
        axum::middleware::from_fn_with_state(
            DIRECTORY_ROLES,
            bloodsuite_middleware::auth::require_roles::handler,
        ),
    );

    let self_service = Router::new()
        .route("/my-profile", get(my_profile).put(update_my_profile))
        .route("/my-donations", get(my_donations))
        .route_layer(axum::middleware::from_fn_with_state(
            DONOR_SELF_ROLES,
            bloodsuite_middleware::auth::require_roles::handler,
        ));

    Router::new()
        .route("/stats", get(donor_stats))
        .merge(directory)
        .merge(self_service)
}

/// The donor directory for hospital and blood bank staff.
#[utoipa::path(
    get,
    path = "/api/donors",
    params(DonorFilter),
    responses(
        (status = 200, body = [DonorWithContact]),
        (status = 401, body = ErrorResponse),
        (status = 403, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "donors"
)]
pub async fn list_donors(
    State(ctx): State<ApiContext>,
    Query(filter): Query<DonorFilter>,
) -> Result<Json<Vec<DonorWithContact>>, ApiError> {
    let donors = donor::get::list_donors(&ctx.db, &filter).await?;
    Ok(Json(donors))
}

#[utoipa::path(
    get,
    path = "/api/donors/stats",
    responses(
        (status = 200, body = DonorStats),
        (status = 401, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "donors"
)]
pub async fn donor_stats(State(ctx): State<ApiContext>) -> Result<Json<DonorStats>, ApiError> {
    let stats = donor::stats::donor_stats(&ctx.db).await?;
    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/api/donors/my-profile",
    responses(
        (status = 200, body = DonorWithContact),
        (status = 404, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "donors"
)]
pub async fn my_profile(
    State(ctx): State<ApiContext>,
    Extension(user): Extension<UserContext>,
) -> Result<Json<DonorWithContact>, ApiError> {
    let profile = donor::get::get_donor_profile(&ctx.db, user.user_id)
        .await?
        .ok_or(ApiError::NotFound("Donor profile"))?;

    Ok(Json(profile))
}

/// Partial update of the caller's own profile; absent fields stay unchanged.
#[utoipa::path(
    put,
    path = "/api/donors/my-profile",
    request_body = UpdateDonorProfileRequest,
    responses(
        (status = 200, body = DonorRow),
        (status = 404, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "donors"
)]
#[tracing::instrument(skip(ctx, user, update), fields(user_id=%user.user_id))]
pub async fn update_my_profile(
    State(ctx): State<ApiContext>,
    Extension(user): Extension<UserContext>,
    Json(update): Json<UpdateDonorProfileRequest>,
) -> Result<Json<DonorRow>, ApiError> {
    let donor = donor::update::update_donor_profile(&ctx.db, user.user_id, &update)
        .await?
        .ok_or(ApiError::NotFound("Donor profile"))?;

    Ok(Json(donor))
}

#[utoipa::path(
    get,
    path = "/api/donors/my-donations",
    responses(
        (status = 200, body = [DonationWithHospital]),
        (status = 404, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "donors"
)]
pub async fn my_donations(
    State(ctx): State<ApiContext>,
    Extension(user): Extension<UserContext>,
) -> Result<Json<Vec<DonationWithHospital>>, ApiError> {
    let donor_id = donor::get::get_donor_id_by_user(&ctx.db, user.user_id)
        .await?
        .ok_or(ApiError::NotFound("Donor"))?;

    let donations = donation::get::donations_for_donor(&ctx.db, donor_id).await?;
    Ok(Json(donations))
}
