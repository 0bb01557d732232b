use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use bloodsuite_db_client::donation;
use models_bloodsuite::donation::{CreateDonationRequest, DonationRow};
use models_bloodsuite::response::ErrorResponse;
use models_bloodsuite::Role;

const DONATION_WRITE_ROLES: &[Role] = &[Role::Hospital, Role::BloodBank, Role::Admin];

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", post(create_donation))
        .route_layer(axum::middleware::from_fn_with_state(
            DONATION_WRITE_ROLES,
            bloodsuite_middleware::auth::require_roles::handler,
        ))
}

/// Records a completed donation and advances the donor's last-donation date.
#[utoipa::path(
    post,
    path = "/api/donations",
    request_body = CreateDonationRequest,
    responses(
        (status = 201, body = DonationRow),
        (status = 403, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "donations"
)]
#[tracing::instrument(skip(ctx, request), fields(donor_id=%request.donor_id))]
pub async fn create_donation(
    State(ctx): State<ApiContext>,
    Json(request): Json<CreateDonationRequest>,
) -> Result<(StatusCode, Json<DonationRow>), ApiError> {
    let donation = donation::create::create_donation(&ctx.db, &request)
        .await?
        .ok_or(ApiError::NotFound("Donor"))?;

    Ok((StatusCode::CREATED, Json(donation)))
}
