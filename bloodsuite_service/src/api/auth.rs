use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use anyhow::Context;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use bloodsuite_auth::{password, token};
use bloodsuite_db_client::{donor, user};
use models_bloodsuite::response::ErrorResponse;
use models_bloodsuite::user::{
    AuthResponse, LoginRequest, MeResponse, RegisterRequest, UserContext,
};
use models_bloodsuite::Role;

pub fn router(state: ApiContext) -> Router<ApiContext> {
    let me_routes = Router::new().route("/me", get(me)).route_layer(
        axum::middleware::from_fn_with_state(
            state,
            bloodsuite_middleware::auth::decode_jwt::handler,
        ),
    );

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(me_routes)
}

/// Creates an account; donor registrations with a blood type also get a
/// linked donor profile.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Missing fields or email already registered", body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "auth"
)]
#[tracing::instrument(skip(ctx, request), fields(email=%request.email))]
pub async fn register(
    State(ctx): State<ApiContext>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("Email and password are required"));
    }

    if user::create::email_exists(&ctx.db, &request.email).await? {
        return Err(ApiError::validation("Email already registered"));
    }

    let role = request.role.unwrap_or(Role::Donor);
    let password_hash = password::hash_password(&request.password)?;

    let donor_profile = match (role, request.blood_type) {
        (Role::Donor, Some(blood_type)) => Some(user::NewDonorProfile {
            blood_type: blood_type.as_str().to_string(),
            district: request.district.clone(),
        }),
        _ => None,
    };

    let created = user::create::create_user_with_donor(
        &ctx.db,
        user::NewUser {
            email: request.email,
            password_hash,
            role: role.to_string(),
            first_name: request.first_name,
            last_name: request.last_name,
            phone: request.phone,
        },
        donor_profile,
    )
    .await
    .map_err(|e| {
        // a concurrent registration can slip past the exists check
        if is_unique_violation(&e) {
            ApiError::validation("Email already registered")
        } else {
            ApiError::Internal(e)
        }
    })?;

    let token = token::issue_access_token(created.id, &created.email, role, &ctx.jwt)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: created.into(),
            token,
        }),
    ))
}

/// Exchanges credentials for a bearer token. The error body is identical for
/// unknown email, deactivated account, and wrong password.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "auth"
)]
#[tracing::instrument(skip(ctx, request), fields(email=%request.email))]
pub async fn login(
    State(ctx): State<ApiContext>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let user = user::get::get_active_user_by_email(&ctx.db, &request.email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !password::verify_password(&request.password, &user.password_hash)? {
        return Err(ApiError::InvalidCredentials);
    }

    let role: Role = user.role.parse().context("stored role is invalid")?;
    let token = token::issue_access_token(user.id, &user.email, role, &ctx.jwt)?;

    Ok(Json(AuthResponse {
        user: user.into(),
        token,
    }))
}

/// The authenticated user's own account; donors carry their profile inline.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, body = MeResponse),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "auth"
)]
pub async fn me(
    State(ctx): State<ApiContext>,
    Extension(user_context): Extension<UserContext>,
) -> Result<Json<MeResponse>, ApiError> {
    let user = user::get::get_user_by_id(&ctx.db, user_context.user_id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    let donor = if user_context.role == Role::Donor {
        donor::get::get_donor_row(&ctx.db, user.id).await?
    } else {
        None
    };

    Ok(Json(MeResponse {
        id: user.id,
        email: user.email,
        role: user.role,
        first_name: user.first_name,
        last_name: user.last_name,
        phone: user.phone,
        donor,
    }))
}

fn is_unique_violation(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .and_then(|db_error| db_error.code())
        .map(|code| code == "23505")
        .unwrap_or(false)
}
