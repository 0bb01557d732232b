use anyhow::Context;
use axum::routing::get;
use axum::Router;
use context::ApiContext;
use models_bloodsuite::paths;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Utilities
pub mod context;
pub mod error;

// Routes
pub mod analytics;
pub mod auth;
pub mod donations;
pub mod donors;
pub mod health;
pub mod hospitals;
pub mod inventory;
pub mod notifications;
pub mod requests;

mod swagger;

pub async fn setup_and_serve(state: ApiContext) -> anyhow::Result<()> {
    let app = router(state.clone());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", state.config.port))
        .await
        .context("could not bind listener")?;
    tracing::info!(
        "blood suite service is up and running with environment {} on port {}",
        &state.config.environment,
        &state.config.port
    );
    axum::serve(listener, app.into_make_service())
        .await
        .context("error starting service")
}

/// The full application router: `/api` resources behind auth, plus the open
/// health, districts, and docs endpoints.
pub fn router(state: ApiContext) -> Router {
    let cors = cors_layer();

    // every protected resource shares the same jwt gate; role gates are
    // layered inside each resource router
    let require_auth = ServiceBuilder::new()
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            bloodsuite_middleware::auth::decode_jwt::handler,
        ))
        .layer(axum::middleware::from_fn(
            bloodsuite_middleware::connection_drop_prevention_handler,
        ));

    Router::new()
        .nest(paths::AUTH, auth::router(state.clone()))
        .nest(paths::DONORS, donors::router().layer(require_auth.clone()))
        .nest(
            paths::HOSPITALS,
            hospitals::router().layer(require_auth.clone()),
        )
        .nest(
            paths::INVENTORY,
            inventory::router().layer(require_auth.clone()),
        )
        .nest(
            paths::REQUESTS,
            requests::router().layer(require_auth.clone()),
        )
        .nest(
            paths::DONATIONS,
            donations::router().layer(require_auth.clone()),
        )
        .nest(
            paths::NOTIFICATIONS,
            notifications::router().layer(require_auth.clone()),
        )
        .nest(
            paths::ANALYTICS,
            analytics::router().layer(require_auth),
        )
        .route(paths::DISTRICTS, get(districts))
        .with_state(state)
        .layer(cors.clone())
        .layer(TraceLayer::new_for_http())
        // The health router is attached here so we don't attach the logging middleware to it
        .nest(paths::HEALTH, health::router().layer(cors))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()))
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// The ten districts donors and hospitals register under.
#[utoipa::path(
    get,
    path = "/api/districts",
    responses(
        (status = 200, description = "The static district list", body = [String])
    ),
    tag = "districts"
)]
pub async fn districts() -> axum::Json<[&'static str; 10]> {
    axum::Json(models_bloodsuite::DISTRICTS)
}
