use axum::Router;
use bloodsuite_auth::token::{issue_access_token, JwtKeys};
use bloodsuite_service::api;
use bloodsuite_service::api::context::ApiContext;
use bloodsuite_service::config::{Config, Environment};
use models_bloodsuite::Role;
use serde_json::json;
use sqlx::PgPool;

pub const TEST_JWT_SECRET: &str = "test-secret";

pub fn test_context(pool: PgPool) -> ApiContext {
    let config = Config {
        database_url: String::new(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        port: 0,
        environment: Environment::Local,
    };
    ApiContext::init(pool, config)
}

/// The full application router wired against the given pool.
pub fn create_test_app(pool: PgPool) -> Router {
    api::router(test_context(pool))
}

/// An app over a lazy pool for routes that never touch the database.
pub fn create_test_app_without_db() -> Router {
    let pool = PgPool::connect_lazy("postgres://localhost/bloodsuite_never_connected")
        .expect("lazy pool");
    create_test_app(pool)
}

/// Signs a token the way the service would for the given identity.
pub fn token_for(user_id: i32, email: &str, role: Role) -> String {
    issue_access_token(user_id, email, role, &JwtKeys::new(TEST_JWT_SECRET)).unwrap()
}

pub fn donor_register_body(email: &str, blood_type: &str, district: &str) -> serde_json::Value {
    json!({
        "email": email,
        "password": "pw123456",
        "role": "donor",
        "firstName": "Test",
        "lastName": "Donor",
        "bloodType": blood_type,
        "district": district,
    })
}
