use crate::config::Config;
use axum::extract::FromRef;
use bloodsuite_auth::token::JwtKeys;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApiContext {
    pub db: PgPool,
    pub jwt: JwtKeys,
    pub config: Arc<Config>,
}

impl ApiContext {
    pub fn init(db: PgPool, config: Config) -> Self {
        ApiContext {
            db,
            jwt: JwtKeys::new(config.jwt_secret.clone()),
            config: Arc::new(config),
        }
    }
}
