use anyhow::Context;
use bloodsuite_service::api::{self, context::ApiContext};
use bloodsuite_service::config::{Config, Environment};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let env = Environment::new_or_prod();
    init_tracing(env);

    // Parse our configuration from the environment.
    let config = Config::from_env().context("expected to be able to generate config")?;

    tracing::trace!("initialized config");

    let (min_connections, max_connections): (u32, u32) = match config.environment {
        Environment::Production => (5, 50),
        Environment::Develop => (1, 10),
        Environment::Local => (1, 10),
    };

    let db = PgPoolOptions::new()
        .min_connections(min_connections)
        .max_connections(max_connections)
        .connect(&config.database_url)
        .await
        .context("could not connect to db")?;

    tracing::trace!(
        min_connections,
        max_connections,
        "initialized db connection"
    );

    sqlx::migrate!("../bloodsuite_db_client/migrations")
        .run(&db)
        .await
        .context("could not run migrations")?;

    let api_context = ApiContext::init(db, config);

    api::setup_and_serve(api_context).await?;
    Ok(())
}

fn init_tracing(env: Environment) {
    match env {
        Environment::Local => {
            tracing_subscriber::fmt()
                .with_ansi(true)
                .with_env_filter(EnvFilter::from_default_env())
                .with_file(true)
                .with_line_number(true)
                .pretty()
                .init();
        }
        Environment::Production | Environment::Develop => {
            tracing_subscriber::fmt()
                .with_ansi(false)
                .with_env_filter(EnvFilter::from_default_env())
                .with_file(true)
                .with_line_number(true)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .init();
        }
    }
}
