use anyhow::Context;
use std::fmt::Display;
use std::str::FromStr;

/// The current environment the application is running in
#[derive(Debug, Clone, Copy)]
pub enum Environment {
    /// Production environment
    Production,
    /// Dev and or staging environment
    Develop,
    /// The server is running on localhost
    Local,
}

impl Environment {
    /// Reads `ENVIRONMENT`, falling back to production when unset or unrecognized.
    pub fn new_or_prod() -> Self {
        std::env::var("ENVIRONMENT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(Environment::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "prod"),
            Environment::Develop => write!(f, "dev"),
            Environment::Local => write!(f, "local"),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(environment: &str) -> Result<Self, ()> {
        match environment {
            "prod" => Ok(Environment::Production),
            "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            _ => Err(()),
        }
    }
}

pub struct Config {
    /// The connection URL for the Postgres database this application should use.
    pub database_url: String,

    /// Secret used to sign and verify access tokens.
    pub jwt_secret: String,

    /// The port to listen for HTTP requests on.
    pub port: usize,

    /// The environment we are in
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be provided")?;

        let jwt_secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be provided")?;

        let port: usize = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse::<usize>()
            .context("port should be a number")?;

        let environment = Environment::new_or_prod();

        Ok(Config {
            database_url,
            jwt_secret,
            port,
            environment,
        })
    }
}
