// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    hygraph_endpoint: String,
    hygraph_token: String,
    environment: Environment,
    listen_addr: String,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
}

/// Deployment environment. Anything other than `development` is treated as
/// production; development enables verbose GraphQL query logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("development") {
            Self::Development
        } else {
            Self::Production
        }
    }

    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["https://your-blog-domain.com".into()]
}

impl AppConfig {
    /// Build configuration from environment variables. The Hygraph endpoint
    /// and token are required; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let hygraph_endpoint =
            env::var("HYGRAPH_ENDPOINT").map_err(|_| ConfigError::Missing("HYGRAPH_ENDPOINT"))?;
        let hygraph_token =
            env::var("HYGRAPH_TOKEN").map_err(|_| ConfigError::Missing("HYGRAPH_TOKEN"))?;

        let environment = env::var("ENVIRONMENT")
            .map(|v| Environment::parse(&v))
            .unwrap_or(Environment::Production);

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|s| s.split(',').map(|p| p.trim().to_string()).collect())
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            hygraph_endpoint,
            hygraph_token,
            environment,
            listen_addr,
            allowed_origins,
        })
    }

    pub fn hygraph_endpoint(&self) -> &str {
        &self.hygraph_endpoint
    }

    pub fn hygraph_token(&self) -> &str {
        &self.hygraph_token
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// The CORS allow-list as configured for this deployment.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
