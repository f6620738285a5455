//! Server configuration from flags and environment variables.

use axum::http::{HeaderValue, Method};
use clap::Parser;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::error::ConfigError;

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-api", version, about = "In-memory todo list HTTP API")]
pub struct Config {
    /// Interface to bind.
    #[arg(long, env = "TODO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 5200)]
    pub port: u16,

    /// Frontend origins allowed to make cross-origin calls (comma separated).
    #[arg(
        long,
        env = "TODO_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values = [
            "http://localhost:3000",
            "https://localhost:3000",
            "https://ap-learn.azurewebsites.net",
        ]
    )]
    pub allowed_origins: Vec<String>,

    /// Serve the OpenAPI document and Swagger UI under `/swagger`.
    #[arg(long, env = "TODO_OPENAPI")]
    pub openapi: bool,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// CORS policy for the configured origins: any method, any header.
    pub fn cors_layer(&self) -> Result<CorsLayer, ConfigError> {
        let origins = self
            .allowed_origins
            .iter()
            .map(|origin| {
                // Browsers send the origin without a trailing slash.
                let trimmed = origin.trim().trim_end_matches('/');
                HeaderValue::from_str(trimmed).map_err(|source| ConfigError::InvalidOrigin {
                    origin: origin.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AllowMethods::list([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ]))
            .allow_headers(AllowHeaders::mirror_request()))
    }
}
