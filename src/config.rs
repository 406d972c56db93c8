use std::env;

use actix_cors::Cors;

/// Server settings read from the environment once at startup.
///
/// Recognized variables:
/// - `HOST` (default `127.0.0.1`)
/// - `PORT` (default `8080`)
/// - `CORS_ALLOWED_ORIGINS`: comma-separated origin list; unset or empty
///   means no cross-origin caller is allowed
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(8080);
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();

        Self {
            host,
            port,
            cors_allowed_origins,
        }
    }

    /// Builds the CORS policy for this configuration: the configured
    /// origins, the standard method set, any header, credentials allowed,
    /// preflight cached for 90 seconds.
    pub fn cors(&self) -> Cors {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "HEAD", "POST", "PUT", "DELETE", "OPTIONS"])
            .allow_any_header()
            .supports_credentials()
            .max_age(90);

        for origin in &self.cors_allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        cors
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
