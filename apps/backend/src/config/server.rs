use crate::error::AppError;

/// HTTP bind configuration, read from the runtime environment.
///
/// Environment variables must be set by the runtime environment:
/// - Docker: via docker-compose env_file or docker run --env-file
/// - Local dev: source env files manually (e.g., set -a; . ./.env; set +a)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Read `BACKEND_HOST` (default `0.0.0.0`) and `BACKEND_PORT`
    /// (default `3001`).
    pub fn from_env() -> Result<Self, AppError> {
        let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let raw_port = std::env::var("BACKEND_PORT").unwrap_or_else(|_| "3001".to_string());
        let port = raw_port.parse::<u16>().map_err(|_| {
            AppError::config(format!(
                "BACKEND_PORT must be a valid port number, got {raw_port}"
            ))
        })?;
        Ok(Self { host, port })
    }
}
