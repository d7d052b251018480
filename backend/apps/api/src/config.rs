//! Server Configuration
//!
//! Read from the environment after `.env` has been loaded.

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, bail};
use axum::http::HeaderValue;
use base64::Engine;
use base64::engine::general_purpose;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Process-wide settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<HeaderValue>,
    pub password_pepper: Option<Vec<u8>>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let database_max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR is not a socket address")?;

        let frontend_origins = parse_origins(
            &env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string()),
        );

        let password_pepper = env::var("PASSWORD_PEPPER")
            .ok()
            .map(|raw| decode_pepper(&raw))
            .transpose()?;

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            frontend_origins,
            password_pepper,
        })
    }
}

/// Comma-separated origin list; unparseable entries are dropped
pub fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| origin.parse().ok())
        .collect()
}

/// Base64 pepper; an empty value is rejected
pub fn decode_pepper(raw: &str) -> anyhow::Result<Vec<u8>> {
    let pepper = general_purpose::STANDARD
        .decode(raw.trim())
        .context("PASSWORD_PEPPER is not valid base64")?;
    if pepper.is_empty() {
        bail!("PASSWORD_PEPPER is empty");
    }
    Ok(pepper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        let origins = parse_origins(" http://a.test , ,http://b.test");
        assert_eq!(origins, ["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_decode_pepper() {
        assert_eq!(decode_pepper("cGVwcGVy").unwrap(), b"pepper");
        assert!(decode_pepper("not base64!").is_err());
        assert!(decode_pepper("").is_err());
    }
}
