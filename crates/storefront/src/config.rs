//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional and fall back to development defaults:
//! - `LUXLAMP_HOST` - Bind address (default: 127.0.0.1)
//! - `LUXLAMP_PORT` - Listen port (default: 3000)
//! - `LUXLAMP_BASE_URL` - Public URL for the storefront
//!   (default: `http://localhost:3000`)
//! - `LUXLAMP_CATALOG_DIR` - Directory holding `collections.json` and
//!   `products.json` (default: crates/storefront/catalog)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Directory containing the catalog JSON files
    pub catalog_dir: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("LUXLAMP_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("LUXLAMP_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("LUXLAMP_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("LUXLAMP_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("LUXLAMP_BASE_URL", "http://localhost:3000");
        validate_base_url(&base_url)?;
        let catalog_dir =
            PathBuf::from(get_env_or_default("LUXLAMP_CATALOG_DIR", "crates/storefront/catalog"));

        Ok(Self {
            host,
            port,
            base_url,
            catalog_dir,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Absolute URL for a path on this storefront, used for canonical
    /// link tags.
    #[must_use]
    pub fn canonical_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that the base URL parses and has a host.
fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let url = url::Url::parse(base_url).map_err(|e| {
        ConfigError::InvalidEnvVar("LUXLAMP_BASE_URL".to_string(), e.to_string())
    })?;
    if url.host_str().is_none() {
        return Err(ConfigError::InvalidEnvVar(
            "LUXLAMP_BASE_URL".to_string(),
            "must have a host".to_string(),
        ));
    }
    Ok(())
}
