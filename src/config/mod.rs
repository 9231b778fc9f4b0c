//! Configuration module for the site server.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Public URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://rsmakes.com";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute base URL for canonical links and social preview images
    pub base_url: String,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Directory served under `/public`
    pub public_dir: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = normalize_base_url(
            &env::var("SITE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        );

        let bind_addr = env::var("SITE_BIND_ADDR")
            .ok()
            .and_then(|raw| match raw.parse() {
                Ok(addr) => Some(addr),
                Err(e) => {
                    tracing::warn!("Invalid SITE_BIND_ADDR {:?} ({}), using default", raw, e);
                    None
                }
            })
            .unwrap_or_else(default_bind_addr);

        let public_dir = env::var("SITE_PUBLIC_DIR")
            .unwrap_or_else(|_| "./public".to_string())
            .into();

        let log_level = env::var("SITE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            base_url,
            bind_addr,
            public_dir,
            log_level,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            bind_addr: default_bind_addr(),
            public_dir: PathBuf::from("./public"),
            log_level: "info".to_string(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

/// Strip trailing slashes so paths can be appended with a leading `/`.
fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("SITE_URL");
        env::remove_var("SITE_BIND_ADDR");
        env::remove_var("SITE_PUBLIC_DIR");
        env::remove_var("SITE_LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.public_dir, PathBuf::from("./public"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        assert_eq!(
            normalize_base_url("https://example.com/"),
            "https://example.com"
        );
        assert_eq!(normalize_base_url("  "), DEFAULT_BASE_URL);
    }
}
