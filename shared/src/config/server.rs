//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{env_parse, ConfigError};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Base URL prefixed to uploaded file paths
    #[serde(default)]
    pub public_url: Option<String>,

    /// Directory where profile photos are written
    pub upload_dir: String,

    /// Largest accepted request body in bytes
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            public_url: None,
            upload_dir: String::from("uploads"),
            max_payload_size: 4 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from `HOST`, `PORT`, `PUBLIC_URL` and `UPLOAD_DIR`
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: env_parse("PORT", defaults.port)?,
            public_url: std::env::var("PUBLIC_URL").ok().filter(|u| !u.is_empty()),
            upload_dir: std::env::var("UPLOAD_DIR").unwrap_or(defaults.upload_dir),
            max_payload_size: env_parse("MAX_PAYLOAD_SIZE", defaults.max_payload_size)?,
        })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Base URL used when building links to uploaded files
    pub fn public_base_url(&self) -> String {
        match &self.public_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://{}", self.bind_address()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = ServerConfig::new("127.0.0.1", 3000);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_public_base_url_falls_back_to_bind_address() {
        let config = ServerConfig::new("localhost", 8080);
        assert_eq!(config.public_base_url(), "http://localhost:8080");

        let config = ServerConfig {
            public_url: Some("https://api.hyperprof.dev/".to_string()),
            ..config
        };
        assert_eq!(config.public_base_url(), "https://api.hyperprof.dev");
    }
}
