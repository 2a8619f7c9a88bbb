//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. There is deliberately little to configure: the denomination
//! set is process-wide constant business configuration and lives in
//! teller-core, not here.

use std::env;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP server port
    pub port: u16,

    /// Bind address (default: 0.0.0.0)
    pub bind_addr: String,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            port: env::var("API_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("API_PORT".to_string()))?,

            bind_addr: env::var("API_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string()),
        };

        Ok(config)
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address_joins_addr_and_port() {
        let config = ApiConfig {
            port: 3000,
            bind_addr: "127.0.0.1".to_string(),
        };
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }
}
