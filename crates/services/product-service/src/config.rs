//! Product service configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};

/// Product service configuration.
#[derive(Debug, Clone, Default)]
pub struct ProductServiceConfig {
    /// HTTP bind address
    pub server: ServiceConfig,
    /// Database connection settings
    pub database: DatabaseConfig,
}

impl ProductServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let server_defaults = ServiceConfig::default();
        let database_defaults = DatabaseConfig::default();

        Self {
            server: ServiceConfig {
                host: env::var("SERVER_HOST").unwrap_or(server_defaults.host),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(server_defaults.port),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or(database_defaults.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(database_defaults.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(database_defaults.min_connections),
            },
        }
    }

    /// Override the bind address (CLI flags take precedence over the environment).
    pub fn with_addr(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_replace_only_given_values() {
        let config = ProductServiceConfig::default().with_addr(None, Some(8081));
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8081);
    }
}
