use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Listener and connection-admission settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum concurrent relay connections
    pub max_connections: usize,
    /// Auto-shutdown when no connections for this many seconds (0 = disabled)
    pub idle_shutdown_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8000,
            max_connections: 1024,
            idle_shutdown_secs: 0,
        }
    }
}

impl ServerConfig {
    /// Hard cap on max_connections; anything above this is a typo
    const CONNECTION_CAP: usize = 100_000;

    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 asks the OS for a free port; privileged ports are refused
        if (1..1024).contains(&self.port) {
            return Err(ConfigError::server(format!(
                "server.port {} is privileged; use 0 (auto) or 1024+",
                self.port
            )));
        }

        if self.max_connections == 0 || self.max_connections > Self::CONNECTION_CAP {
            return Err(ConfigError::server(format!(
                "server.max_connections must be between 1 and {}, got {}",
                Self::CONNECTION_CAP,
                self.max_connections
            )));
        }

        Ok(())
    }
}
