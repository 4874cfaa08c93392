use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Per-connection WebSocket settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebSocketConfig {
    /// Outbound buffer size per connection; a full buffer marks the client
    /// as stalled during fan-out
    pub send_buffer_size: usize,
    /// Close a connection after this many seconds without an inbound frame
    /// (0 = disabled)
    pub idle_timeout_secs: u64,
}

impl Default for WebSocketConfig {
    fn default() -> Self {
        Self {
            send_buffer_size: 100,
            idle_timeout_secs: 0,
        }
    }
}

impl WebSocketConfig {
    /// Buffers beyond this just hide a stalled client
    const BUFFER_CAP: usize = 10_000;
    /// One day; longer idle timeouts are a typo
    const IDLE_CAP_SECS: u64 = 86_400;

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.send_buffer_size == 0 || self.send_buffer_size > Self::BUFFER_CAP {
            return Err(ConfigError::config(format!(
                "websocket.send_buffer_size must be between 1 and {}, got {}",
                Self::BUFFER_CAP,
                self.send_buffer_size
            )));
        }

        if self.idle_timeout_secs > Self::IDLE_CAP_SECS {
            return Err(ConfigError::config(format!(
                "websocket.idle_timeout_secs must be 0 (disabled) or at most {}, got {}",
                Self::IDLE_CAP_SECS,
                self.idle_timeout_secs
            )));
        }

        Ok(())
    }
}
