//! Server configuration.

use std::time::Duration;

use crate::infrastructure::peer_channel::MAX_CAPACITY;

use super::error::ServerError;

/// Default port for the signaling relay.
pub const DEFAULT_PORT: u16 = 8765;
/// Default number of frames queued per peer before sends start waiting.
pub const DEFAULT_PEER_BUFFER: usize = 64;
/// Default upper bound on how long one send may wait on a slow peer.
pub const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// Runtime settings for [`Server`](super::Server).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,
    /// Port number to bind to
    pub port: u16,
    /// Outbound queue capacity per peer
    pub peer_buffer: usize,
    /// Maximum time a broadcast waits for one peer's queue
    pub send_timeout: Duration,
}

impl ServerConfig {
    /// `host:port` string used for binding and logging.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Reject settings that cannot be applied to every connection.
    ///
    /// Called before the server starts accepting, so a bad value fails
    /// startup instead of every connection task.
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.peer_buffer == 0 || self.peer_buffer > MAX_CAPACITY {
            return Err(ServerError::InvalidConfig(format!(
                "peer buffer must be between 1 and {}, got {}",
                MAX_CAPACITY, self.peer_buffer
            )));
        }
        if self.send_timeout.is_zero() {
            return Err(ServerError::InvalidConfig(
                "send timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            peer_buffer: DEFAULT_PEER_BUFFER,
            send_timeout: DEFAULT_SEND_TIMEOUT,
        }
    }
}
