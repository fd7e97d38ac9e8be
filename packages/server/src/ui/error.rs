//! Server errors.

use thiserror::Error;

/// Fatal errors raised while starting or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// A setting is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configured address could not be resolved
    #[error("Invalid bind address '{0}'")]
    InvalidAddress(String),

    /// The listening socket could not be set up
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop failed
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}
