//! WebSocket relay server.

mod config;
mod error;
mod handler;
mod server;
mod signal;
pub mod state;

pub use config::{DEFAULT_PEER_BUFFER, DEFAULT_PORT, DEFAULT_SEND_TIMEOUT, ServerConfig};
pub use error::ServerError;
pub use server::{Server, bind_listener};
