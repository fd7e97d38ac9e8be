//! WebSocket signaling relay.
//!
//! Forwards every message received from one client to all other connected clients.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin kakehashi-server
//! cargo run --bin kakehashi-server -- --host 127.0.0.1 --port 9000
//! ```

use std::{sync::Arc, time::Duration};

use clap::Parser;
use kakehashi_server::{
    domain::ConnectionRegistry,
    infrastructure::registry::InMemoryConnectionRegistry,
    ui::{DEFAULT_PEER_BUFFER, DEFAULT_PORT, DEFAULT_SEND_TIMEOUT, Server, ServerConfig},
    usecase::{ConnectPeerUseCase, DisconnectPeerUseCase, RelayMessageUseCase},
};
use kakehashi_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "kakehashi-server")]
#[command(about = "WebSocket signaling relay: every message goes to all other peers", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Number of frames queued per peer before relaying waits
    #[arg(long, default_value_t = DEFAULT_PEER_BUFFER)]
    peer_buffer: usize,

    /// Maximum time in milliseconds a relay waits on one slow peer
    #[arg(long, default_value_t = DEFAULT_SEND_TIMEOUT.as_millis() as u64)]
    send_timeout_ms: u64,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            peer_buffer: args.peer_buffer,
            send_timeout: Duration::from_millis(args.send_timeout_ms),
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let config = ServerConfig::from(Args::parse());

    // 1. Connection set (in-memory)
    let registry: Arc<dyn ConnectionRegistry> = Arc::new(InMemoryConnectionRegistry::new());

    // 2. UseCases for the open / close / message events
    let connect_peer_usecase = Arc::new(ConnectPeerUseCase::new(registry.clone()));
    let disconnect_peer_usecase = Arc::new(DisconnectPeerUseCase::new(registry.clone()));
    let relay_message_usecase = Arc::new(RelayMessageUseCase::new(registry));

    // 3. Server
    let server = Server::new(
        config,
        connect_peer_usecase,
        disconnect_peer_usecase,
        relay_message_usecase,
    );
    if let Err(e) = server.run().await {
        tracing::error!("Fatal: {}", e);
        std::process::exit(1);
    }
}
