//! Server execution logic.

use std::{future::IntoFuture, sync::Arc};

use axum::Router;
use tokio::net::{TcpListener, TcpSocket};
use tower_http::trace::TraceLayer;

use crate::usecase::{ConnectPeerUseCase, DisconnectPeerUseCase, RelayMessageUseCase};

use super::{
    config::ServerConfig, error::ServerError, handler::websocket_handler, signal::shutdown_signal,
    state::AppState,
};

/// Listen backlog for the relay socket.
const LISTEN_BACKLOG: u32 = 1024;

/// WebSocket signaling relay server
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     ServerConfig::default(),
///     connect_peer_usecase,
///     disconnect_peer_usecase,
///     relay_message_usecase,
/// );
/// server.run().await?;
/// ```
pub struct Server {
    config: ServerConfig,
    connect_peer_usecase: Arc<ConnectPeerUseCase>,
    disconnect_peer_usecase: Arc<DisconnectPeerUseCase>,
    relay_message_usecase: Arc<RelayMessageUseCase>,
}

impl Server {
    pub fn new(
        config: ServerConfig,
        connect_peer_usecase: Arc<ConnectPeerUseCase>,
        disconnect_peer_usecase: Arc<DisconnectPeerUseCase>,
        relay_message_usecase: Arc<RelayMessageUseCase>,
    ) -> Self {
        Self {
            config,
            connect_peer_usecase,
            disconnect_peer_usecase,
            relay_message_usecase,
        }
    }

    /// Bind the configured address and serve until the process is stopped.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the address cannot
    /// be bound or the accept loop fails. There is no fallback port.
    pub async fn run(self) -> Result<(), ServerError> {
        self.config.validate()?;
        let listener = bind_listener(&self.config.bind_addr()).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener.
    ///
    /// Every request path is treated as a WebSocket upgrade. On Ctrl+C or
    /// SIGTERM serving stops immediately; open connections are dropped
    /// without draining their queues.
    pub async fn serve(self, listener: TcpListener) -> Result<(), ServerError> {
        self.config.validate()?;

        let app_state = Arc::new(AppState {
            connect_peer_usecase: self.connect_peer_usecase,
            disconnect_peer_usecase: self.disconnect_peer_usecase,
            relay_message_usecase: self.relay_message_usecase,
            peer_buffer: self.config.peer_buffer,
            send_timeout: self.config.send_timeout,
        });

        // No route distinction: every path upgrades
        let app = Router::new()
            .fallback(websocket_handler)
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        let local_addr = listener.local_addr()?;
        tracing::info!("Signaling relay listening on {}", local_addr);
        tracing::info!("Connect to: ws://{}", local_addr);

        tokio::select! {
            result = axum::serve(listener, app).into_future() => result?,
            _ = shutdown_signal() => {},
        }

        tracing::info!("Server stopped");

        Ok(())
    }
}

/// Bind a listening socket with `SO_REUSEADDR` so a restarted relay can take
/// the port back right after the previous instance releases it.
pub async fn bind_listener(bind_addr: &str) -> Result<TcpListener, ServerError> {
    let addr = tokio::net::lookup_host(bind_addr)
        .await
        .map_err(|_| ServerError::InvalidAddress(bind_addr.to_string()))?
        .next()
        .ok_or_else(|| ServerError::InvalidAddress(bind_addr.to_string()))?;

    let bind_error = |source: std::io::Error| ServerError::Bind {
        addr: bind_addr.to_string(),
        source,
    };

    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()
    } else {
        TcpSocket::new_v6()
    }
    .map_err(bind_error)?;
    socket.set_reuseaddr(true).map_err(bind_error)?;
    socket.bind(addr).map_err(bind_error)?;
    socket.listen(LISTEN_BACKLOG).map_err(bind_error)
}
