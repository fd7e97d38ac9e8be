//! Shared application state.

use std::{sync::Arc, time::Duration};

use crate::usecase::{ConnectPeerUseCase, DisconnectPeerUseCase, RelayMessageUseCase};

/// Shared application state
pub struct AppState {
    /// ConnectPeerUseCase（open イベント）
    pub connect_peer_usecase: Arc<ConnectPeerUseCase>,
    /// DisconnectPeerUseCase（close イベント）
    pub disconnect_peer_usecase: Arc<DisconnectPeerUseCase>,
    /// RelayMessageUseCase（message イベント）
    pub relay_message_usecase: Arc<RelayMessageUseCase>,
    /// Outbound queue capacity per peer
    pub peer_buffer: usize,
    /// Maximum time a broadcast waits for one peer
    pub send_timeout: Duration,
}
