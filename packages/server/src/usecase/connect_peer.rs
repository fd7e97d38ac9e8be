//! UseCase: 接続の開始処理（open イベント）

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, PeerChannel};

/// 接続開始のユースケース
pub struct ConnectPeerUseCase {
    registry: Arc<dyn ConnectionRegistry>,
}

impl ConnectPeerUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// Add a freshly opened connection to the set.
    ///
    /// Returns the number of live connections afterwards.
    pub async fn execute(&self, id: ConnectionId, channel: Arc<dyn PeerChannel>) -> usize {
        let count = self.registry.register(id, channel).await;
        tracing::info!("Peer '{}' connected ({} connected)", id, count);
        count
    }
}
