//! 接続集合と送信チャネルの trait 定義
//!
//! ## 責務
//!
//! - `PeerChannel`: 1 つの接続へフレームを送信する（ConnectionId で引かれる送信先）
//! - `ConnectionRegistry`: 接続中の全ての接続を排他ロック下で管理し、送信者以外へ配信する
//!
//! UseCase 層はこれらの trait に依存し、Infrastructure 層の具体的な実装には依存しない。

use std::sync::Arc;

use async_trait::async_trait;

use super::{ConnectionId, Frame, PushError};

/// Send primitive for one connection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PeerChannel: Send + Sync {
    /// Queue `frame` for delivery to this peer.
    async fn push(&self, frame: Frame) -> Result<(), PushError>;
}

/// The set of live connections.
///
/// Implementations hold one exclusive lock for every operation, including the
/// whole of [`broadcast_except`](ConnectionRegistry::broadcast_except). A slow
/// peer therefore delays the other peers (and open/close handling) for as long
/// as its push takes.
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// Add a connection. Returns the number of live connections afterwards.
    async fn register(&self, id: ConnectionId, channel: Arc<dyn PeerChannel>) -> usize;

    /// Remove a connection; an unknown id is a no-op. Returns the number of
    /// live connections afterwards.
    async fn unregister(&self, id: &ConnectionId) -> usize;

    /// Push `frame` to every live connection except `sender`.
    ///
    /// Failures are recorded per peer and never stop the pass. Failing peers
    /// stay registered until their own close event.
    async fn broadcast_except(&self, sender: &ConnectionId, frame: &Frame) -> BroadcastReport;

    /// Number of live connections.
    async fn count(&self) -> usize;

    async fn contains(&self, id: &ConnectionId) -> bool;
}

/// Outcome of one fan-out.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BroadcastReport {
    /// Peers that accepted the frame
    pub delivered: Vec<ConnectionId>,
    /// Peers whose push failed, with the reason
    pub failed: Vec<(ConnectionId, PushError)>,
}

impl BroadcastReport {
    /// `true` when there was nobody to relay to.
    pub fn is_empty(&self) -> bool {
        self.delivered.is_empty() && self.failed.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.delivered.len() + self.failed.len()
    }
}
