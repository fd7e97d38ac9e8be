//! WebSocket を使った PeerChannel 実装
//!
//! ## 責務
//!
//! - 接続ごとの bounded `mpsc::Sender<Frame>` を保持
//! - 送信待ちを `send_timeout` で打ち切る
//!
//! ## 設計ノート
//!
//! WebSocket の生成と writer タスクの起動は UI 層（`ui/handler/websocket.rs`）で行われます。
//! この実装はキューへの投入のみを担当し、ソケットへの書き込みは writer タスクが行います。

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc::{self, error::SendTimeoutError};

use crate::domain::{Frame, PeerChannel, PushError};

/// Largest outbound queue a single peer may be given.
pub const MAX_CAPACITY: usize = 65_536;

/// WebSocket を使った PeerChannel 実装
pub struct WebSocketPeerChannel {
    sender: mpsc::Sender<Frame>,
    send_timeout: Duration,
}

impl WebSocketPeerChannel {
    /// Create a channel with room for `capacity` queued frames.
    ///
    /// `capacity` is clamped to `1..=MAX_CAPACITY`.
    /// Returns the channel and the receiver to be drained by the writer task.
    pub fn new(capacity: usize, send_timeout: Duration) -> (Self, mpsc::Receiver<Frame>) {
        let (sender, receiver) = mpsc::channel(capacity.clamp(1, MAX_CAPACITY));
        (
            Self {
                sender,
                send_timeout,
            },
            receiver,
        )
    }
}

#[async_trait]
impl PeerChannel for WebSocketPeerChannel {
    async fn push(&self, frame: Frame) -> Result<(), PushError> {
        self.sender
            .send_timeout(frame, self.send_timeout)
            .await
            .map_err(|e| match e {
                SendTimeoutError::Timeout(_) => PushError::Timeout(self.send_timeout),
                SendTimeoutError::Closed(_) => PushError::Closed,
            })
    }
}
