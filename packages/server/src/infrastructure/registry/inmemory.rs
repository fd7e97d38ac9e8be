//! In-memory ConnectionRegistry 実装
//!
//! ## 設計ノート
//!
//! 接続集合は `tokio::sync::Mutex` で保護された `HashMap` です。
//! 登録・削除・ブロードキャストの全てが同じロックを取得し、
//! ブロードキャスト中は全ての送信が終わるまでロックを保持します。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{BroadcastReport, ConnectionId, ConnectionRegistry, Frame, PeerChannel};

/// In-memory ConnectionRegistry 実装
#[derive(Default)]
pub struct InMemoryConnectionRegistry {
    /// Key: ConnectionId
    /// Value: 接続への送信チャネル
    connections: Mutex<HashMap<ConnectionId, Arc<dyn PeerChannel>>>,
}

impl InMemoryConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn register(&self, id: ConnectionId, channel: Arc<dyn PeerChannel>) -> usize {
        let mut connections = self.connections.lock().await;
        if connections.contains_key(&id) {
            tracing::warn!("Connection '{}' is already registered, ignoring", id);
        } else {
            connections.insert(id, channel);
        }
        connections.len()
    }

    async fn unregister(&self, id: &ConnectionId) -> usize {
        let mut connections = self.connections.lock().await;
        if connections.remove(id).is_none() {
            tracing::debug!("Connection '{}' was not registered, nothing to remove", id);
        }
        connections.len()
    }

    async fn broadcast_except(&self, sender: &ConnectionId, frame: &Frame) -> BroadcastReport {
        let connections = self.connections.lock().await;
        let mut report = BroadcastReport::default();

        for (id, channel) in connections.iter() {
            if id == sender {
                continue;
            }

            // 送信失敗は対象ごとに閉じ込める（集合からは削除しない）
            match channel.push(frame.clone()).await {
                Ok(()) => {
                    tracing::trace!("Relayed {} frame to '{}'", frame.opcode(), id);
                    report.delivered.push(*id);
                }
                Err(e) => {
                    tracing::warn!("Failed to relay frame to '{}': {}", id, e);
                    report.failed.push((*id, e));
                }
            }
        }

        report
    }

    async fn count(&self) -> usize {
        self.connections.lock().await.len()
    }

    async fn contains(&self, id: &ConnectionId) -> bool {
        self.connections.lock().await.contains_key(id)
    }
}
