//! UseCase: 接続の終了処理（close イベント）

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry};

/// 接続終了のユースケース
pub struct DisconnectPeerUseCase {
    registry: Arc<dyn ConnectionRegistry>,
}

impl DisconnectPeerUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// Remove a closed connection from the set. Unknown ids are ignored.
    ///
    /// Returns the number of live connections afterwards.
    pub async fn execute(&self, id: &ConnectionId) -> usize {
        let count = self.registry.unregister(id).await;
        tracing::info!("Peer '{}' disconnected ({} connected)", id, count);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ConnectionIdFactory, MockPeerChannel},
        infrastructure::registry::InMemoryConnectionRegistry,
    };

    #[tokio::test]
    async fn test_disconnect_decrements_count() {
        // テスト項目: 切断すると接続数がちょうど 1 減り、集合から消える
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let usecase = DisconnectPeerUseCase::new(registry.clone());
        let alice = ConnectionIdFactory::generate();
        let bob = ConnectionIdFactory::generate();
        registry.register(alice, Arc::new(MockPeerChannel::new())).await;
        registry.register(bob, Arc::new(MockPeerChannel::new())).await;

        // when (操作):
        let count = usecase.execute(&bob).await;

        // then (期待する結果):
        assert_eq!(count, 1);
        assert!(!registry.contains(&bob).await);
    }

    #[tokio::test]
    async fn test_disconnect_twice_is_idempotent() {
        // テスト項目: 同じ接続を 2 回切断しても 2 回目は何も変わらない
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let usecase = DisconnectPeerUseCase::new(registry.clone());
        let alice = ConnectionIdFactory::generate();
        let bob = ConnectionIdFactory::generate();
        registry.register(alice, Arc::new(MockPeerChannel::new())).await;
        registry.register(bob, Arc::new(MockPeerChannel::new())).await;
        usecase.execute(&bob).await;

        // when (操作):
        let count = usecase.execute(&bob).await;

        // then (期待する結果):
        assert_eq!(count, 1);
        assert!(registry.contains(&alice).await);
    }
}
