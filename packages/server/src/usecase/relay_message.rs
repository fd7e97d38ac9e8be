//! UseCase: メッセージの中継処理（message イベント）

use std::sync::Arc;

use crate::domain::{BroadcastReport, ConnectionId, ConnectionRegistry, Frame};

/// メッセージ中継のユースケース
pub struct RelayMessageUseCase {
    registry: Arc<dyn ConnectionRegistry>,
}

impl RelayMessageUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// Relay `frame` from `sender` to every other live connection.
    ///
    /// The frame is forwarded untouched. Per-peer failures are logged by the
    /// registry and reported back; they never fail the relay as a whole.
    pub async fn execute(&self, sender: &ConnectionId, frame: Frame) -> BroadcastReport {
        tracing::info!(
            "Received {} frame from '{}' ({} bytes): {}",
            frame.opcode(),
            sender,
            frame.len(),
            frame.preview()
        );

        let report = self.registry.broadcast_except(sender, &frame).await;

        tracing::debug!(
            "Relayed frame from '{}': {} delivered, {} failed",
            sender,
            report.delivered.len(),
            report.failed.len()
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ConnectionIdFactory, MockPeerChannel, PeerChannel, PushError},
        infrastructure::{
            peer_channel::WebSocketPeerChannel, registry::InMemoryConnectionRegistry,
        },
    };
    use axum::body::Bytes;
    use std::time::Duration;
    use tokio::sync::mpsc;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - 送信者には返らず、他の全員に同じペイロード・オペコードで届くこと
    // - 切断後の接続には届かないこと
    // - 一部の接続への送信失敗が他の接続への配信を妨げないこと
    // ========================================

    async fn connect(
        registry: &Arc<InMemoryConnectionRegistry>,
    ) -> (ConnectionId, mpsc::Receiver<Frame>) {
        let id = ConnectionIdFactory::generate();
        let (channel, rx) = WebSocketPeerChannel::new(8, Duration::from_millis(100));
        registry.register(id, Arc::new(channel)).await;
        (id, rx)
    }

    #[tokio::test]
    async fn test_relay_scenario() {
        // テスト項目: A, B, C 接続 → A の送信は B, C に届く → B 切断後は C のみに届く
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let usecase = RelayMessageUseCase::new(registry.clone());
        let (alice, mut alice_rx) = connect(&registry).await;
        let (bob, mut bob_rx) = connect(&registry).await;
        let (_charlie, mut charlie_rx) = connect(&registry).await;

        // when (操作): A が "hello" を送信
        let report = usecase.execute(&alice, Frame::Text("hello".into())).await;

        // then (期待する結果):
        assert_eq!(report.delivered.len(), 2);
        assert_eq!(bob_rx.recv().await, Some(Frame::Text("hello".into())));
        assert_eq!(charlie_rx.recv().await, Some(Frame::Text("hello".into())));
        assert!(alice_rx.try_recv().is_err());

        // when (操作): B が切断し、A が "ping" を送信
        registry.unregister(&bob).await;
        let report = usecase.execute(&alice, Frame::Text("ping".into())).await;

        // then (期待する結果):
        assert_eq!(report.delivered.len(), 1);
        assert_eq!(charlie_rx.recv().await, Some(Frame::Text("ping".into())));
        assert!(alice_rx.try_recv().is_err());
        assert!(bob_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_relay_preserves_binary_opcode() {
        // テスト項目: バイナリフレームはバイナリのまま中継される
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let usecase = RelayMessageUseCase::new(registry.clone());
        let (alice, _alice_rx) = connect(&registry).await;
        let (_bob, mut bob_rx) = connect(&registry).await;
        let frame = Frame::Binary(Bytes::from_static(&[0xde, 0xad, 0xbe, 0xef]));

        // when (操作):
        usecase.execute(&alice, frame.clone()).await;

        // then (期待する結果):
        assert_eq!(bob_rx.recv().await, Some(frame));
    }

    #[tokio::test]
    async fn test_relay_from_single_peer_reaches_nobody() {
        // テスト項目: 接続が送信者だけの場合、誰にも届かない
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let usecase = RelayMessageUseCase::new(registry.clone());
        let (alice, mut alice_rx) = connect(&registry).await;

        // when (操作):
        let report = usecase.execute(&alice, Frame::Text("anyone?".into())).await;

        // then (期待する結果):
        assert!(report.is_empty());
        assert!(alice_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_relay_continues_after_send_failure() {
        // テスト項目: B への送信が失敗しても C には届く
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let usecase = RelayMessageUseCase::new(registry.clone());
        let (alice, _alice_rx) = connect(&registry).await;

        let bob = ConnectionIdFactory::generate();
        let mut bob_channel = MockPeerChannel::new();
        bob_channel
            .expect_push()
            .times(1)
            .returning(|_| Err(PushError::Closed));
        let bob_channel: Arc<dyn PeerChannel> = Arc::new(bob_channel);
        registry.register(bob, bob_channel).await;

        let (charlie, mut charlie_rx) = connect(&registry).await;

        // when (操作):
        let report = usecase.execute(&alice, Frame::Text("offer".into())).await;

        // then (期待する結果):
        assert_eq!(report.delivered, vec![charlie]);
        assert_eq!(report.failed, vec![(bob, PushError::Closed)]);
        assert_eq!(charlie_rx.recv().await, Some(Frame::Text("offer".into())));
    }

    #[tokio::test]
    async fn test_relay_preserves_order_per_sender() {
        // テスト項目: 同じ送信者からのメッセージは送信順に届く
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let usecase = RelayMessageUseCase::new(registry.clone());
        let (alice, _alice_rx) = connect(&registry).await;
        let (_bob, mut bob_rx) = connect(&registry).await;

        // when (操作):
        for text in ["offer", "candidate-1", "candidate-2"] {
            usecase.execute(&alice, Frame::Text(text.into())).await;
        }

        // then (期待する結果):
        for text in ["offer", "candidate-1", "candidate-2"] {
            assert_eq!(bob_rx.recv().await, Some(Frame::Text(text.into())));
        }
    }
}
