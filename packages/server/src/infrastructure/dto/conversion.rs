//! Conversion between axum WebSocket messages and relay frames.

use axum::extract::ws::Message;

use crate::domain::Frame;

impl From<Frame> for Message {
    fn from(frame: Frame) -> Self {
        match frame {
            Frame::Text(text) => Message::Text(text),
            Frame::Binary(bytes) => Message::Binary(bytes),
        }
    }
}

/// Extract a relayable frame from an inbound message.
///
/// Control messages (ping, pong, close) return `None`.
pub fn frame_from_message(message: Message) -> Option<Frame> {
    match message {
        Message::Text(text) => Some(Frame::Text(text)),
        Message::Binary(bytes) => Some(Frame::Binary(bytes)),
        Message::Ping(_) | Message::Pong(_) | Message::Close(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;

    #[test]
    fn test_text_message_round_trips_through_frame() {
        // テスト項目: テキストメッセージがテキストのまま変換される
        // given (前提条件):
        let message = Message::Text("sdp".into());

        // when (操作):
        let frame = frame_from_message(message.clone()).unwrap();

        // then (期待する結果):
        assert_eq!(frame, Frame::Text("sdp".into()));
        assert_eq!(Message::from(frame), message);
    }

    #[test]
    fn test_binary_message_keeps_binary_opcode() {
        // テスト項目: バイナリメッセージがバイナリのまま変換される
        // given (前提条件):
        let payload = Bytes::from_static(&[1, 2, 3]);

        // when (操作):
        let frame = frame_from_message(Message::Binary(payload.clone())).unwrap();

        // then (期待する結果):
        assert_eq!(frame, Frame::Binary(payload.clone()));
        assert_eq!(Message::from(frame), Message::Binary(payload));
    }

    #[test]
    fn test_control_messages_are_not_relayed() {
        // テスト項目: 制御メッセージはフレームに変換されない
        // given (前提条件):
        let messages = vec![
            Message::Ping(Bytes::new()),
            Message::Pong(Bytes::new()),
            Message::Close(None),
        ];

        // when (操作):
        let frames: Vec<Option<Frame>> = messages.into_iter().map(frame_from_message).collect();

        // then (期待する結果):
        assert!(frames.iter().all(Option::is_none));
    }
}
