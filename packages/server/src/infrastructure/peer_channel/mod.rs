//! 接続ごとの送信チャネルの実装
//!
//! - `websocket`: WebSocket の writer タスクへ bounded channel で渡す実装

pub mod websocket;

pub use websocket::{MAX_CAPACITY, WebSocketPeerChannel};
