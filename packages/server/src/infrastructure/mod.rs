//! Infrastructure layer
//!
//! Domain 層の trait に対する具体的な実装を提供します。
//!
//! - `registry`: 接続集合の実装（in-memory）
//! - `peer_channel`: 接続ごとの送信チャネルの実装（WebSocket）
//! - `dto`: WebSocket メッセージとドメインのフレームの相互変換

pub mod dto;
pub mod peer_channel;
pub mod registry;
