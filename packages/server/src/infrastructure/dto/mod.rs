//! WebSocket メッセージとドメインモデルの変換

pub mod conversion;
