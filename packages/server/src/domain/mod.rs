//! Domain layer
//!
//! 接続の識別子・フレーム・送信チャネル・接続集合の抽象を定義します。
//! 具体的な実装（WebSocket, in-memory）は Infrastructure 層が提供します。

mod connection;
mod error;
mod frame;
mod registry;

pub use connection::{ConnectionId, ConnectionIdFactory};
pub use error::PushError;
pub use frame::{Frame, Opcode, PREVIEW_LEN};
pub use registry::{BroadcastReport, ConnectionRegistry, PeerChannel};

#[cfg(test)]
pub use registry::MockPeerChannel;
