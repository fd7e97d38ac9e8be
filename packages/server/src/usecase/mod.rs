//! UseCase layer
//!
//! WebSocket の 3 つのイベント（open / close / message）に対応するユースケースです。

mod connect_peer;
mod disconnect_peer;
mod relay_message;

pub use connect_peer::ConnectPeerUseCase;
pub use disconnect_peer::DisconnectPeerUseCase;
pub use relay_message::RelayMessageUseCase;
