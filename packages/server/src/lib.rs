//! WebSocket signaling relay library.
//!
//! Every frame received from one peer is forwarded, unmodified and with its
//! original opcode, to every other connected peer. The relay never inspects
//! payloads; it only tracks which connections are live.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
