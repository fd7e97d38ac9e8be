//! Relayed frames.

use std::fmt;

use axum::{body::Bytes, extract::ws::Utf8Bytes};

/// Maximum number of payload bytes shown in log previews.
pub const PREVIEW_LEN: usize = 50;

/// WebSocket frame type tag, preserved when relaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Text,
    Binary,
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opcode::Text => write!(f, "text"),
            Opcode::Binary => write!(f, "binary"),
        }
    }
}

/// An opaque data frame received from one peer and relayed to the others.
///
/// Cloning is cheap: both variants share the underlying buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Text(Utf8Bytes),
    Binary(Bytes),
}

impl Frame {
    pub fn opcode(&self) -> Opcode {
        match self {
            Frame::Text(_) => Opcode::Text,
            Frame::Binary(_) => Opcode::Binary,
        }
    }

    pub fn payload(&self) -> &[u8] {
        match self {
            Frame::Text(text) => text.as_str().as_bytes(),
            Frame::Binary(bytes) => &bytes[..],
        }
    }

    pub fn len(&self) -> usize {
        self.payload().len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload().is_empty()
    }

    /// Render the first [`PREVIEW_LEN`] bytes for logging.
    ///
    /// Invalid UTF-8 (including a multi-byte character cut at the boundary)
    /// is rendered lossily. Truncated previews end with `...`.
    pub fn preview(&self) -> String {
        let payload = self.payload();
        if payload.len() <= PREVIEW_LEN {
            String::from_utf8_lossy(payload).into_owned()
        } else {
            format!("{}...", String::from_utf8_lossy(&payload[..PREVIEW_LEN]))
        }
    }
}
