//! Connection identity.

use std::fmt;

use uuid::Uuid;

/// Opaque identity of one live WebSocket session.
///
/// Two ids compare equal only if they were produced by the same call to
/// [`ConnectionIdFactory::generate`]. Socket addresses are never used for
/// identity, so a reconnecting client always gets a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Generates a new [`ConnectionId`] for every completed handshake.
pub struct ConnectionIdFactory;

impl ConnectionIdFactory {
    pub fn generate() -> ConnectionId {
        ConnectionId(Uuid::new_v4())
    }
}
