//! Domain errors.

use std::time::Duration;

use thiserror::Error;

/// Failure of a single send to one peer.
///
/// A push error is always contained to its target: the broadcast loop logs it
/// and moves on to the next peer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PushError {
    /// The peer's writer has gone away
    #[error("peer channel is closed")]
    Closed,

    /// The peer did not accept the frame in time
    #[error("peer did not accept the frame within {0:?}")]
    Timeout(Duration),
}
