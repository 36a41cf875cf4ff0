//! Typed errors for session operations.
//!
//! Every variant is recoverable from the caller's point of view: the
//! interactive driver reports the message and ends the run normally.

use thiserror::Error;

use crate::ride::{RideId, RideStatus};
use crate::spatial::GridPoint;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("username cannot be empty")]
    EmptyUsername,

    #[error("no user is logged in")]
    NotLoggedIn,

    #[error("location {0} is outside the service area")]
    OutOfBounds(GridPoint),

    #[error("drop-off choice {index} is out of range (0-{max})")]
    InvalidDropoff { index: usize, max: usize },

    #[error("no ride with id {0}")]
    UnknownRide(RideId),

    #[error("cannot move ride from {from} to {to}")]
    InvalidTransition { from: RideStatus, to: RideStatus },
}
