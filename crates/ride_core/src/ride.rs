//! Ride lifecycle: request through terminal status.

use std::fmt;

use crate::agents::{DriverId, User};
use crate::error::SessionError;
use crate::pricing::calculate_fare;
use crate::spatial::Location;

/// Ride status. `Completed` is declared for log compatibility but no
/// transition currently produces it: the interactive flow ends the run at
/// `InProgress` or `Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideStatus {
    Requested,
    Accepted,
    InProgress,
    Completed,
    Cancelled,
}

impl RideStatus {
    pub fn label(self) -> &'static str {
        match self {
            RideStatus::Requested => "requested",
            RideStatus::Accepted => "accepted",
            RideStatus::InProgress => "in-progress",
            RideStatus::Completed => "completed",
            RideStatus::Cancelled => "cancelled",
        }
    }

    /// The run ends immediately after a ride reaches a terminal status.
    pub fn is_terminal(self) -> bool {
        matches!(self, RideStatus::InProgress | RideStatus::Cancelled)
    }
}

impl fmt::Display for RideStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RideId(pub u32);

impl fmt::Display for RideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Ride {
    pub id: RideId,
    /// Snapshot of the requesting user at request time.
    pub user: User,
    pub driver: Option<DriverId>,
    pub pickup: Location,
    pub dropoff: Location,
    pub request_time: String,
    pub status: RideStatus,
    /// Computed once at request time, never revised.
    pub fare: f64,
}

impl Ride {
    pub(crate) fn new(
        id: RideId,
        user: User,
        pickup: Location,
        dropoff: Location,
        request_time: String,
    ) -> Self {
        let fare = calculate_fare(pickup.point, dropoff.point);
        Self {
            id,
            user,
            driver: None,
            pickup,
            dropoff,
            request_time,
            status: RideStatus::Requested,
            fare,
        }
    }

    /// Requested -> Accepted, recording the assigned driver.
    pub fn accept(&mut self, driver: DriverId) -> Result<(), SessionError> {
        match self.status {
            RideStatus::Requested => {
                self.driver = Some(driver);
                self.status = RideStatus::Accepted;
                Ok(())
            }
            from => Err(SessionError::InvalidTransition {
                from,
                to: RideStatus::Accepted,
            }),
        }
    }

    /// Accepted -> InProgress (user confirmed).
    pub fn start(&mut self) -> Result<(), SessionError> {
        match self.status {
            RideStatus::Accepted => {
                self.status = RideStatus::InProgress;
                Ok(())
            }
            from => Err(SessionError::InvalidTransition {
                from,
                to: RideStatus::InProgress,
            }),
        }
    }

    /// Requested | Accepted -> Cancelled (no driver, or user declined).
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        match self.status {
            RideStatus::Requested | RideStatus::Accepted => {
                self.status = RideStatus::Cancelled;
                Ok(())
            }
            from => Err(SessionError::InvalidTransition {
                from,
                to: RideStatus::Cancelled,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::GridPoint;

    fn test_ride() -> Ride {
        Ride::new(
            RideId(1),
            User::default(),
            Location::named(0, 0, "Changa"),
            Location::named(10, 10, "Khagan"),
            "2025-03-07 09:11:37".to_string(),
        )
    }

    #[test]
    fn new_ride_is_requested_with_fare_and_no_driver() {
        let ride = test_ride();
        assert_eq!(ride.status, RideStatus::Requested);
        assert_eq!(ride.driver, None);
        assert_eq!(ride.fare, 150.0);
    }

    #[test]
    fn accept_then_start_reaches_in_progress() {
        let mut ride = test_ride();
        ride.accept(DriverId(3)).expect("accept from requested");
        assert_eq!(ride.status, RideStatus::Accepted);
        assert_eq!(ride.driver, Some(DriverId(3)));
        ride.start().expect("start from accepted");
        assert!(ride.status.is_terminal());
    }

    #[test]
    fn cancel_is_allowed_before_start_only() {
        let mut ride = test_ride();
        ride.cancel().expect("cancel from requested");
        assert_eq!(ride.status, RideStatus::Cancelled);
        assert_eq!(
            ride.cancel(),
            Err(SessionError::InvalidTransition {
                from: RideStatus::Cancelled,
                to: RideStatus::Cancelled,
            })
        );
    }

    #[test]
    fn start_requires_an_accepted_ride() {
        let mut ride = test_ride();
        assert_eq!(
            ride.start(),
            Err(SessionError::InvalidTransition {
                from: RideStatus::Requested,
                to: RideStatus::InProgress,
            })
        );
    }

    #[test]
    fn fare_is_untouched_by_cancellation() {
        let mut ride = test_ride();
        ride.cancel().expect("cancel from requested");
        assert_eq!(ride.fare, 150.0);
    }

    #[test]
    fn grid_point_fare_uses_manhattan_distance() {
        let ride = Ride::new(
            RideId(2),
            User::default(),
            Location::at(GridPoint::new(5, 5)),
            Location::at(GridPoint::new(5, 5)),
            String::new(),
        );
        assert_eq!(ride.fare, 50.0);
    }
}
