//! Drivers and users.

use std::fmt;

use crate::clock::Clock;
use crate::error::SessionError;
use crate::spatial::GridPoint;

pub const DEFAULT_RATING: f64 = 4.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DriverId(pub u32);

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub id: DriverId,
    pub location: GridPoint,
    pub available: bool,
    /// Carried for display; matching ignores it.
    pub rating: f64,
}

impl Driver {
    pub fn new(id: u32, location: GridPoint) -> Self {
        Self {
            id: DriverId(id),
            location,
            available: true,
            rating: DEFAULT_RATING,
        }
    }
}

/// The fixed fleet every session starts with.
pub fn seed_drivers() -> Vec<Driver> {
    [
        (1, 1, 1),
        (2, 6, 5),
        (3, 4, 3),
        (4, 2, 8),
        (5, 9, 7),
        (6, 11, 12),
        (7, 0, 2),
        (8, 8, 8),
        (9, 3, 4),
        (10, 10, 0),
    ]
    .into_iter()
    .map(|(id, x, y)| Driver::new(id, GridPoint::new(x, y)))
    .collect()
}

/// The logged-in passenger. Starts unauthenticated; `login` sets the
/// username and stamps the login time, after which the record is read-only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct User {
    username: String,
    login_time: String,
    authenticated: bool,
}

impl User {
    pub fn login(&mut self, username: &str, clock: &dyn Clock) -> Result<(), SessionError> {
        if username.is_empty() {
            return Err(SessionError::EmptyUsername);
        }
        self.username = username.to_string();
        self.login_time = clock.timestamp();
        self.authenticated = true;
        Ok(())
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn login_time(&self) -> &str {
        &self.login_time
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
