//! One interactive session: the explicit context object holding the user,
//! the fleet, the preset points, and the ride list.
//!
//! Nothing here is global; tests run any number of independent sessions
//! side by side.

use tracing::info;

use crate::agents::{Driver, DriverId, User};
use crate::clock::Clock;
use crate::error::SessionError;
use crate::matching::{closest_preset, DriverPool};
use crate::ride::{Ride, RideId};
use crate::spatial::{GridPoint, Location};

/// The three preset pickup/drop-off points every session starts with.
pub fn default_presets() -> Vec<Location> {
    vec![
        Location::named(0, 0, "Changa"),
        Location::named(5, 5, "Gate 2"),
        Location::named(10, 10, "Khagan"),
    ]
}

pub struct Session {
    user: User,
    pool: DriverPool,
    presets: Vec<Location>,
    rides: Vec<Ride>,
    next_ride_id: u32,
    clock: Box<dyn Clock>,
}

impl Session {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self::with_drivers(clock, crate::agents::seed_drivers())
    }

    /// Session over a custom fleet; used by tests and scenario setups.
    pub fn with_drivers(clock: Box<dyn Clock>, drivers: Vec<Driver>) -> Self {
        Self {
            user: User::default(),
            pool: DriverPool::new(drivers),
            presets: default_presets(),
            rides: Vec::new(),
            next_ride_id: 1,
            clock,
        }
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn presets(&self) -> &[Location] {
        &self.presets
    }

    pub fn driver_pool(&self) -> &DriverPool {
        &self.pool
    }

    pub fn ride(&self, id: RideId) -> Option<&Ride> {
        self.rides.iter().find(|r| r.id == id)
    }

    pub fn login(&mut self, username: &str) -> Result<&User, SessionError> {
        self.user.login(username, self.clock.as_ref())?;
        info!(username, "user logged in");
        Ok(&self.user)
    }

    /// Index of the preset closest to `point`. `None` only if the preset
    /// list is empty, which the default configuration rules out.
    pub fn closest_preset(&self, point: GridPoint) -> Option<usize> {
        closest_preset(&self.presets, point)
    }

    /// Preset by menu index, for the drop-off selection.
    pub fn preset(&self, index: usize) -> Result<&Location, SessionError> {
        self.presets.get(index).ok_or(SessionError::InvalidDropoff {
            index,
            max: self.presets.len().saturating_sub(1),
        })
    }

    /// Create a ride in `requested` status with the fare fixed at creation.
    pub fn request_ride(
        &mut self,
        pickup: Location,
        dropoff: Location,
    ) -> Result<RideId, SessionError> {
        if !self.user.is_authenticated() {
            return Err(SessionError::NotLoggedIn);
        }
        for point in [pickup.point, dropoff.point] {
            if !point.in_bounds() {
                return Err(SessionError::OutOfBounds(point));
            }
        }
        let id = RideId(self.next_ride_id);
        self.next_ride_id += 1;
        let ride = Ride::new(
            id,
            self.user.clone(),
            pickup,
            dropoff,
            self.clock.timestamp(),
        );
        info!(ride = %id, fare = ride.fare, "ride requested");
        self.rides.push(ride);
        Ok(id)
    }

    /// Closest available driver to `point`, marked unavailable on return.
    pub fn assign_closest_driver(&mut self, point: GridPoint) -> Option<DriverId> {
        self.pool.assign_closest(point)
    }

    pub fn confirm_ride(&mut self, id: RideId, driver: DriverId) -> Result<(), SessionError> {
        let ride = self.ride_mut(id)?;
        ride.accept(driver)?;
        info!(ride = %id, driver = %driver, "ride accepted");
        Ok(())
    }

    pub fn start_ride(&mut self, id: RideId) -> Result<(), SessionError> {
        let ride = self.ride_mut(id)?;
        ride.start()?;
        info!(ride = %id, "ride in progress");
        Ok(())
    }

    pub fn cancel_ride(&mut self, id: RideId) -> Result<(), SessionError> {
        let ride = self.ride_mut(id)?;
        ride.cancel()?;
        info!(ride = %id, "ride cancelled");
        Ok(())
    }

    fn ride_mut(&mut self, id: RideId) -> Result<&mut Ride, SessionError> {
        self.rides
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(SessionError::UnknownRide(id))
    }
}
