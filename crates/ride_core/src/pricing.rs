//! Fare calculation for a single ride.

use crate::spatial::{manhattan_distance, GridPoint};

/// Base fare in currency units.
pub const BASE_FARE: f64 = 50.0;

/// Rate per unit of grid distance.
pub const PER_UNIT_RATE: f64 = 5.0;

/// Calculate the fare for a trip between two points.
///
/// Formula: `fare = BASE_FARE + manhattan_distance * PER_UNIT_RATE`.
///
/// Pure function of the two endpoints; the session computes it once at
/// request time and never revises it, even if the ride is later cancelled.
pub fn calculate_fare(pickup: GridPoint, dropoff: GridPoint) -> f64 {
    let distance = f64::from(manhattan_distance(pickup, dropoff));
    BASE_FARE + distance * PER_UNIT_RATE
}
