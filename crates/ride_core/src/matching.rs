//! Nearest-neighbor matching over preset points and the driver pool.
//!
//! Both scans are linear over small fixed lists. Ties break toward the
//! first occurrence in list order, which the strict `<` comparison gives
//! for free.

use tracing::debug;

use crate::agents::{seed_drivers, Driver, DriverId};
use crate::spatial::{manhattan_distance, GridPoint, Location};

/// Index of the preset closest to `point` by Manhattan distance, or `None`
/// for an empty preset list.
pub fn closest_preset(presets: &[Location], point: GridPoint) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (index, preset) in presets.iter().enumerate() {
        let distance = manhattan_distance(point, preset.point);
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}

/// The session's fleet. Assignment consumes availability: once a driver is
/// handed out they stay unavailable for the rest of the run.
#[derive(Debug, Clone)]
pub struct DriverPool {
    drivers: Vec<Driver>,
}

impl DriverPool {
    pub fn new(drivers: Vec<Driver>) -> Self {
        Self { drivers }
    }

    pub fn seeded() -> Self {
        Self::new(seed_drivers())
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn get(&self, id: DriverId) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == id)
    }

    pub fn available_count(&self) -> usize {
        self.drivers.iter().filter(|d| d.available).count()
    }

    /// Closest available driver to `point`, marked unavailable on return.
    /// `None` means the pool is exhausted; the caller cancels the ride
    /// rather than retrying.
    pub fn assign_closest(&mut self, point: GridPoint) -> Option<DriverId> {
        let mut best: Option<(usize, u32)> = None;
        for (index, driver) in self.drivers.iter().enumerate() {
            if !driver.available {
                continue;
            }
            let distance = manhattan_distance(driver.location, point);
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((index, distance));
            }
        }
        let (index, distance) = best?;
        self.drivers[index].available = false;
        let id = self.drivers[index].id;
        debug!(driver = %id, distance, "assigned closest driver");
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presets() -> Vec<Location> {
        vec![
            Location::named(0, 0, "Changa"),
            Location::named(5, 5, "Gate 2"),
            Location::named(10, 10, "Khagan"),
        ]
    }

    #[test]
    fn closest_preset_picks_minimum_distance() {
        let index = closest_preset(&presets(), GridPoint::new(4, 4));
        assert_eq!(index, Some(1), "Gate 2 at distance 2 should win");
    }

    #[test]
    fn closest_preset_breaks_ties_by_list_order() {
        // (2, 3) is distance 5 from both Changa and Gate 2.
        let index = closest_preset(&presets(), GridPoint::new(2, 3));
        assert_eq!(index, Some(0));
    }

    #[test]
    fn closest_preset_returns_none_for_empty_list() {
        assert_eq!(closest_preset(&[], GridPoint::new(0, 0)), None);
    }

    #[test]
    fn assignment_picks_colocated_driver() {
        let mut pool = DriverPool::seeded();
        let id = pool.assign_closest(GridPoint::new(1, 1));
        assert_eq!(id, Some(DriverId(1)));
        let driver = pool.get(DriverId(1)).expect("driver 1 exists");
        assert!(!driver.available);
    }

    #[test]
    fn assignment_skips_unavailable_drivers() {
        let mut pool = DriverPool::seeded();
        let first = pool.assign_closest(GridPoint::new(1, 1));
        let second = pool.assign_closest(GridPoint::new(1, 1));
        assert_eq!(first, Some(DriverId(1)));
        // Driver 7 at (0, 2) is next closest to (1, 1), distance 2.
        assert_eq!(second, Some(DriverId(7)));
    }

    #[test]
    fn exhausted_pool_returns_none() {
        let mut pool = DriverPool::seeded();
        for _ in 0..10 {
            assert!(pool.assign_closest(GridPoint::new(0, 0)).is_some());
        }
        assert_eq!(pool.available_count(), 0);
        assert_eq!(pool.assign_closest(GridPoint::new(0, 0)), None);
    }
}
