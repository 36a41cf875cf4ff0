//! Spatial model: bounded integer grid coordinates and Manhattan distance.
//!
//! The service area is the square `[0, 100] x [0, 100]`. All pickup,
//! drop-off, and driver positions live on this grid.

use std::fmt;

pub const GRID_MIN: i32 = 0;
pub const GRID_MAX: i32 = 100;

/// A point on the service grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        (GRID_MIN..=GRID_MAX).contains(&self.x) && (GRID_MIN..=GRID_MAX).contains(&self.y)
    }

    /// In-bounds 4-adjacent neighbors (no diagonals).
    pub fn neighbors(&self) -> Vec<GridPoint> {
        [(0, 1), (0, -1), (1, 0), (-1, 0)]
            .into_iter()
            .map(|(dx, dy)| GridPoint::new(self.x + dx, self.y + dy))
            .filter(GridPoint::in_bounds)
            .collect()
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Manhattan distance in grid units.
pub fn manhattan_distance(a: GridPoint, b: GridPoint) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// A grid point with an optional display name. Preset pickup and drop-off
/// points carry names; a passenger's typed-in position does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub point: GridPoint,
    pub name: Option<String>,
}

impl Location {
    pub fn at(point: GridPoint) -> Self {
        Self { point, name: None }
    }

    pub fn named(x: i32, y: i32, name: impl Into<String>) -> Self {
        Self {
            point: GridPoint::new(x, y),
            name: Some(name.into()),
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance_sums_axis_deltas() {
        let a = GridPoint::new(0, 0);
        let b = GridPoint::new(10, 10);
        assert_eq!(manhattan_distance(a, b), 20);
        assert_eq!(manhattan_distance(b, a), 20);
        assert_eq!(manhattan_distance(a, a), 0);
    }

    #[test]
    fn bounds_check_covers_all_edges() {
        assert!(GridPoint::new(0, 0).in_bounds());
        assert!(GridPoint::new(100, 100).in_bounds());
        assert!(!GridPoint::new(-1, 50).in_bounds());
        assert!(!GridPoint::new(50, 101).in_bounds());
    }

    #[test]
    fn corner_points_have_two_neighbors() {
        let corner = GridPoint::new(0, 0);
        let neighbors = corner.neighbors();
        assert_eq!(neighbors.len(), 2);
        assert!(neighbors.contains(&GridPoint::new(0, 1)));
        assert!(neighbors.contains(&GridPoint::new(1, 0)));
    }

    #[test]
    fn interior_points_have_four_neighbors() {
        assert_eq!(GridPoint::new(50, 50).neighbors().len(), 4);
    }
}
