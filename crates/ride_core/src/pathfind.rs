//! Shortest route length between two grid points.
//!
//! Breadth-first search over 4-directional adjacency inside the bounded
//! grid. The grid currently has no obstacles, so the result always equals
//! the Manhattan distance; the search is kept so that obstacle support can
//! be added without changing the contract.

use pathfinding::prelude::bfs;

use crate::spatial::GridPoint;

/// Minimum number of unit steps from `start` to `end`, or `None` if the
/// search space is exhausted without reaching `end`.
///
/// On the open grid the `None` arm cannot trigger for in-bounds endpoints;
/// callers should still handle it rather than unwrap.
pub fn grid_route_steps(start: GridPoint, end: GridPoint) -> Option<u32> {
    if start == end {
        return Some(0);
    }
    let path = bfs(&start, |p| p.neighbors(), |p| *p == end)?;
    Some((path.len() - 1) as u32)
}
