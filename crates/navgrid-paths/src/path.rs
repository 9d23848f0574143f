use navgrid_core::{Point, Vec3};

use crate::distance::octile;
use crate::error::NavError;
use crate::grid::NodeGrid;

/// A computed route through one grid generation.
///
/// Holds the nodes from just after the start up to and including the
/// target. An empty path means start and target snapped to the same node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    generation: u64,
    points: Vec<Point>,
    waypoints: Vec<Vec3>,
    cost: i32,
}

impl Path {
    /// Build a path from grid coordinates, starting after `start`.
    pub(crate) fn from_points(grid: &NodeGrid, start: Point, points: Vec<Point>) -> Self {
        let mut cost = 0;
        let mut prev = start;
        let mut waypoints = Vec::with_capacity(points.len());
        for &p in &points {
            cost += octile(prev, p);
            prev = p;
            if let Some(n) = grid.node_at(p) {
                waypoints.push(n.world_position);
            }
        }
        Self {
            generation: grid.generation(),
            points,
            waypoints,
            cost,
        }
    }

    /// Generation of the grid the path was computed on.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Grid coordinates, start exclusive, target inclusive.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// World positions matching [`points`](Self::points).
    #[inline]
    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }

    /// Total step cost: 10 per straight step, 14 per diagonal one.
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Final grid coordinate, if the path has any steps.
    #[inline]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Whether the path still refers to `grid`'s generation.
    #[inline]
    pub fn is_current(&self, grid: &NodeGrid) -> bool {
        self.generation == grid.generation()
    }

    /// Waypoints, or an error if `grid` has been rebuilt since.
    pub fn waypoints_on(&self, grid: &NodeGrid) -> Result<&[Vec3], NavError> {
        grid.check_generation(self.generation)?;
        Ok(&self.waypoints)
    }
}
