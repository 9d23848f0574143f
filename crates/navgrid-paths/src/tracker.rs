//! Ownership of the live grid across ticks.

use navgrid_core::Vec3;

use crate::config::GridConfig;
use crate::error::NavError;
use crate::grid::NodeGrid;
use crate::traits::{ReferencePosition, WalkabilityOracle};

/// Keeps the current [`NodeGrid`] centred on a moving reference point.
///
/// Call [`update`](Self::update) once per tick, before any search that reads
/// [`grid`](Self::grid) in the same tick.
#[derive(Debug)]
pub struct GridTracker {
    config: GridConfig,
    grid: NodeGrid,
    last_updated_position: Vec3,
    rebuilds: u64,
}

impl GridTracker {
    /// Build the initial grid around the reference's current position.
    pub fn new<R, O>(config: GridConfig, reference: &R, oracle: &O) -> Result<Self, NavError>
    where
        R: ReferencePosition + ?Sized,
        O: WalkabilityOracle + ?Sized,
    {
        let center = reference.position();
        let grid = NodeGrid::build(config, center, oracle)?;
        Ok(Self {
            config,
            grid,
            last_updated_position: center,
            rebuilds: 0,
        })
    }

    /// Rebuild the grid if the reference has moved at all since the last
    /// build. Returns whether a rebuild happened.
    ///
    /// On failure the previous grid stays current and the same rebuild is
    /// attempted again on the next call.
    pub fn update<R, O>(&mut self, reference: &R, oracle: &O) -> Result<bool, NavError>
    where
        R: ReferencePosition + ?Sized,
        O: WalkabilityOracle + ?Sized,
    {
        let current = reference.position();
        if current == self.last_updated_position {
            return Ok(false);
        }
        match NodeGrid::build(self.config, current, oracle) {
            Ok(grid) => {
                log::debug!(
                    "reference moved {} -> {current}, grid generation {} replaces {}",
                    self.last_updated_position,
                    grid.generation(),
                    self.grid.generation()
                );
                self.grid = grid;
                self.last_updated_position = current;
                self.rebuilds += 1;
                Ok(true)
            }
            Err(e) => {
                log::warn!("grid rebuild around {current} deferred: {e}");
                Err(e)
            }
        }
    }

    /// The current grid generation.
    #[inline]
    pub fn grid(&self) -> &NodeGrid {
        &self.grid
    }

    /// Centre of the current grid.
    #[inline]
    pub fn last_updated_position(&self) -> Vec3 {
        self.last_updated_position
    }

    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Number of successful rebuilds since construction.
    #[inline]
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }
}
