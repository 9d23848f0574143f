//! Walkability grid and path search for agents in a streaming world.
//!
//! - [`NodeGrid`]: a square grid of [`Node`]s probed from a
//!   [`WalkabilityOracle`] around a world-space centre, with nearest-node
//!   snapping.
//! - [`GridTracker`]: owns the live grid and rebuilds it whenever the
//!   [`ReferencePosition`] (usually a [`StreamingFocus`]) moves.
//! - [`Pathfinder`]: A\* ([`Pathfinder::astar_path`]) and breadth-first
//!   ([`Pathfinder::bfs_path`]) search over a grid, returning a [`Path`].
//! - [`PathSlot`] and [`Overlay`]: optional debug view of the last path.
//!
//! Grids are never mutated after a build. Each build gets a fresh
//! generation id; [`NodeId`]s and [`Path`]s remember theirs, so data from a
//! superseded grid is rejected instead of silently misread.
//!
//! Movement is 8-directional with octile costs: 10 per straight step, 14 per
//! diagonal. Diagonal steps are allowed even when both orthogonal cells
//! beside them are blocked.

mod astar;
mod bfs;
mod config;
mod debug;
mod distance;
mod error;
mod focus;
mod grid;
mod neighbors;
mod node;
mod path;
mod pathfinder;
mod tracker;
mod traits;

#[cfg(test)]
mod search_properties;

pub use config::{GridConfig, MAX_CHUNK_SIZE};
pub use debug::{OnNoPath, Overlay, OverlayCell, PathSlot};
pub use distance::{DIAGONAL_COST, STRAIGHT_COST, chebyshev, octile};
pub use error::NavError;
pub use focus::StreamingFocus;
pub use grid::NodeGrid;
pub use neighbors::{KING_OFFSETS, king_neighbors};
pub use node::{Node, NodeId};
pub use path::Path;
pub use pathfinder::{Algorithm, Pathfinder};
pub use tracker::GridTracker;
pub use traits::{ReferencePosition, WalkabilityOracle};
