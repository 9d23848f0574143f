use std::fmt;

use navgrid_core::{Point, Vec3};

/// One cell of a navigation grid.
///
/// Nodes are immutable once built. Search bookkeeping (`g`, `h`, parent)
/// lives in the [`Pathfinder`](crate::Pathfinder), not here.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// `(gridX, gridY)`, both in `[0, 2 * chunk_size]`.
    pub grid_pos: Point,
    /// Cell centre on the grid's flat bookkeeping plane.
    pub world_position: Vec3,
    pub walkable: bool,
}

/// Handle to a node of one specific grid generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) generation: u64,
    pub(crate) index: usize,
}

impl NodeId {
    /// Generation of the grid this handle was issued by.
    #[inline]
    pub fn generation(self) -> u64 {
        self.generation
    }

    /// Flat index of the node inside its grid.
    #[inline]
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@{}", self.index, self.generation)
    }
}
