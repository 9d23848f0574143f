use std::collections::{BinaryHeap, VecDeque};

use navgrid_core::{Point, Vec3};

use crate::grid::NodeGrid;
use crate::path::Path;

// ---------------------------------------------------------------------------
// Search-scoped node bookkeeping
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeState {
    Open,
    Closed,
}

/// Per-node search state, valid only while `generation` matches the
/// pathfinder's current search generation.
#[derive(Clone, Debug)]
pub(crate) struct SearchNode {
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    /// Order in which the node entered the open set.
    pub(crate) seq: u32,
    pub(crate) state: NodeState,
}

impl SearchNode {
    #[inline]
    pub(crate) fn f(&self) -> i32 {
        self.g + self.h
    }
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: 0,
            h: 0,
            parent: NO_PARENT,
            generation: 0,
            seq: 0,
            state: NodeState::Closed,
        }
    }
}

pub(crate) const NO_PARENT: usize = usize::MAX;

/// Open-set entry, popped by lowest `f`, then lowest `h`, then earliest
/// insertion.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct OpenEntry {
    pub(crate) idx: usize,
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) h: i32,
    pub(crate) seq: u32,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Search algorithm to run for a path request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Minimum octile cost.
    #[default]
    AStar,
    /// Minimum hop count, ignoring diagonal/straight weighting.
    Bfs,
}

impl Algorithm {
    pub fn label(self) -> &'static str {
        match self {
            Self::AStar => "A*",
            Self::Bfs => "BFS",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::AStar => Self::Bfs,
            Self::Bfs => Self::AStar,
        }
    }
}

/// Runs path searches over [`NodeGrid`]s.
///
/// All per-search bookkeeping lives here, in tables indexed like the grid
/// and lazily invalidated by bumping a generation counter, so grids stay
/// immutable and searches never see each other's costs. The tables are
/// reused across searches and resized when the grid size changes.
#[derive(Debug, Default)]
pub struct Pathfinder {
    pub(crate) nodes: Vec<SearchNode>,
    pub(crate) generation: u32,
    pub(crate) open: BinaryHeap<OpenEntry>,
    pub(crate) queue: VecDeque<usize>,
    pub(crate) nbuf: Vec<Point>,
    pub(crate) expanded: usize,
}

impl Pathfinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a path with the chosen algorithm.
    pub fn find_path(
        &mut self,
        algorithm: Algorithm,
        grid: &NodeGrid,
        start: Vec3,
        target: Vec3,
    ) -> Option<Path> {
        match algorithm {
            Algorithm::AStar => self.astar_path(grid, start, target),
            Algorithm::Bfs => self.bfs_path(grid, start, target),
        }
    }

    /// Nodes taken off the open set / queue by the last search.
    #[inline]
    pub fn last_expanded(&self) -> usize {
        self.expanded
    }

    /// Size the tables for `grid` and start a new search generation.
    pub(crate) fn begin(&mut self, grid: &NodeGrid) -> u32 {
        if self.nodes.len() != grid.len() {
            self.nodes.clear();
            self.nodes.resize(grid.len(), SearchNode::default());
            self.generation = 0;
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.open.clear();
        self.queue.clear();
        self.expanded = 0;
        self.generation
    }

    /// Follow parents from `goal` back to `start`, excluding `start`.
    pub(crate) fn retrace(&self, grid: &NodeGrid, start: usize, goal: usize) -> Path {
        let mut points = Vec::new();
        let mut ci = goal;
        while ci != start && ci != NO_PARENT {
            points.push(grid.point(ci));
            ci = self.nodes[ci].parent;
        }
        points.reverse();
        Path::from_points(grid, grid.point(start), points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::testkit::grid_from_rows;

    #[test]
    fn open_entries_pop_by_f_then_h_then_seq() {
        let mut heap = BinaryHeap::new();
        let e = |idx, f, h, seq| OpenEntry {
            idx,
            g: f - h,
            f,
            h,
            seq,
        };
        heap.push(e(0, 30, 10, 0));
        heap.push(e(1, 28, 14, 1));
        heap.push(e(2, 28, 10, 2));
        heap.push(e(3, 28, 10, 3));
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|e| e.idx)).collect();
        assert_eq!(order, vec![2, 3, 1, 0]);
    }

    #[test]
    fn begin_resizes_and_bumps_generation() {
        let mut pf = Pathfinder::new();
        let small = grid_from_rows(&["..."; 3]);
        assert_eq!(pf.begin(&small), 1);
        assert_eq!(pf.nodes.len(), 9);
        assert_eq!(pf.begin(&small), 2);
        let big = grid_from_rows(&["....."; 5]);
        assert_eq!(pf.begin(&big), 1);
        assert_eq!(pf.nodes.len(), 25);
    }

    #[test]
    fn generation_wrap_resets_stamps() {
        let mut pf = Pathfinder::new();
        let g = grid_from_rows(&["..."; 3]);
        pf.begin(&g);
        pf.nodes[4].generation = u32::MAX;
        pf.generation = u32::MAX;
        assert_eq!(pf.begin(&g), 1);
        assert!(pf.nodes.iter().all(|n| n.generation == 0));
    }

    #[test]
    fn algorithm_labels() {
        assert_eq!(Algorithm::default(), Algorithm::AStar);
        assert_eq!(Algorithm::AStar.toggle(), Algorithm::Bfs);
        assert_eq!(Algorithm::Bfs.label(), "BFS");
    }
}
