//! The [`NodeGrid`]: a square walkability grid centred on a world position.
//!
//! A grid is built in one go from a [`WalkabilityOracle`] and never mutated
//! afterwards. Moving the centre means building a new grid, which receives a
//! fresh generation id; handles into the old one are rejected from then on.

use std::sync::atomic::{AtomicU64, Ordering};

use navgrid_core::{Point, Range, Vec3};

use crate::config::GridConfig;
use crate::error::NavError;
use crate::neighbors::king_neighbors;
use crate::node::{Node, NodeId};
use crate::traits::WalkabilityOracle;

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// A `(2 * chunk_size + 1)²` grid of [`Node`]s.
///
/// Nodes are stored `[gridX][gridY]`: flat index `x * side + y`.
#[derive(Debug, Clone)]
pub struct NodeGrid {
    config: GridConfig,
    center: Vec3,
    generation: u64,
    bounds: Range,
    side: usize,
    nodes: Vec<Node>,
}

impl NodeGrid {
    /// Probe every cell around `center` and build a complete grid.
    ///
    /// The first oracle failure aborts the build; nothing partial is
    /// returned.
    pub fn build<O: WalkabilityOracle + ?Sized>(
        config: GridConfig,
        center: Vec3,
        oracle: &O,
    ) -> Result<Self, NavError> {
        config.validate()?;
        if !center.is_finite() {
            return Err(NavError::InvalidConfig(format!(
                "grid centre {center} is not finite"
            )));
        }

        let chunk = config.chunk_size as i32;
        let side = config.side();
        let mut nodes = Vec::with_capacity((side as usize) * (side as usize));
        let mut walkable_count = 0usize;

        for x in -chunk..=chunk {
            for z in -chunk..=chunk {
                let probe = center
                    + Vec3::new(
                        x as f32 * config.cell_spacing,
                        config.probe_height,
                        z as f32 * config.cell_spacing,
                    );
                let walkable = oracle.is_walkable(probe, config.probe_radius)?;
                if walkable {
                    walkable_count += 1;
                }
                nodes.push(Node {
                    grid_pos: Point::new(x + chunk, z + chunk),
                    world_position: probe.with_y(config.node_elevation),
                    walkable,
                });
            }
        }

        let generation = next_generation();
        log::debug!(
            "built {side}x{side} node grid (generation {generation}) around {center}: \
             {walkable_count}/{} walkable",
            nodes.len()
        );

        Ok(Self {
            config,
            center,
            generation,
            bounds: Range::square(side),
            side: side as usize,
            nodes,
        })
    }

    /// Configuration the grid was built with.
    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// World position the grid was built around.
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Unique, monotonically increasing id of this build.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Grid coordinate bounds, `[0, side)²`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of cells along one side.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.x as usize * self.side + p.y as usize)
    }

    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.nodes[idx].grid_pos
    }

    #[inline]
    pub(crate) fn node_by_index(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    #[inline]
    fn id(&self, index: usize) -> NodeId {
        NodeId {
            generation: self.generation,
            index,
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Node at grid coordinate `p`.
    #[inline]
    pub fn node_at(&self, p: Point) -> Option<&Node> {
        self.idx(p).map(|i| &self.nodes[i])
    }

    /// Resolve a handle, rejecting handles from other generations.
    ///
    /// Handles are only minted by this grid, so a matching generation
    /// always names one of its nodes.
    pub fn node(&self, id: NodeId) -> Result<&Node, NavError> {
        self.check_generation(id.generation)?;
        Ok(&self.nodes[id.index])
    }

    /// Error unless `generation` is this grid's generation.
    #[inline]
    pub fn check_generation(&self, generation: u64) -> Result<(), NavError> {
        if generation == self.generation {
            Ok(())
        } else {
            Err(NavError::StaleGeneration {
                expected: self.generation,
                found: generation,
            })
        }
    }

    /// Whether `p` is in bounds and walkable.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.node_at(p).is_some_and(|n| n.walkable)
    }

    /// All nodes, `gridX` outer and `gridY` inner.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Append the in-bounds king-move neighbours of `p` to `buf`,
    /// regardless of walkability.
    #[inline]
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        king_neighbors(p, self.bounds, buf);
    }

    /// Squared distance from `world` to node `i` on the ground plane.
    ///
    /// Every node sits at the same elevation, so the vertical offset adds
    /// the same amount to each candidate and is left out. Keeping it would
    /// let a large `y` swamp the horizontal terms in `f32`.
    #[inline]
    fn ground_distance_squared(&self, world: Vec3, i: usize) -> f32 {
        let node = self.nodes[i].world_position;
        world.with_y(node.y).distance_squared(node)
    }

    /// Node closest to `world`, by exhaustive scan.
    ///
    /// Ties go to the first minimum met, scanning `gridX` outer and `gridY`
    /// inner. Returns `None` for an empty grid or a non-finite position.
    pub fn nearest_node_exhaustive(&self, world: Vec3) -> Option<NodeId> {
        let mut best: Option<usize> = None;
        let mut best_dist = f32::INFINITY;
        for i in 0..self.nodes.len() {
            let d = self.ground_distance_squared(world, i);
            if d < best_dist {
                best_dist = d;
                best = Some(i);
            }
        }
        best.map(|i| self.id(i))
    }

    /// Node closest to `world`.
    ///
    /// Same result and tie-breaking as
    /// [`nearest_node_exhaustive`](Self::nearest_node_exhaustive), but only
    /// the 3×3 window around the lattice cell containing `world` is compared.
    pub fn nearest_node(&self, world: Vec3) -> Option<NodeId> {
        if self.nodes.is_empty() || !world.is_finite() {
            return None;
        }
        let chunk = self.config.chunk_size as f32;
        let spacing = self.config.cell_spacing;
        let snap = |offset: f32| -> i32 {
            ((offset / spacing).round().clamp(-chunk - 1.0, chunk + 1.0)) as i32
                + self.config.chunk_size as i32
        };
        let guess = Point::new(
            snap(world.x - self.center.x),
            snap(world.z - self.center.z),
        );
        let guess = self.bounds.clamp(guess)?;

        let mut best: Option<usize> = None;
        let mut best_dist = f32::INFINITY;
        for dx in -1..=1 {
            for dy in -1..=1 {
                let Some(i) = self.idx(guess.shift(dx, dy)) else {
                    continue;
                };
                let d = self.ground_distance_squared(world, i);
                if d < best_dist {
                    best_dist = d;
                    best = Some(i);
                }
            }
        }
        best.map(|i| self.id(i))
    }

    /// Grid coordinate of the node closest to `world`.
    #[inline]
    pub fn nearest_point(&self, world: Vec3) -> Option<Point> {
        self.nearest_node(world).map(|id| self.point(id.index))
    }
}

#[cfg(test)]
pub(crate) mod testkit {
    use super::*;

    /// Build a grid centred on the origin from an ASCII map.
    ///
    /// Rows are `gridY`, columns `gridX`; `#` is blocked, anything else
    /// walkable. The map must be square with an odd side.
    pub(crate) fn grid_from_rows(rows: &[&str]) -> NodeGrid {
        let side = rows.len() as i32;
        assert!(side % 2 == 1, "map side must be odd");
        let chunk = side / 2;
        let cells: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        for r in &cells {
            assert_eq!(r.len() as i32, side, "map must be square");
        }
        let oracle = move |p: Vec3, _radius: f32| {
            let gx = (p.x.round() as i32 + chunk) as usize;
            let gy = (p.z.round() as i32 + chunk) as usize;
            cells[gy][gx] != '#'
        };
        NodeGrid::build(GridConfig::with_chunk_size(chunk as u32), Vec3::ZERO, &oracle)
            .expect("closure oracle never fails")
    }

    /// World position of the node at grid coordinate `(x, y)` in a grid
    /// built by [`grid_from_rows`].
    pub(crate) fn world_of(grid: &NodeGrid, x: i32, y: i32) -> Vec3 {
        grid.node_at(Point::new(x, y))
            .expect("in bounds")
            .world_position
    }
}
