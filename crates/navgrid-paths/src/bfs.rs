use navgrid_core::{Point, Vec3};

use crate::Pathfinder;
use crate::grid::NodeGrid;
use crate::path::Path;
use crate::pathfinder::NO_PARENT;

impl Pathfinder {
    /// Path with the fewest steps between two world positions, by
    /// breadth-first search.
    ///
    /// Diagonal and straight steps count the same here, so the result can
    /// cost more than the A* path under the octile metric. Returns `None`
    /// if the target cannot be reached.
    pub fn bfs_path(&mut self, grid: &NodeGrid, start: Vec3, target: Vec3) -> Option<Path> {
        let from = grid.nearest_point(start)?;
        let to = grid.nearest_point(target)?;
        self.bfs_between(grid, from, to)
    }

    /// BFS between two grid coordinates.
    pub fn bfs_between(&mut self, grid: &NodeGrid, from: Point, to: Point) -> Option<Path> {
        let start_idx = grid.idx(from)?;
        let goal_idx = grid.idx(to)?;
        let cur_gen = self.begin(grid);

        // A node is visited once its stamp matches this search.
        {
            let n = &mut self.nodes[start_idx];
            n.generation = cur_gen;
            n.parent = NO_PARENT;
        }
        self.queue.push_back(start_idx);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(ci) = self.queue.pop_front() {
            self.expanded += 1;
            if ci == goal_idx {
                found = true;
                break;
            }

            let cp = grid.point(ci);
            nbuf.clear();
            grid.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = grid.idx(np) else {
                    continue;
                };
                if !grid.node_by_index(ni).walkable {
                    continue;
                }
                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    continue;
                }
                n.generation = cur_gen;
                n.parent = ci;
                self.queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;

        log::trace!(
            "bfs {from} -> {to} on generation {}: {} dequeued, found={found}",
            grid.generation(),
            self.expanded
        );

        if !found {
            return None;
        }
        Some(self.retrace(grid, start_idx, goal_idx))
    }
}
