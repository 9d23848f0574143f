use navgrid_core::{Point, Vec3};

use crate::Pathfinder;
use crate::distance::octile;
use crate::grid::NodeGrid;
use crate::path::Path;
use crate::pathfinder::{NO_PARENT, NodeState, OpenEntry};

impl Pathfinder {
    /// Shortest walkable path between two world positions using A*.
    ///
    /// Both positions are snapped to their nearest nodes first. Returns
    /// `None` if the target cannot be reached, and an empty path if both
    /// snap to the same node.
    pub fn astar_path(&mut self, grid: &NodeGrid, start: Vec3, target: Vec3) -> Option<Path> {
        let from = grid.nearest_point(start)?;
        let to = grid.nearest_point(target)?;
        self.astar_between(grid, from, to)
    }

    /// A* between two grid coordinates.
    ///
    /// Walkability of `from` and `to` themselves is never checked: a blocked
    /// start still expands, a blocked target is simply never entered.
    pub fn astar_between(&mut self, grid: &NodeGrid, from: Point, to: Point) -> Option<Path> {
        let start_idx = grid.idx(from)?;
        let goal_idx = grid.idx(to)?;
        let cur_gen = self.begin(grid);

        let mut next_seq: u32 = 0;
        {
            let n = &mut self.nodes[start_idx];
            n.g = 0;
            n.h = octile(from, to);
            n.parent = NO_PARENT;
            n.generation = cur_gen;
            n.seq = next_seq;
            n.state = NodeState::Open;
            self.open.push(OpenEntry {
                idx: start_idx,
                g: n.g,
                f: n.f(),
                h: n.h,
                seq: n.seq,
            });
        }
        next_seq += 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search false;
            };
            let ci = current.idx;

            // Skip entries superseded by a cheaper push or already closed.
            let cn = &self.nodes[ci];
            if cn.state != NodeState::Open || cn.g != current.g {
                continue;
            }
            self.nodes[ci].state = NodeState::Closed;
            self.expanded += 1;

            if ci == goal_idx {
                break 'search true;
            }

            let current_g = current.g;
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
                let seen = n.generation == cur_gen;
                if seen && n.state == NodeState::Closed {
                    continue;
                }
                let tentative = current_g + octile(cp, np);
                let in_open = seen && n.state == NodeState::Open;
                if in_open && tentative >= n.g {
                    continue;
                }
                if !in_open {
                    n.seq = next_seq;
                    next_seq += 1;
                }
                n.generation = cur_gen;
                n.g = tentative;
                n.h = octile(np, to);
                n.parent = ci;
                n.state = NodeState::Open;
                self.open.push(OpenEntry {
                    idx: ni,
                    g: n.g,
                    f: n.f(),
                    h: n.h,
                    seq: n.seq,
                });
            }
        };

        self.nbuf = nbuf;

        log::trace!(
            "a* {from} -> {to} on generation {}: {} expanded, found={found}",
            grid.generation(),
            self.expanded
        );

        if !found {
            return None;
        }
        Some(self.retrace(grid, start_idx, goal_idx))
    }
}
