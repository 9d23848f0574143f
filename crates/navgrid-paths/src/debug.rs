//! Debug visualization: the "last computed path" slot and a grid overlay.

use navgrid_core::Point;

use crate::grid::NodeGrid;
use crate::path::Path;

/// What a [`PathSlot`] does when a search finds nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OnNoPath {
    /// Keep showing the previous path.
    #[default]
    RetainPrevious,
    /// Show nothing.
    Clear,
}

/// Caller-owned holder of the most recently computed path.
#[derive(Clone, Debug, Default)]
pub struct PathSlot {
    last: Option<Path>,
    on_no_path: OnNoPath,
}

impl PathSlot {
    pub fn new(on_no_path: OnNoPath) -> Self {
        Self {
            last: None,
            on_no_path,
        }
    }

    /// Record the outcome of a search. Returns `true` if a path was found.
    pub fn record(&mut self, outcome: Option<&Path>) -> bool {
        match outcome {
            Some(path) => {
                self.last = Some(path.clone());
                true
            }
            None => {
                if self.on_no_path == OnNoPath::Clear {
                    self.last = None;
                }
                false
            }
        }
    }

    #[inline]
    pub fn last(&self) -> Option<&Path> {
        self.last.as_ref()
    }

    /// The last path, only if it belongs to `grid`'s generation.
    #[inline]
    pub fn last_on(&self, grid: &NodeGrid) -> Option<&Path> {
        self.last.as_ref().filter(|p| p.is_current(grid))
    }
}

/// Per-node classification for debug drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayCell {
    Walkable,
    Blocked,
    Path,
}

impl OverlayCell {
    pub fn glyph(self) -> char {
        match self {
            Self::Walkable => '.',
            Self::Blocked => '#',
            Self::Path => '*',
        }
    }
}

/// Snapshot of a grid with an optional path drawn over it.
#[derive(Clone, Debug)]
pub struct Overlay {
    side: usize,
    cells: Vec<OverlayCell>,
}

impl Overlay {
    /// Classify every node of `grid`. A path from another generation is
    /// ignored.
    pub fn new(grid: &NodeGrid, path: Option<&Path>) -> Self {
        let side = grid.side();
        // Row-major by gridY for drawing.
        let mut cells = vec![OverlayCell::Blocked; side * side];
        for n in grid.iter() {
            let i = n.grid_pos.y as usize * side + n.grid_pos.x as usize;
            cells[i] = if n.walkable {
                OverlayCell::Walkable
            } else {
                OverlayCell::Blocked
            };
        }
        if let Some(path) = path.filter(|p| p.is_current(grid)) {
            for p in path.points() {
                cells[p.y as usize * side + p.x as usize] = OverlayCell::Path;
            }
        }
        Self { side, cells }
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn at(&self, p: Point) -> Option<OverlayCell> {
        if p.x < 0 || p.y < 0 || p.x as usize >= self.side || p.y as usize >= self.side {
            return None;
        }
        Some(self.cells[p.y as usize * self.side + p.x as usize])
    }

    /// One row per `gridY`, one char per `gridX`.
    pub fn rows(&self) -> impl Iterator<Item = &[OverlayCell]> {
        self.cells.chunks(self.side.max(1))
    }

    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.side);
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(|c| c.glyph()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pathfinder;
    use crate::grid::testkit::grid_from_rows;

    #[test]
    fn slot_policies() {
        let g = grid_from_rows(&["...", "...", "..."]);
        let path = Pathfinder::new()
            .astar_between(&g, Point::new(0, 0), Point::new(2, 2))
            .unwrap();

        let mut keep = PathSlot::new(OnNoPath::RetainPrevious);
        assert!(keep.record(Some(&path)));
        assert!(!keep.record(None));
        assert_eq!(keep.last(), Some(&path));

        let mut clear = PathSlot::new(OnNoPath::Clear);
        clear.record(Some(&path));
        clear.record(None);
        assert!(clear.last().is_none());
    }

    #[test]
    fn slot_hides_stale_path() {
        let g = grid_from_rows(&["...", "...", "..."]);
        let mut slot = PathSlot::default();
        slot.record(
            Pathfinder::new()
                .bfs_between(&g, Point::new(0, 0), Point::new(2, 0))
                .as_ref(),
        );
        assert!(slot.last_on(&g).is_some());
        let rebuilt = grid_from_rows(&["...", "...", "..."]);
        assert!(slot.last_on(&rebuilt).is_none());
        assert!(slot.last().is_some());
    }

    #[test]
    fn ascii_overlay() {
        let g = grid_from_rows(&[
            ".....", //
            "..#..", //
            "..#..", //
            "..#..", //
            ".....",
        ]);
        let path = Pathfinder::new()
            .astar_between(&g, Point::new(0, 2), Point::new(4, 2))
            .unwrap();
        let overlay = Overlay::new(&g, Some(&path));
        assert_eq!(
            overlay.to_ascii(),
            "..*..\n.*#*.\n..#.*\n..#..\n....."
        );
        assert_eq!(overlay.at(Point::new(2, 0)), Some(OverlayCell::Path));
        assert_eq!(overlay.at(Point::new(2, 2)), Some(OverlayCell::Blocked));
        assert_eq!(overlay.at(Point::new(5, 0)), None);
    }
}
