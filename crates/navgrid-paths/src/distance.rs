use navgrid_core::Point;

/// Cost of an axis-aligned step.
pub const STRAIGHT_COST: i32 = 10;
/// Cost of a diagonal step (integer approximation of 10·√2).
pub const DIAGONAL_COST: i32 = 14;

/// Octile distance between two grid points, scaled by 10.
///
/// Used both as the A* heuristic and as the step cost between adjacent
/// nodes. Admissible for 8-directional movement with these costs.
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    if dx > dy {
        DIAGONAL_COST * dy + STRAIGHT_COST * (dx - dy)
    } else {
        DIAGONAL_COST * dx + STRAIGHT_COST * (dy - dx)
    }
}

/// Chebyshev (L∞) distance: the hop count on an open 8-connected grid.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
