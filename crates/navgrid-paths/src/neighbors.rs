use navgrid_core::{Point, Range};

/// King-move offsets in enumeration order: `dx` outer, `dy` inner.
///
/// Both searches expand neighbours in this order, which decides which of
/// several equally good paths is returned.
pub const KING_OFFSETS: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(1, 1),
];

/// Append every in-bounds king-move neighbour of `p` to `buf`.
///
/// Walkability is not consulted; callers filter. Diagonals are returned even
/// when both orthogonal cells beside them are blocked.
#[inline]
pub fn king_neighbors(p: Point, bounds: Range, buf: &mut Vec<Point>) {
    for d in KING_OFFSETS {
        let n = p + d;
        if bounds.contains(n) {
            buf.push(n);
        }
    }
}
