//! Grid coordinates: [`Point`] and the half-open [`Range`] of a node grid.
//!
//! `Point::x` is a node's `gridX` (world x axis) and `Point::y` its `gridY`
//! (world z axis).

use std::fmt;
use std::ops::{Add, Sub};

/// Integer coordinate of a node inside a grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point offset by one king move (or any `dx`, `dy`).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// True when `other` is one of the eight cells around `self`.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        self != other && (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.shift(rhs.x, rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.shift(-rhs.x, -rhs.y)
    }
}

/// Cells with `min <= p < max` on both axes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Range spanned by two corners, given in any order.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// The bounds of a `side` by `side` grid, `[0, side)` on both axes.
    #[inline]
    pub fn square(side: i32) -> Self {
        let side = side.max(0);
        Self::new(0, 0, side, side)
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.max.x - self.min.x) as usize * (self.max.y - self.min.y) as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Closest cell of the range to `p`, `None` if the range has no cells.
    #[inline]
    pub fn clamp(self, p: Point) -> Option<Point> {
        if self.is_empty() {
            return None;
        }
        Some(Point::new(
            p.x.clamp(self.min.x, self.max.x - 1),
            p.y.clamp(self.min.y, self.max.y - 1),
        ))
    }

    /// Walks `x` outer and `y` inner, the storage order of a
    /// `[gridX][gridY]` node array. Nearest-node ties follow this order.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Column-major walk over a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.range.is_empty() || self.cur.x >= self.range.max.x {
            return None;
        }
        let p = self.cur;
        self.cur.y += 1;
        if self.cur.y >= self.range.max.y {
            self.cur = Point::new(self.cur.x + 1, self.range.min.y);
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let Range { min, max } = self.range;
        if self.range.is_empty() || self.cur.x >= max.x {
            return (0, Some(0));
        }
        let column = (max.y - min.y) as usize;
        let left = (max.y - self.cur.y) as usize + (max.x - self.cur.x - 1) as usize * column;
        (left, Some(left))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_and_adjacency() {
        let p = Point::new(5, 5);
        assert_eq!(p + Point::new(1, -1), Point::new(6, 4));
        assert_eq!(p - Point::new(5, 5), Point::default());
        assert_eq!(p.shift(-1, 1), Point::new(4, 6));
        assert!(p.is_adjacent(Point::new(4, 4)));
        assert!(p.is_adjacent(Point::new(5, 6)));
        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Point::new(7, 5)));
    }

    #[test]
    fn square_bounds_contain_only_grid_cells() {
        let r = Range::square(3);
        assert_eq!(r.len(), 9);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(2, 2)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, -1)));
        assert!(Range::square(-2).is_empty());
    }

    #[test]
    fn corners_in_any_order() {
        assert_eq!(Range::new(3, 2, 0, 0), Range::new(0, 0, 3, 2));
    }

    #[test]
    fn iter_walks_columns_first() {
        let r = Range::new(0, 0, 3, 2);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(
            pts,
            [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)].map(|(x, y)| Point::new(x, y))
        );
        let mut it = r.iter();
        it.next();
        assert_eq!(it.len(), 5);
        assert_eq!(Range::square(0).iter().count(), 0);
    }

    #[test]
    fn clamp_snaps_outside_points() {
        let r = Range::square(5);
        assert_eq!(r.clamp(Point::new(-3, 9)), Some(Point::new(0, 4)));
        assert_eq!(r.clamp(Point::new(2, 2)), Some(Point::new(2, 2)));
        assert_eq!(Range::default().clamp(Point::new(0, 0)), None);
    }
}
