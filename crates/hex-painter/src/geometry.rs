//! Core geometry types for hex-painter.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = lets you print with `{:?}`
//! - `Clone`/`Copy` = small values copied implicitly (no moves to track)
//! - `PartialEq`/`Eq` = can compare with `==`
//! - `Hash` = usable as a `HashMap`/`HashSet` key
//!
//! `Point` only gets `PartialEq` because `f64` has NaN, which is not equal
//! to itself. `HexCoord` holds integers, so it can have the full set.

use std::fmt;

/// A 2D point in drawing-surface units (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Axial coordinates of a hex cell.
///
/// The third cube axis is implicit: `-x - y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HexCoord {
    pub x: i32,
    pub y: i32,
}

// ============================================================================
// IMPLEMENTATIONS (methods)
// ============================================================================

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl HexCoord {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cells surrounding this one, at most six.
    ///
    /// Order: `+x`, `+x -y`, `-y`, `-x`, `-x +y`, `+y`. These are exactly
    /// the cells [`are_adjacent`](crate::hex::are_adjacent) accepts. Cells
    /// that would fall outside the `i32` range are skipped.
    pub fn neighbors(self) -> impl Iterator<Item = HexCoord> {
        const OFFSETS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

        OFFSETS.into_iter().filter_map(move |(dx, dy)| {
            Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
        })
    }

    /// Step distance to another cell, measured on the cube axes
    /// `(x, -x - y, y)`.
    pub fn distance(self, other: HexCoord) -> u64 {
        let (ax, ay) = (i64::from(self.x), i64::from(self.y));
        let (bx, by) = (i64::from(other.x), i64::from(other.y));
        let dx = (ax - bx).unsigned_abs();
        let dz = (ay - by).unsigned_abs();
        let dy = ((-ax - ay) - (-bx - by)).unsigned_abs();
        (dx + dy + dz) / 2
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(i32, i32)> for HexCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Calculate signed area of a point sequence using the shoelace formula.
///
/// With y pointing down, a positive result means the points run
/// clockwise on screen.
pub fn signed_area_of_points(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += points[i].x * points[j].y;
        area -= points[j].x * points[i].y;
    }
    area / 2.0
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.distance(p2), 5.0); // 3-4-5 triangle
    }

    #[test]
    fn neighbors_are_one_step_away() {
        let origin = HexCoord::new(3, 5);
        for n in origin.neighbors() {
            assert_eq!(origin.distance(n), 1, "{} should be one step from {}", n, origin);
        }
    }

    #[test]
    fn neighbors_are_distinct() {
        let ns: Vec<_> = HexCoord::new(0, 0).neighbors().collect();
        assert_eq!(ns.len(), 6);
        for i in 0..ns.len() {
            for j in (i + 1)..ns.len() {
                assert_ne!(ns[i], ns[j]);
            }
        }
    }

    #[test]
    fn distance_to_self_is_zero() {
        let c = HexCoord::new(-7, 12);
        assert_eq!(c.distance(c), 0);
    }

    #[test]
    fn same_sign_diagonal_is_two_steps() {
        let c = HexCoord::new(0, 0);
        assert_eq!(c.distance(HexCoord::new(1, 1)), 2);
        assert_eq!(c.distance(HexCoord::new(-1, -1)), 2);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = HexCoord::new(2, -3);
        let b = HexCoord::new(-4, 6);
        assert_eq!(a.distance(b), b.distance(a));
        assert_eq!(a.distance(b), 9);
    }

    #[test]
    fn neighbors_stop_at_coordinate_range() {
        let edge: Vec<_> = HexCoord::new(i32::MAX, 0).neighbors().collect();
        assert_eq!(edge.len(), 4);
        assert!(edge.contains(&HexCoord::new(i32::MAX - 1, 0)));

        let corner: Vec<_> = HexCoord::new(i32::MIN, i32::MIN).neighbors().collect();
        assert_eq!(
            corner,
            [HexCoord::new(i32::MIN + 1, i32::MIN), HexCoord::new(i32::MIN, i32::MIN + 1)]
        );
    }

    #[test]
    fn distance_does_not_overflow() {
        let far = HexCoord::new(2_000_000_000, 2_000_000_000);
        assert_eq!(far.distance(HexCoord::new(0, 0)), 4_000_000_000);

        let a = HexCoord::new(i32::MIN, i32::MAX);
        let b = HexCoord::new(i32::MAX, i32::MIN);
        assert_eq!(a.distance(b), u64::from(u32::MAX));
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn neighbors_at_range_edge_are_adjacent() {
        let edge = HexCoord::new(i32::MAX, i32::MIN);
        for n in edge.neighbors() {
            assert_eq!(edge.distance(n), 1);
            assert!(crate::hex::are_adjacent(edge, n));
        }
    }

    #[test]
    fn display_is_comma_separated() {
        assert_eq!(HexCoord::new(4, -2).to_string(), "4,-2");
    }

    #[test]
    fn signed_area_square() {
        // Clockwise on screen (y down) gives a positive area
        let square = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let area = signed_area_of_points(&square);
        assert!((area - 100.0).abs() < 1e-10, "10x10 square should have area 100, got {}", area);
    }

    #[test]
    fn signed_area_degenerate() {
        assert_eq!(signed_area_of_points(&[Point::new(1.0, 1.0), Point::new(2.0, 2.0)]), 0.0);
    }
}
