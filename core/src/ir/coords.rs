//! Diagram coordinates
//!
//! Points live on an integer grid so that identity is exact: two points at
//! the same coordinate are the same point.

use crate::error::{NetworkError, NetworkResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A grid point in the diagram, serialized as `[x, y]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Vector from `self` to `other`
    ///
    /// Differences are taken in `i128`, so any two grid points are valid.
    pub fn to(&self, other: &Point) -> (f64, f64) {
        let dx = i128::from(other.x) - i128::from(self.x);
        let dy = i128::from(other.y) - i128::from(self.y);
        (dx as f64, dy as f64)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i64, i64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// RGB color attached to a point
///
/// Black is the default and marks a low point; any other color marks a
/// high point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0);
    pub const ORANGE: Color = Color(255, 165, 0);

    /// Binarized label: true for a high point
    pub fn is_high(&self) -> bool {
        *self != Color::BLACK
    }

    /// The color a point switches to when toggled in the editor
    pub fn toggled(&self) -> Color {
        if *self == Color::BLACK {
            Color::ORANGE
        } else {
            Color::BLACK
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Undirected connection between two points, serialized as `[[x1, y1], [x2, y2]]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(Point, Point)", into = "(Point, Point)")]
pub struct Edge {
    pub a: Point,
    pub b: Point,
}

impl Edge {
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// True if both edges join the same pair of points, in either orientation
    pub fn same_as(&self, other: &Edge) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }

    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }
}

impl From<(Point, Point)> for Edge {
    fn from((a, b): (Point, Point)) -> Self {
        Self { a, b }
    }
}

impl From<Edge> for (Point, Point) {
    fn from(e: Edge) -> Self {
        (e.a, e.b)
    }
}

/// Geometric computations on grid points
pub mod ops {
    use super::*;

    /// Angle at `vertex` between the rays towards `a` and `c`, in degrees
    ///
    /// The result lies in `[0, 180]`. Fails when either ray has zero length
    /// or when `a` and `c` are the same point.
    pub fn points_to_degrees(a: Point, vertex: Point, c: Point) -> NetworkResult<f64> {
        let degenerate = || NetworkError::DegenerateAngle { a, vertex, c };

        if a == c {
            return Err(degenerate());
        }

        let (bax, bay) = vertex.to(&a);
        let (bcx, bcy) = vertex.to(&c);

        let mag1 = (bax * bax + bay * bay).sqrt();
        let mag2 = (bcx * bcx + bcy * bcy).sqrt();

        if mag1 == 0.0 || mag2 == 0.0 {
            return Err(degenerate());
        }

        let dot = bax * bcx + bay * bcy;
        // Rounding can push the cosine just past +-1
        let cos = (dot / (mag1 * mag2)).clamp(-1.0, 1.0);

        Ok(cos.acos().to_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_angle_degrees() {
        let deg = ops::points_to_degrees(
            Point::new(500, 175),
            Point::new(400, 175),
            Point::new(400, 250),
        )
        .unwrap();

        assert!((deg - 90.0).abs() < 1e-10);
    }

    #[test]
    fn test_straight_and_acute() {
        let vertex = Point::new(0, 0);

        let straight = ops::points_to_degrees(Point::new(-3, 0), vertex, Point::new(7, 0)).unwrap();
        assert!((straight - 180.0).abs() < 1e-10);

        let acute = ops::points_to_degrees(Point::new(10, 0), vertex, Point::new(10, 10)).unwrap();
        assert!((acute - 45.0).abs() < 1e-10);
    }

    #[test]
    fn test_same_direction_is_zero() {
        let deg = ops::points_to_degrees(Point::new(1, 1), Point::new(0, 0), Point::new(3, 3)).unwrap();
        assert!(deg.abs() < 1e-6);
        assert!(!deg.is_nan());
    }

    #[test]
    fn test_zero_length_ray_is_degenerate() {
        let vertex = Point::new(5, 5);
        let err = ops::points_to_degrees(vertex, vertex, Point::new(6, 5)).unwrap_err();

        assert!(matches!(err, NetworkError::DegenerateAngle { .. }));
    }

    #[test]
    fn test_coincident_neighbors_are_degenerate() {
        let a = Point::new(1, 0);
        let err = ops::points_to_degrees(a, Point::new(0, 0), a).unwrap_err();

        assert_eq!(
            err,
            NetworkError::DegenerateAngle { a, vertex: Point::new(0, 0), c: a }
        );
    }

    #[test]
    fn test_extreme_coordinates() {
        let vertex = Point::new(i64::MIN, 0);

        assert_eq!(vertex.to(&Point::new(i64::MAX, 0)), (u64::MAX as f64, 0.0));

        let narrow = ops::points_to_degrees(
            Point::new(i64::MAX, 0),
            vertex,
            Point::new(i64::MAX, 1),
        )
        .unwrap();
        assert!(narrow < 1.0, "{narrow}");

        let straight = ops::points_to_degrees(
            Point::new(i64::MIN, 0),
            Point::new(0, 0),
            Point::new(i64::MAX, 0),
        )
        .unwrap();
        assert!((straight - 180.0).abs() < 1e-9);

        let right = ops::points_to_degrees(
            Point::new(i64::MAX, i64::MIN),
            Point::new(i64::MIN, i64::MIN),
            Point::new(i64::MIN, i64::MAX),
        )
        .unwrap();
        assert!((right - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_color_binarization() {
        assert!(!Color::BLACK.is_high());
        assert!(Color::ORANGE.is_high());
        assert!(Color(1, 0, 0).is_high());
        assert_eq!(Color::default(), Color::BLACK);
        assert_eq!(Color::BLACK.toggled(), Color::ORANGE);
        assert_eq!(Color(9, 9, 9).toggled(), Color::BLACK);
    }

    #[test]
    fn test_edge_orientation() {
        let p = Point::new(0, 0);
        let q = Point::new(0, 25);

        assert!(Edge::new(p, q).same_as(&Edge::new(q, p)));
        assert!(!Edge::new(p, q).same_as(&Edge::new(p, p)));
        assert!(Edge::new(p, p).is_loop());
    }

    #[test]
    fn test_point_json_shape() {
        let edge = Edge::new(Point::new(400, 175), Point::new(500, 175));
        let json = serde_json::to_string(&edge).unwrap();

        assert_eq!(json, "[[400,175],[500,175]]");
        assert_eq!(serde_json::from_str::<Edge>(&json).unwrap(), edge);
    }
}
