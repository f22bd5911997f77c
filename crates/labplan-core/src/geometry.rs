//! Canvas-space points and room polygons.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Deref, Mul, Sub};

/// A 2D coordinate in canvas space (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Dot product, treating both points as vectors from the origin.
    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Squared length of the point as a vector.
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Room boundary: an ordered, implicitly closed ring of points.
///
/// Fewer than three points is not an area. Containment checks treat such a
/// polygon as "no room constraint".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon(Vec<Point>);

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Axis-aligned rectangle with its top-left corner at `origin`, listed clockwise.
    pub fn rectangle(origin: Point, width: f64, height: f64) -> Self {
        Self(vec![
            origin,
            origin.translate(width, 0.0),
            origin.translate(width, height),
            origin.translate(0.0, height),
        ])
    }

    /// Iterates `(index, start, end)` for every edge, including the closing
    /// edge from the last point back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (usize, Point, Point)> + '_ {
        let n = self.0.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| (i, self.0[i], self.0[(i + 1) % n]))
    }

    /// Returns the edge at `index` (wrapping to the first point on the last edge).
    pub fn edge(&self, index: usize) -> Option<(Point, Point)> {
        let n = self.0.len();
        if n < 2 || index >= n {
            return None;
        }
        Some((self.0[index], self.0[(index + 1) % n]))
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Polygon {
        Polygon(self.0.iter().map(|p| p.translate(dx, dy)).collect())
    }
}

impl Deref for Polygon {
    type Target = [Point];

    fn deref(&self) -> &[Point] {
        &self.0
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}
