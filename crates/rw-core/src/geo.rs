//! Planar geometry: points, distances and bearings.
//!
//! Everything here is a total function over finite inputs.  Angles are in
//! radians, measured counter-clockwise from the positive x axis.

use std::f64::consts::TAU;
use std::fmt;
use std::ops::{Add, Sub};

/// A point (or displacement) in the Euclidean plane.
#[derive(Copy, Clone, Debug, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        distance(self, other)
    }

    /// Raw bearing from `self` to `other`, in `(-π, π]`.
    #[inline]
    pub fn bearing(self, other: Point) -> f64 {
        bearing(self, other)
    }

    /// `self` translated by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// `self` translated by the polar vector `(theta, r)`.
    #[inline]
    pub fn offset_polar(self, theta: f64, r: f64) -> Point {
        self.offset(theta.cos() * r, theta.sin() * r)
    }

    /// `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        self.offset(rhs.x, rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

/// `sqrt((a.x-b.x)² + (a.y-b.y)²)`.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// `atan2(b.y - a.y, b.x - a.x)`, in `(-π, π]`.
#[inline]
pub fn bearing(a: Point, b: Point) -> f64 {
    (b.y - a.y).atan2(b.x - a.x)
}

/// Fold an angle from `(-π, π]` into `[0, 2π)`.
///
/// A tiny negative input can round to exactly `2π` after the fold; that case
/// maps to `0` so the half-open range holds.
#[inline]
pub fn normalize_azimuth(theta: f64) -> f64 {
    let folded = if theta < 0.0 { theta + TAU } else { theta };
    if folded >= TAU { 0.0 } else { folded }
}
