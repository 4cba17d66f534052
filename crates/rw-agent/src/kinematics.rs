//! Position and odometry.

use rw_core::{Point, bearing, distance};

/// A point body in the plane with two odometers.
///
/// * `distance_traveled`: lifetime odometer, never decreases.
/// * `trip_distance`: increases with every move and is zeroed only by
///   [`reset_trip_odometer`][Self::reset_trip_odometer].
///
/// There is no way to write the position or either odometer directly.
#[derive(Clone, Debug, PartialEq)]
pub struct Kinematics {
    position:          Point,
    distance_traveled: f64,
    trip_distance:     f64,
}

impl Kinematics {
    pub fn new(start: Point) -> Self {
        Self { position: start, distance_traveled: 0.0, trip_distance: 0.0 }
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn distance_traveled(&self) -> f64 {
        self.distance_traveled
    }

    #[inline]
    pub fn trip_distance(&self) -> f64 {
        self.trip_distance
    }

    /// Move to `p`, crediting both odometers with the straight-line distance.
    pub fn move_to(&mut self, p: Point) {
        let d = distance(self.position, p);
        self.credit(d);
        self.position = p;
    }

    /// Move by the displacement `(dx, dy)`.
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.move_to(self.position.offset(dx, dy));
    }

    /// Move by the polar displacement `(theta, r)`.
    ///
    /// The odometers are credited with exactly `|r|` rather than the distance
    /// recomputed from the new coordinates.  A negative `r` moves backwards
    /// along `theta`.
    pub fn move_polar(&mut self, theta: f64, r: f64) {
        self.credit(r.abs());
        self.position = self.position.offset_polar(theta, r);
    }

    pub fn reset_trip_odometer(&mut self) {
        self.trip_distance = 0.0;
    }

    /// Distance from the current position to `p`.
    #[inline]
    pub fn distance_from(&self, p: Point) -> f64 {
        distance(self.position, p)
    }

    /// Polar vector `(theta, r)` from the current position to `p`, with
    /// `theta` in `(-π, π]`.
    pub fn vector_to(&self, p: Point) -> (f64, f64) {
        (bearing(self.position, p), self.distance_from(p))
    }

    fn credit(&mut self, d: f64) {
        self.distance_traveled += d;
        self.trip_distance += d;
    }
}
