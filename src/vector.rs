//! Two-component double-precision Euclidean vector primitive.
//!
//! The crate represents both points and directions in the plane with
//! `nalgebra::Vector2<f64>`. The operations the rest of the crate relies on
//! (length, distance, normalize-or-zero, perpendiculars, rotation) are not
//! part of `nalgebra`'s own API, so they live here as an extension trait.

use nalgebra::Vector2;

/// A point or direction in the plane.
pub type Vector = Vector2<f64>;

/// Geometry operations used throughout GJK/EPA that `nalgebra::Vector2`
/// does not provide directly.
pub trait VectorExt {
    /// Euclidean distance to `other`.
    fn distance_to(&self, other: &Vector) -> f64;

    /// Returns a unit vector in the same direction, or exactly `(0, 0)` if
    /// `self` is the zero vector.
    fn normalized_or_zero(&self) -> Vector;

    /// The right-hand perpendicular of `self`, i.e. `(y, -x)` normalized.
    /// Returns `(0, 0)` if `self` is the zero vector.
    fn right_normal(&self) -> Vector;

    /// Whichever of `±right_normal()` has a positive inner product with
    /// `d`. Returns `(0, 0)` if `self` is parallel to `d` (inner product
    /// exactly zero) or if `self` is the zero vector.
    fn normal_in_direction(&self, d: &Vector) -> Vector;

    /// Rotates `self` clockwise by `angle` radians. Clockwise-positive is
    /// the convention the rest of the crate assumes and must be preserved.
    fn rotated(&self, angle: f64) -> Vector;
}

impl VectorExt for Vector {
    fn distance_to(&self, other: &Vector) -> f64 {
        (self - other).norm()
    }

    fn normalized_or_zero(&self) -> Vector {
        let len = self.norm();
        if len == 0.0 {
            Vector::new(0.0, 0.0)
        } else {
            self / len
        }
    }

    fn right_normal(&self) -> Vector {
        Vector::new(self.y, -self.x).normalized_or_zero()
    }

    fn normal_in_direction(&self, d: &Vector) -> Vector {
        let n = self.right_normal();
        if n == Vector::new(0.0, 0.0) {
            return n;
        }
        let dot = n.dot(d);
        if dot > 0.0 {
            n
        } else if dot < 0.0 {
            -n
        } else {
            Vector::new(0.0, 0.0)
        }
    }

    fn rotated(&self, angle: f64) -> Vector {
        // Clockwise rotation: standard CCW rotation matrix with the sign
        // of sin flipped.
        let (sin, cos) = angle.sin_cos();
        Vector::new(
            self.x * cos + self.y * sin,
            -self.x * sin + self.y * cos,
        )
    }
}
