//! The shape model: disks and convex polygons positioned and rotated in
//! the plane.

use std::fmt;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::config::CollisionConfig;
use crate::error::{Result, ShapeError};
use crate::vector::{Vector, VectorExt};

/// A disk (circle) positioned in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Disk {
    /// Radius; must be strictly positive.
    pub radius: f64,
    /// World-space center.
    pub pos: Vector,
    /// Rotation angle in radians. Stored for API symmetry with `Polygon`
    /// but has no effect on a disk's geometry.
    pub angle: f64,
}

/// A convex polygon, given as corners relative to its own local origin,
/// plus a world position and rotation.
#[derive(Serialize, Deserialize)]
pub struct Polygon {
    /// Corners relative to the polygon's local origin, in winding order.
    pub corners: Vec<Vector>,
    /// World-space position of the local origin.
    pub pos: Vector,
    /// Rotation angle in radians, positive clockwise.
    pub angle: f64,
    /// `max(‖c‖ for c in corners)`, the circumscribing-disk radius.
    pub bounding_radius: f64,
    /// Lazily computed `(angle, rotated corners)` cache, recomputed
    /// whenever `angle` no longer matches the cached value. Not part of
    /// the type's logical equality or its serialized form.
    #[serde(skip)]
    rotated_cache: Mutex<Option<(f64, Vec<Vector>)>>,
}

impl Clone for Polygon {
    fn clone(&self) -> Self {
        // A clone duplicates the corner sequence; it never shares the
        // cache with its source.
        Self {
            corners: self.corners.clone(),
            pos: self.pos,
            angle: self.angle,
            bounding_radius: self.bounding_radius,
            rotated_cache: Mutex::new(None),
        }
    }
}

impl fmt::Debug for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polygon")
            .field("corners", &self.corners)
            .field("pos", &self.pos)
            .field("angle", &self.angle)
            .field("bounding_radius", &self.bounding_radius)
            .finish()
    }
}

/// A convex shape: either a disk or a convex polygon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    Disk(Disk),
    Polygon(Polygon),
}

impl Shape {
    /// World-space position of the shape's local origin.
    pub fn pos(&self) -> Vector {
        match self {
            Shape::Disk(d) => d.pos,
            Shape::Polygon(p) => p.pos,
        }
    }

    /// Rotation angle, in radians.
    pub fn angle(&self) -> f64 {
        match self {
            Shape::Disk(d) => d.angle,
            Shape::Polygon(p) => p.angle,
        }
    }

    /// The circumscribing-disk radius: `radius` for a disk, the derived
    /// `bounding_radius` for a polygon.
    pub fn bounding_radius(&self) -> f64 {
        match self {
            Shape::Disk(d) => d.radius,
            Shape::Polygon(p) => p.bounding_radius,
        }
    }

    /// Returns the polygon's corners rotated by its current angle, in
    /// world orientation but *not* translated by `pos`. Returns `None`
    /// for a disk.
    pub(crate) fn rotated_corners(&self) -> Option<Vec<Vector>> {
        match self {
            Shape::Disk(_) => None,
            Shape::Polygon(p) => Some(p.rotated_corners()),
        }
    }
}

impl Polygon {
    /// Returns this polygon's corners rotated by its current angle,
    /// refreshing the cache if `angle` has changed since it was last
    /// computed.
    fn rotated_corners(&self) -> Vec<Vector> {
        let mut cache = self.rotated_cache.lock();
        if let Some((cached_angle, rotated)) = cache.as_ref() {
            if *cached_angle == self.angle {
                return rotated.clone();
            }
        }
        let rotated: Vec<Vector> = self.corners.iter().map(|c| c.rotated(self.angle)).collect();
        *cache = Some((self.angle, rotated.clone()));
        rotated
    }
}

/// Creates a disk shape. Never fails for a positive radius; callers must
/// not pass a non-positive radius (see the crate's error-handling policy
/// on invalid input at query time).
pub fn make_disk(radius: f64, pos: Vector, angle: f64) -> Shape {
    Shape::Disk(Disk { radius, pos, angle })
}

/// Attempts to construct a convex polygon from an ordered sequence of
/// corners relative to its local origin.
///
/// Fails if there are fewer than three corners, any two corners coincide,
/// any three corners are collinear, or the sequence does not wind a
/// convex hull of the same length as the input.
pub fn try_make_polygon(corners: Vec<Vector>, pos: Vector, angle: f64) -> Result<Shape> {
    if corners.len() < 3 {
        return Err(ShapeError::TooFewCorners {
            count: corners.len(),
        });
    }

    for i in 0..corners.len() {
        for j in (i + 1)..corners.len() {
            if corners[i] == corners[j] {
                return Err(ShapeError::DuplicateCorner { first: i, second: j });
            }
        }
    }

    let bounding_radius = corners
        .iter()
        .map(|c| c.norm())
        .fold(0.0_f64, f64::max);
    let collinearity_tolerance = collinearity_tolerance(bounding_radius);

    for i in 0..corners.len() {
        for j in (i + 1)..corners.len() {
            for k in (j + 1)..corners.len() {
                if is_collinear(corners[i], corners[j], corners[k], collinearity_tolerance) {
                    return Err(ShapeError::CollinearCorners { a: i, b: j, c: k });
                }
            }
        }
    }

    if convex_hull_len(&corners) != corners.len() {
        return Err(ShapeError::NonConvexWinding);
    }

    Ok(Shape::Polygon(Polygon {
        corners,
        pos,
        angle,
        bounding_radius,
        rotated_cache: Mutex::new(None),
    }))
}

/// The area-scale tolerance below which a triple's cross product is treated
/// as zero (collinear). Threads the same `eps_floor`/`eps_scale` model the
/// GJK/EPA descents use for their line-thickness `EPS`, rather than a bare
/// literal: `derive_eps` gives a length-scale tolerance for the corner set,
/// which is then scaled by the corner magnitude itself so the comparison
/// has the same units as the cross product (length²). Without this, a
/// polygon whose corners sit at coordinates far from the origin can have
/// genuinely collinear triples whose cross product is pushed well above a
/// fixed-size threshold by ordinary floating-point rounding in the corner
/// subtractions.
fn collinearity_tolerance(bounding_radius: f64) -> f64 {
    let scale = bounding_radius.max(1.0);
    CollisionConfig::default().derive_eps(bounding_radius, bounding_radius) * scale
}

fn is_collinear(a: Vector, b: Vector, c: Vector, tolerance: f64) -> bool {
    let ab = b - a;
    let ac = c - a;
    // Cross product of two collinear 2D vectors is exactly/near zero.
    (ab.x * ac.y - ab.y * ac.x).abs() < tolerance
}

/// Gift-wrapping (Jarvis march) convex hull, used purely to check that the
/// input corner sequence already winds a convex hull: if the hull's length
/// equals the input length, every corner is a hull vertex and the input is
/// convex.
fn convex_hull_len(points: &[Vector]) -> usize {
    if points.len() < 3 {
        return points.len();
    }

    let mut start = 0;
    for i in 1..points.len() {
        let p = points[i];
        let best = points[start];
        if (p.x, p.y) < (best.x, best.y) {
            start = i;
        }
    }

    let mut hull = Vec::new();
    let mut current = start;
    loop {
        hull.push(current);
        let mut candidate = (current + 1) % points.len();
        for i in 0..points.len() {
            if i == current {
                continue;
            }
            let cross = cross2(points[current], points[candidate], points[i]);
            if cross < 0.0 {
                candidate = i;
            }
        }
        current = candidate;
        if current == start {
            break;
        }
        if hull.len() > points.len() {
            // Defensive bound: a well-formed point set can never produce a
            // hull longer than the input.
            break;
        }
    }
    hull.len()
}

/// Cross product of `(b - a)` and `(c - a)`; positive when `a, b, c` turn
/// counterclockwise.
fn cross2(a: Vector, b: Vector, c: Vector) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(side: f64) -> Vec<Vector> {
        let h = side / 2.0;
        vec![
            Vector::new(-h, -h),
            Vector::new(h, -h),
            Vector::new(h, h),
            Vector::new(-h, h),
        ]
    }

    #[test]
    fn disk_never_fails() {
        let shape = make_disk(1.0, Vector::new(0.0, 0.0), 0.0);
        assert_eq!(shape.bounding_radius(), 1.0);
    }

    #[test]
    fn polygon_rejects_too_few_corners() {
        let corners = vec![Vector::new(0.0, 0.0), Vector::new(1.0, 0.0)];
        let result = try_make_polygon(corners, Vector::new(0.0, 0.0), 0.0);
        assert_eq!(result.unwrap_err(), ShapeError::TooFewCorners { count: 2 });
    }

    #[test]
    fn polygon_rejects_duplicate_corners() {
        let corners = vec![
            Vector::new(0.0, 0.0),
            Vector::new(1.0, 0.0),
            Vector::new(1.0, 0.0),
            Vector::new(0.0, 1.0),
        ];
        let result = try_make_polygon(corners, Vector::new(0.0, 0.0), 0.0);
        assert!(matches!(
            result.unwrap_err(),
            ShapeError::DuplicateCorner { .. }
        ));
    }

    #[test]
    fn polygon_rejects_collinear_corners() {
        let corners = vec![
            Vector::new(0.0, 0.0),
            Vector::new(1.0, 0.0),
            Vector::new(2.0, 0.0),
            Vector::new(1.0, 1.0),
        ];
        let result = try_make_polygon(corners, Vector::new(0.0, 0.0), 0.0);
        assert!(matches!(
            result.unwrap_err(),
            ShapeError::CollinearCorners { .. }
        ));
    }

    #[test]
    fn polygon_rejects_near_collinear_corners_at_large_scale() {
        // Slope of ~2.5e-10 across a span of 2,000,000 units: collinear
        // for any practical purpose, but the raw cross product (500) is
        // many orders of magnitude above a fixed 1e-12 literal threshold.
        // A scale-blind tolerance would wrongly accept this triple.
        let corners = vec![
            Vector::new(0.0, 0.0),
            Vector::new(1_000_000.0, 0.0),
            Vector::new(2_000_000.0, 0.0005),
        ];
        let result = try_make_polygon(corners, Vector::new(0.0, 0.0), 0.0);
        assert!(matches!(
            result.unwrap_err(),
            ShapeError::CollinearCorners { .. }
        ));
    }

    #[test]
    fn polygon_rejects_concave_winding() {
        // A "dart" shape: one corner pokes inward.
        let corners = vec![
            Vector::new(0.0, 0.0),
            Vector::new(2.0, 0.0),
            Vector::new(1.0, 0.5),
            Vector::new(2.0, 2.0),
            Vector::new(0.0, 2.0),
        ];
        let result = try_make_polygon(corners, Vector::new(0.0, 0.0), 0.0);
        assert_eq!(result.unwrap_err(), ShapeError::NonConvexWinding);
    }

    #[test]
    fn polygon_accepts_both_windings() {
        let cw = square(1.0);
        let mut ccw = cw.clone();
        ccw.reverse();

        assert!(try_make_polygon(cw, Vector::new(0.0, 0.0), 0.0).is_ok());
        assert!(try_make_polygon(ccw, Vector::new(0.0, 0.0), 0.0).is_ok());
    }

    #[test]
    fn bounding_radius_is_farthest_corner() {
        // A side-2 square centered at its local origin has corners at
        // distance sqrt(2) from that origin.
        let shape = try_make_polygon(square(2.0), Vector::new(0.0, 0.0), 0.0).unwrap();
        if let Shape::Polygon(p) = shape {
            assert!((p.bounding_radius - (2.0_f64).sqrt()).abs() < 1e-9);
        } else {
            panic!("expected polygon");
        }
    }

    #[test]
    fn rotated_corners_cache_refreshes_on_angle_change() {
        let shape = try_make_polygon(square(1.0), Vector::new(0.0, 0.0), 0.0).unwrap();
        let at_zero = shape.rotated_corners().unwrap();

        if let Shape::Polygon(mut p) = shape {
            p.angle = std::f64::consts::FRAC_PI_2;
            let at_half_pi = Shape::Polygon(p).rotated_corners().unwrap();
            assert_ne!(at_zero, at_half_pi);
        } else {
            panic!("expected polygon");
        }
    }

    #[test]
    fn clone_does_not_share_cache_or_corners() {
        let shape = try_make_polygon(square(1.0), Vector::new(0.0, 0.0), 0.0).unwrap();
        let cloned = shape.clone();
        if let (Shape::Polygon(a), Shape::Polygon(b)) = (shape, cloned) {
            assert_eq!(a.corners, b.corners);
            assert!(!std::ptr::eq(
                a.corners.as_ptr(),
                b.corners.as_ptr()
            ));
        } else {
            panic!("expected polygons");
        }
    }
}
