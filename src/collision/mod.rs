//! Collision queries: overlap testing and penetration-vector resolution
//! for pairs of convex 2D shapes.
//!
//! Narrow-phase detection is GJK (`gjk`), refined into a penetration
//! vector by EPA (`epa`) when GJK finds a full 3-vertex witness simplex.
//! An optional bounding-radius rejection (this module) short-circuits
//! clearly-disjoint shapes before either algorithm runs.

pub(crate) mod epa;
pub(crate) mod geometry;
pub(crate) mod gjk;
pub(crate) mod support;

use gjk::{gjk, GjkOutcome};

use crate::config::CollisionConfig;
use crate::shape::Shape;
use crate::vector::{Vector, VectorExt};

/// Returns `true` if `a` and `b` overlap, using the default
/// [`CollisionConfig`].
pub fn overlaps(a: &Shape, b: &Shape) -> bool {
    overlaps_with_config(a, b, &CollisionConfig::default())
}

/// Returns `true` if `a` and `b` overlap.
///
/// Cheaply rejects shapes whose bounding disks do not intersect before
/// running GJK; this is a performance optimization only and never changes
/// the verdict GJK itself would produce.
pub fn overlaps_with_config(a: &Shape, b: &Shape, config: &CollisionConfig) -> bool {
    if bounding_disks_disjoint(a, b) {
        return false;
    }
    let eps = config.derive_eps(a.bounding_radius(), b.bounding_radius());
    matches!(
        gjk(a, b, eps, config.gjk_max_iter),
        GjkOutcome::Overlap(_)
    )
}

/// Computes the minimum translation vector `v` such that moving `a`'s
/// position by `-v` just separates it from `b`, using the default
/// [`CollisionConfig`]. Returns `(0, 0)` iff `a` and `b` do not overlap.
pub fn penetration(a: &Shape, b: &Shape) -> Vector {
    penetration_with_config(a, b, &CollisionConfig::default())
}

/// As [`penetration`], with an explicit [`CollisionConfig`].
pub fn penetration_with_config(a: &Shape, b: &Shape, config: &CollisionConfig) -> Vector {
    if bounding_disks_disjoint(a, b) {
        return Vector::new(0.0, 0.0);
    }

    let eps = config.derive_eps(a.bounding_radius(), b.bounding_radius());
    match gjk(a, b, eps, config.gjk_max_iter) {
        GjkOutcome::NoOverlap => Vector::new(0.0, 0.0),
        GjkOutcome::Overlap(simplex) => {
            epa::penetration_vector(&simplex, a, b, eps, config.epa_max_iter)
        }
    }
}

/// `true` iff the circumscribing disks of `a` and `b` cannot possibly
/// overlap, i.e. the centers are farther apart than the sum of the
/// bounding radii. A sound true-negative short-circuit: it never flags an
/// overlapping pair as disjoint.
fn bounding_disks_disjoint(a: &Shape, b: &Shape) -> bool {
    let center_distance = a.pos().distance_to(&b.pos());
    center_distance > a.bounding_radius() + b.bounding_radius()
}
