//! Gilbert–Johnson–Keerthi (GJK) descent: builds and refines a 1-, 2-, or
//! 3-point simplex in Minkowski-difference space until it either contains
//! the origin or proves no simplex can.
//!
//! The central robustness trick (see the crate's design notes) is that
//! "origin lies on a simplex edge" is decided with a tolerance `eps` — a
//! thin strip of half-width `eps` — rather than an exact zero test. Every
//! side-of-line predicate in this module threads the same `eps` through,
//! or the descent can cycle on degenerate input.

use tracing::{trace, warn};

use super::geometry::line_distance_to_origin;
use super::support::minkowski_support;
use crate::shape::Shape;
use crate::vector::{Vector, VectorExt};

/// Outcome of a full GJK descent.
#[derive(Debug, Clone)]
pub(crate) enum GjkOutcome {
    /// The Minkowski difference does not contain the origin.
    NoOverlap,
    /// The Minkowski difference contains the origin; carries the simplex
    /// that witnesses it (1, 2, or 3 distinct vertices).
    Overlap(Vec<Vector>),
}

/// Outcome of refining a 2- or 3-point simplex by one step.
enum RefineOutcome {
    /// The origin lies inside (or within `eps` of an edge of) the
    /// simplex: GJK can stop.
    Inside,
    /// The simplex and search direction to use for the next iteration.
    Updated {
        simplex: Vec<Vector>,
        direction: Vector,
    },
}

/// Runs the GJK descent for the Minkowski difference of `a` and `b`.
pub(crate) fn gjk(a: &Shape, b: &Shape, eps: f64, max_iter: usize) -> GjkOutcome {
    let seed = (b.pos() - a.pos()).right_normal();
    let direction0 = if seed == Vector::new(0.0, 0.0) {
        Vector::new(1.0, 0.0)
    } else {
        seed
    };

    let s0 = minkowski_support(a, b, direction0);
    let mut simplex = vec![s0];
    let mut direction = (-s0).normalized_or_zero();

    if direction == Vector::new(0.0, 0.0) {
        // The origin coincides exactly with the first support point: no
        // well-defined direction remains, so the degeneracy guard in
        // §4.3 applies and this is treated as overlap.
        trace!("GJK: origin on initial support point, treating as overlap");
        return GjkOutcome::Overlap(simplex);
    }

    for _ in 0..max_iter {
        let s = minkowski_support(a, b, direction);

        if s.dot(&direction) <= eps {
            return GjkOutcome::NoOverlap;
        }

        if simplex.iter().any(|v| (v - s).norm() <= eps) {
            // Progress has stalled: the new support duplicates an
            // existing vertex, which in exact arithmetic means the
            // origin is outside the Minkowski set.
            return GjkOutcome::NoOverlap;
        }

        simplex.push(s);

        let outcome = match simplex.len() {
            2 => refine_line(simplex[0], simplex[1], eps),
            3 => refine_triangle(simplex[0], simplex[1], simplex[2], eps),
            _ => unreachable!("GJK simplex never grows past 3 vertices"),
        };

        match outcome {
            RefineOutcome::Inside => return GjkOutcome::Overlap(simplex),
            RefineOutcome::Updated {
                simplex: new_simplex,
                direction: new_direction,
            } => {
                simplex = new_simplex;
                direction = new_direction;
            }
        }
    }

    warn!(
        max_iter,
        "GJK hit its iteration cap; reporting no overlap as a conservative fallback"
    );
    GjkOutcome::NoOverlap
}

/// Refines a 2-point simplex `[p0, p1]` (order is immaterial; both vertex
/// regions are tested symmetrically).
fn refine_line(p0: Vector, p1: Vector, eps: f64) -> RefineOutcome {
    let to_p1 = p1 - p0;
    let to_origin_from_p0 = -p0;
    if to_p1.dot(&to_origin_from_p0) < 0.0 {
        // Origin is nearest vertex p0.
        let direction = to_origin_from_p0.normalized_or_zero();
        if direction == Vector::new(0.0, 0.0) {
            return RefineOutcome::Inside;
        }
        return RefineOutcome::Updated {
            simplex: vec![p0],
            direction,
        };
    }

    let to_p0 = p0 - p1;
    let to_origin_from_p1 = -p1;
    if to_p0.dot(&to_origin_from_p1) < 0.0 {
        // Origin is nearest vertex p1.
        let direction = to_origin_from_p1.normalized_or_zero();
        if direction == Vector::new(0.0, 0.0) {
            return RefineOutcome::Inside;
        }
        return RefineOutcome::Updated {
            simplex: vec![p1],
            direction,
        };
    }

    // Origin projects between p0 and p1 (both dot products are >= 0).
    let edge = p1 - p0;
    let distance = line_distance_to_origin(p0, p1);
    if distance.abs() <= eps {
        return RefineOutcome::Inside;
    }

    let direction = edge.normal_in_direction(&to_origin_from_p0);
    if direction == Vector::new(0.0, 0.0) {
        return RefineOutcome::Inside;
    }
    RefineOutcome::Updated {
        simplex: vec![p0, p1],
        direction,
    }
}

/// Refines a 3-point simplex `[a, b, c]`.
fn refine_triangle(a: Vector, b: Vector, c: Vector, eps: f64) -> RefineOutcome {
    let n_ab = outward_normal(a, b, c);
    let n_bc = outward_normal(b, c, a);
    let n_ca = outward_normal(c, a, b);

    if n_ab.dot(&(-a)) > 0.0 {
        return refine_line(a, b, eps);
    }
    if n_bc.dot(&(-b)) > 0.0 {
        return refine_line(b, c, eps);
    }
    if n_ca.dot(&(-c)) > 0.0 {
        return refine_line(c, a, eps);
    }

    RefineOutcome::Inside
}

/// The perpendicular that points away from `third`, for the edge `p -> q`.
fn outward_normal(p: Vector, q: Vector, third: Vector) -> Vector {
    let edge = q - p;
    let n = edge.right_normal();
    if n.dot(&(third - p)) > 0.0 {
        -n
    } else {
        n
    }
}
