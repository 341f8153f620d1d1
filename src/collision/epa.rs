//! Expanding Polytope Algorithm (EPA): given a 3-vertex simplex that
//! contains the origin in Minkowski-difference space, refines it outward
//! toward the true Minkowski boundary and returns the minimum translation
//! vector (plus a small outward margin `eps`) needed to separate the two
//! shapes.

use tracing::{trace, warn};

use super::geometry::{foot_of_perpendicular, line_distance_to_origin};
use super::support::minkowski_support;
use crate::shape::Shape;
use crate::vector::{Vector, VectorExt};

/// Computes the penetration vector given the simplex GJK found to contain
/// the origin. Handles the degenerate shortcut for a 1- or 2-vertex
/// simplex itself, so callers only ever need the GJK result.
pub(crate) fn penetration_vector(
    simplex: &[Vector],
    a: &Shape,
    b: &Shape,
    eps: f64,
    max_iter: usize,
) -> Vector {
    if simplex.len() < 3 {
        return shallow_overlap_nudge(a, b, eps);
    }

    let mut polygon = wind_ccw([simplex[0], simplex[1], simplex[2]]);

    for _ in 0..max_iter {
        let edge_index = closest_edge_index(&polygon);
        let p = polygon[edge_index];
        let q = polygon[(edge_index + 1) % polygon.len()];
        let normal = (q - p).right_normal();

        let w = minkowski_support(a, b, normal);

        if polygon.iter().any(|v| (v - w).norm() <= eps) {
            trace!("EPA converged on edge {}", edge_index);
            return resolve_edge(p, q, eps);
        }

        polygon.insert(edge_index + 1, w);
    }

    warn!(
        max_iter,
        "EPA hit its iteration cap; returning the best edge found so far"
    );
    let edge_index = closest_edge_index(&polygon);
    resolve_edge(
        polygon[edge_index],
        polygon[(edge_index + 1) % polygon.len()],
        eps,
    )
}

/// The degenerate-simplex fallback: a shallow overlap (origin exactly on a
/// support point or edge) has no well-defined separating direction, so a
/// short nudge along `B.pos - A.pos` is returned instead of running EPA.
fn shallow_overlap_nudge(a: &Shape, b: &Shape, eps: f64) -> Vector {
    let delta = b.pos() - a.pos();
    let direction = delta.normalized_or_zero();
    if direction == Vector::new(0.0, 0.0) {
        Vector::new(eps, 0.0)
    } else {
        direction * eps
    }
}

/// Orders the three simplex vertices counter-clockwise, so that the
/// outward normal of directed edge `p_i -> p_{i+1}` is `right_normal(p_{i+1} - p_i)`.
fn wind_ccw(triangle: [Vector; 3]) -> Vec<Vector> {
    let [a, b, c] = triangle;
    let signed_area = (b - a).x * (c - a).y - (b - a).y * (c - a).x;
    if signed_area >= 0.0 {
        vec![a, b, c]
    } else {
        vec![a, c, b]
    }
}

/// Index of the edge of `polygon` whose infinite line is closest to the
/// origin, ties broken by lowest index.
fn closest_edge_index(polygon: &[Vector]) -> usize {
    let mut best_index = 0;
    let mut best_distance = f64::INFINITY;
    for i in 0..polygon.len() {
        let p = polygon[i];
        let q = polygon[(i + 1) % polygon.len()];
        let distance = line_distance_to_origin(p, q);
        if distance < best_distance {
            best_distance = distance;
            best_index = i;
        }
    }
    best_index
}

/// Computes the final penetration vector for the converged (or best-effort)
/// edge `p -> q`: the foot of the perpendicular from the origin, scaled
/// out to unit length and extended by `eps`.
fn resolve_edge(p: Vector, q: Vector, eps: f64) -> Vector {
    let foot = foot_of_perpendicular(p, q);
    let magnitude = foot.norm() + eps;
    let direction = foot.normalized_or_zero();
    let direction = if direction == Vector::new(0.0, 0.0) {
        // The origin lies exactly on the line through p and q: fall back
        // to the edge's outward normal, since the foot itself gives no
        // direction.
        (q - p).right_normal()
    } else {
        direction
    };
    direction * magnitude
}
