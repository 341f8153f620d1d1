//! Small line-distance helpers shared between the GJK and EPA descents.

use crate::vector::{Vector, VectorExt};

/// Unsigned perpendicular distance from the origin to the infinite line
/// through `p` and `q`. Falls back to `‖p‖` if `p == q` (a degenerate,
/// zero-length edge).
pub(crate) fn line_distance_to_origin(p: Vector, q: Vector) -> f64 {
    let edge = q - p;
    let len = edge.norm();
    if len == 0.0 {
        return p.norm();
    }
    (edge.x * (-p).y - edge.y * (-p).x).abs() / len
}

/// Projects the origin onto the infinite line through `p` and `q`,
/// returning the foot of the perpendicular.
pub(crate) fn foot_of_perpendicular(p: Vector, q: Vector) -> Vector {
    let u = (q - p).normalized_or_zero();
    let t = u.dot(&(-p));
    p + u * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_to_horizontal_line() {
        let p = Vector::new(-1.0, 2.0);
        let q = Vector::new(1.0, 2.0);
        assert_relative_eq!(line_distance_to_origin(p, q), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn foot_of_perpendicular_on_horizontal_line() {
        let p = Vector::new(-1.0, 2.0);
        let q = Vector::new(1.0, 2.0);
        let f = foot_of_perpendicular(p, q);
        assert_relative_eq!(f.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(f.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_edge_falls_back_to_point_norm() {
        let p = Vector::new(3.0, 4.0);
        assert_relative_eq!(line_distance_to_origin(p, p), 5.0, epsilon = 1e-12);
    }
}
