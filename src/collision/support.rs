//! Support function and Minkowski-difference support.

use crate::shape::Shape;
use crate::vector::{Vector, VectorExt};

/// Returns the shape's farthest point in world space along `direction`.
///
/// For a polygon this rotates each local corner by the shape's angle and
/// picks the argmax of the inner product with `direction`, breaking ties
/// arbitrarily (first-seen wins). For a disk it returns
/// `pos + radius * direction_normalized`; if `direction` is the zero
/// vector the behavior is caller-dependent and this returns
/// `pos + (radius, 0)`.
pub fn support(shape: &Shape, direction: Vector) -> Vector {
    match shape {
        Shape::Disk(disk) => {
            let dir_hat = direction.normalized_or_zero();
            if dir_hat == Vector::new(0.0, 0.0) {
                disk.pos + Vector::new(disk.radius, 0.0)
            } else {
                disk.pos + dir_hat * disk.radius
            }
        }
        Shape::Polygon(_) => {
            let rotated = shape
                .rotated_corners()
                .expect("polygon shape always yields rotated corners");
            let mut best = rotated[0];
            let mut best_dot = best.dot(&direction);
            for &corner in rotated.iter().skip(1) {
                let dot = corner.dot(&direction);
                if dot > best_dot {
                    best_dot = dot;
                    best = corner;
                }
            }
            shape.pos() + best
        }
    }
}

/// Returns `support(a, d) - support(b, -d)`, the support of the
/// Minkowski difference `A - B` in direction `d`.
pub fn minkowski_support(a: &Shape, b: &Shape, direction: Vector) -> Vector {
    support(a, direction) - support(b, -direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{make_disk, try_make_polygon};
    use approx::assert_relative_eq;

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
    fn polygon_support_is_argmax_corner() {
        let shape = try_make_polygon(square(2.0), Vector::new(0.0, 0.0), 0.0).unwrap();
        let s = support(&shape, Vector::new(1.0, 0.0));
        assert_relative_eq!(s.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn polygon_support_translates_with_pos() {
        let shape = try_make_polygon(square(2.0), Vector::new(5.0, 5.0), 0.0).unwrap();
        let s = support(&shape, Vector::new(1.0, 0.0));
        assert_relative_eq!(s.x, 6.0, epsilon = 1e-12);
        assert_relative_eq!(s.y, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn disk_support_is_center_plus_radius_times_direction() {
        let shape = make_disk(2.0, Vector::new(0.0, 0.0), 0.0);
        let s = support(&shape, Vector::new(0.0, 1.0));
        assert_relative_eq!(s.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(s.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn disk_support_zero_direction_falls_back_to_positive_x() {
        let shape = make_disk(1.0, Vector::new(0.0, 0.0), 0.0);
        let s = support(&shape, Vector::new(0.0, 0.0));
        assert_relative_eq!(s.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(s.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn minkowski_support_matches_definition() {
        let a = make_disk(1.0, Vector::new(0.0, 0.0), 0.0);
        let b = make_disk(1.0, Vector::new(3.0, 0.0), 0.0);
        let d = Vector::new(1.0, 0.0);
        let s = minkowski_support(&a, &b, d);
        let expected = support(&a, d) - support(&b, -d);
        assert_relative_eq!(s.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(s.y, expected.y, epsilon = 1e-12);
    }
}
