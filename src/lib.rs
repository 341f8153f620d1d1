//! AccuScene Collision2D - 2D Convex Shape Collision Library
//!
//! This crate answers two questions about pairs of convex 2D shapes
//! (disks and polygons) positioned and rotated in the plane:
//!
//! - **Overlap**: do shape `A` and shape `B` currently intersect?
//! - **Penetration**: if they overlap, what is the minimum translation
//!   vector that moves `A` just clear of `B`?
//!
//! It is built around two classic narrow-phase algorithms:
//!
//! - **GJK** (Gilbert–Johnson–Keerthi): builds and refines a simplex in
//!   Minkowski-difference space to decide origin-containment.
//! - **EPA** (Expanding Polytope Algorithm): given a simplex GJK found to
//!   contain the origin, expands it outward to compute the penetration
//!   vector.
//!
//! Both descents treat "origin lies on a simplex edge" as a thin strip of
//! nonzero width (derived from shape scale, see [`CollisionConfig`])
//! rather than an exact zero test, which is what keeps them from cycling
//! on degenerate input.
//!
//! # Examples
//!
//! ## Basic overlap and penetration query
//!
//! ```no_run
//! use accuscene_collision2d::{make_disk, overlaps, penetration, Vector};
//!
//! let a = make_disk(1.0, Vector::new(0.0, 0.0), 0.0);
//! let b = make_disk(1.0, Vector::new(1.5, 0.0), 0.0);
//!
//! if overlaps(&a, &b) {
//!     let v = penetration(&a, &b);
//!     println!("separate A by moving it by {:?}", -v);
//! }
//! ```
//!
//! ## Building a convex polygon
//!
//! ```no_run
//! use accuscene_collision2d::{try_make_polygon, Vector};
//!
//! let corners = vec![
//!     Vector::new(-0.5, -0.5),
//!     Vector::new(0.5, -0.5),
//!     Vector::new(0.5, 0.5),
//!     Vector::new(-0.5, 0.5),
//! ];
//!
//! let square = try_make_polygon(corners, Vector::new(0.0, 0.0), 0.0)
//!     .expect("square corners are a valid convex winding");
//! ```

// Re-export core dependencies for convenience, following the teacher
// crate's pattern of re-exporting its math/serialization stack.
pub use nalgebra;
pub use serde;

mod collision;
mod config;
mod error;
mod shape;
mod vector;

pub use collision::{
    overlaps, overlaps_with_config, penetration, penetration_with_config,
};

pub use config::{
    CollisionConfig, DEFAULT_EPA_MAX_ITER, DEFAULT_EPS_FLOOR, DEFAULT_EPS_SCALE,
    DEFAULT_GJK_MAX_ITER,
};

pub use error::{Result, ShapeError};

pub use shape::{make_disk, try_make_polygon, Disk, Polygon, Shape};

pub use vector::{Vector, VectorExt};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Returns version information.
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}
