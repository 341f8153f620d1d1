//! Error types for shape construction.
//!
//! Follows the category-tagged `thiserror` style used across the AccuScene
//! crates (see `accuscene-core::error::AccuSceneError`): a single enum,
//! one variant per failure mode, with a `category()` accessor for
//! telemetry rather than free-form strings.

use thiserror::Error;

/// Result type alias for polygon construction.
pub type Result<T> = std::result::Result<T, ShapeError>;

/// Reasons `try_make_polygon` can reject a corner sequence.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Fewer than three corners were supplied.
    #[error("polygon needs at least 3 corners, got {count}")]
    TooFewCorners {
        /// Number of corners actually supplied.
        count: usize,
    },

    /// Two corners coincide.
    #[error("corners {first} and {second} coincide")]
    DuplicateCorner {
        /// Index of the first of the coinciding pair.
        first: usize,
        /// Index of the second of the coinciding pair.
        second: usize,
    },

    /// Three corners are collinear.
    #[error("corners {a}, {b}, {c} are collinear")]
    CollinearCorners {
        /// Index of the first collinear corner.
        a: usize,
        /// Index of the second collinear corner.
        b: usize,
        /// Index of the third collinear corner.
        c: usize,
    },

    /// The corner sequence does not wind a convex hull of the same size as
    /// the input (i.e. some corner lies outside the hull, or the winding
    /// is inconsistent).
    #[error("corner sequence is not a convex winding")]
    NonConvexWinding,
}

impl ShapeError {
    /// Returns a short category tag, for telemetry.
    pub fn category(&self) -> &'static str {
        match self {
            Self::TooFewCorners { .. } => "too_few_corners",
            Self::DuplicateCorner { .. } => "duplicate_corner",
            Self::CollinearCorners { .. } => "collinear_corners",
            Self::NonConvexWinding => "non_convex_winding",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_matches_variant() {
        let err = ShapeError::TooFewCorners { count: 2 };
        assert_eq!(err.category(), "too_few_corners");
        assert!(err.to_string().contains("2"));
    }
}
