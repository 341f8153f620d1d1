//! Tunable constants for the GJK/EPA descent, following the `Default` +
//! builder-setter config pattern used by
//! `accuscene_physics::engine::EngineConfig`.

/// Absolute floor for the line-thickness epsilon (`EPS`), regardless of
/// shape scale.
pub const DEFAULT_EPS_FLOOR: f64 = 1e-7;

/// Multiplicative factor applied to `max(bounding_radius)` to scale `EPS`
/// with shape size.
pub const DEFAULT_EPS_SCALE: f64 = 1e-9;

/// Default iteration cap for the GJK descent.
pub const DEFAULT_GJK_MAX_ITER: usize = 64;

/// Default iteration cap for the EPA refinement.
pub const DEFAULT_EPA_MAX_ITER: usize = 64;

/// Tunable constants controlling the numerical behavior of overlap and
/// penetration queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionConfig {
    /// Absolute lower bound on the line-thickness epsilon.
    pub eps_floor: f64,
    /// Scale factor applied to the larger shape's bounding radius when
    /// deriving the line-thickness epsilon.
    pub eps_scale: f64,
    /// Maximum GJK iterations before giving up and reporting no overlap.
    pub gjk_max_iter: usize,
    /// Maximum EPA iterations before returning the best edge found so far.
    pub epa_max_iter: usize,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            eps_floor: DEFAULT_EPS_FLOOR,
            eps_scale: DEFAULT_EPS_SCALE,
            gjk_max_iter: DEFAULT_GJK_MAX_ITER,
            epa_max_iter: DEFAULT_EPA_MAX_ITER,
        }
    }
}

impl CollisionConfig {
    /// Sets the absolute epsilon floor.
    pub fn with_eps_floor(mut self, eps_floor: f64) -> Self {
        self.eps_floor = eps_floor;
        self
    }

    /// Sets the epsilon scale factor.
    pub fn with_eps_scale(mut self, eps_scale: f64) -> Self {
        self.eps_scale = eps_scale;
        self
    }

    /// Sets the GJK iteration cap.
    pub fn with_gjk_max_iter(mut self, gjk_max_iter: usize) -> Self {
        self.gjk_max_iter = gjk_max_iter;
        self
    }

    /// Sets the EPA iteration cap.
    pub fn with_epa_max_iter(mut self, epa_max_iter: usize) -> Self {
        self.epa_max_iter = epa_max_iter;
        self
    }

    /// Derives the query-scoped line-thickness epsilon for a pair of
    /// bounding radii: `max(eps_floor, eps_scale * max(radius_a, radius_b))`.
    pub fn derive_eps(&self, radius_a: f64, radius_b: f64) -> f64 {
        self.eps_floor.max(self.eps_scale * radius_a.max(radius_b))
    }
}
