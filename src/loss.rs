//! Loss strategies consumed by the solver
//!
//! A loss is a pure function of local quantities: the current dual value of
//! one sample, its margin or residual, and the curvature `sigma` of the
//! sample (squared feature norm scaled by `1 / (lambda * n)`). This is what
//! makes the per-sample update safe to run on any worker.

pub mod classification;
pub mod regression;

pub use classification::{Hinge, Logistic};
pub use regression::{Absolute, Squared};

/// A classification loss evaluated on the signed margin `y * (w.x + b)`.
///
/// The dual value `q` is the label-signed dual of the sample and lives in
/// [`MarginLoss::bounds`]. `dual_update` returns the new (possibly
/// unclipped) dual value; clipping to the feasible domain is done by the
/// caller.
pub trait MarginLoss: Sync {
    /// Computes the updated dual value from the current dual `q`, the
    /// margin and the curvature `sigma`.
    fn dual_update(&self, q: f64, margin: f64, sigma: f64) -> f64;

    /// Feasible domain of the dual variable.
    fn bounds(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

/// A regression loss evaluated on the residual `y - (w.x + b)`.
pub trait ResidualLoss: Sync {
    /// Computes the updated dual value from the current dual `a`, the
    /// residual and the curvature `sigma`.
    fn dual_update(&self, a: f64, residual: f64, sigma: f64) -> f64;

    /// Feasible domain of the dual variable.
    fn bounds(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, f64::INFINITY)
    }
}
