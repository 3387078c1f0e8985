//! Training problem definitions
//!
//! A problem binds the labels of a training set to a loss strategy and
//! exposes the per-sample dual update the solver drives. Both variants are
//! pure functions of local quantities and carry no mutable state.
pub mod classification;
pub mod regression;

pub use classification::Classification;
pub use regression::Regression;

/// A per-sample separable training problem amenable to dual coordinate ascent.
pub trait Problem: Sync {
    /// Returns the number of samples.
    fn size(&self) -> usize;
    /// Returns the multiplier of the feature vector in the weight delta of
    /// the ith sample (`y_i` for margin losses, `1` for residual losses).
    fn sign(&self, i: usize) -> f64;
    /// Computes the new dual value of the ith sample, clipped to the
    /// feasible domain, from the current dual `ai`, the decision value
    /// `w.x + b` and the curvature `sigma`.
    fn dual_update(&self, i: usize, ai: f64, dec: f64, sigma: f64) -> f64;
}
