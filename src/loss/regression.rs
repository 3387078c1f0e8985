//! Residual losses
use super::ResidualLoss;

/// Squared loss `residual^2 / 2` with an unbounded dual domain.
#[derive(Clone, Copy, Debug, Default)]
pub struct Squared;

impl ResidualLoss for Squared {
    fn dual_update(&self, a: f64, residual: f64, sigma: f64) -> f64 {
        a + (residual - a) / (1.0 + sigma)
    }
}

/// Absolute loss `|residual|` with dual domain `[-1, 1]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Absolute;

impl ResidualLoss for Absolute {
    fn dual_update(&self, a: f64, residual: f64, sigma: f64) -> f64 {
        a + residual / sigma
    }

    fn bounds(&self) -> (f64, f64) {
        (-1.0, 1.0)
    }
}
