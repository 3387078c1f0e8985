//! Margin losses
use super::MarginLoss;

/// Hinge loss `max(0, 1 - margin)`.
///
/// The coordinate-wise dual maximizer has a closed form; the caller clips
/// the result to `[0, 1]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hinge;

impl MarginLoss for Hinge {
    fn dual_update(&self, q: f64, margin: f64, sigma: f64) -> f64 {
        q + (1.0 - margin) / sigma
    }
}

/// Logistic loss `ln(1 + exp(-margin))`.
///
/// There is no closed-form dual maximizer; the update takes a damped step
/// toward the sigmoid target `1 / (1 + exp(margin))`, damped by the
/// smoothness constant 1/4 of the loss. Each step increases the dual
/// objective, which is all the epoch loop requires.
#[derive(Clone, Copy, Debug, Default)]
pub struct Logistic;

impl MarginLoss for Logistic {
    fn dual_update(&self, q: f64, margin: f64, sigma: f64) -> f64 {
        let target = 1.0 / (1.0 + margin.exp());
        q + (target - q) / f64::max(1.0, 0.25 + sigma)
    }
}
