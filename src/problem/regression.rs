use crate::loss::ResidualLoss;

/// Regression over real-valued targets.
pub struct Regression<'a, L> {
    y: &'a [f64],
    loss: &'a L,
}

impl<'a, L: ResidualLoss> Regression<'a, L> {
    /// Binds targets to a residual loss.
    pub fn new(y: &'a [f64], loss: &'a L) -> Regression<'a, L> {
        Regression { y, loss }
    }
}

impl<'a, L: ResidualLoss> super::Problem for Regression<'a, L> {
    fn size(&self) -> usize {
        self.y.len()
    }

    fn sign(&self, _i: usize) -> f64 {
        1.0
    }

    fn dual_update(&self, i: usize, ai: f64, dec: f64, sigma: f64) -> f64 {
        let residual = self.y[i] - dec;
        let (lb, ub) = self.loss.bounds();
        self.loss.dual_update(ai, residual, sigma).clamp(lb, ub)
    }
}
