use crate::loss::MarginLoss;

/// Binary classification over signed labels `-1.0` / `+1.0`.
pub struct Classification<'a, L> {
    y: &'a [f64],
    loss: &'a L,
}

impl<'a, L: MarginLoss> Classification<'a, L> {
    /// Binds signed labels to a margin loss.
    pub fn new(y: &'a [f64], loss: &'a L) -> Classification<'a, L> {
        Classification { y, loss }
    }
}

impl<'a, L: MarginLoss> super::Problem for Classification<'a, L> {
    fn size(&self) -> usize {
        self.y.len()
    }

    fn sign(&self, i: usize) -> f64 {
        self.y[i]
    }

    fn dual_update(&self, i: usize, ai: f64, dec: f64, sigma: f64) -> f64 {
        let margin = self.y[i] * dec;
        let (lb, ub) = self.loss.bounds();
        self.loss.dual_update(ai, margin, sigma).clamp(lb, ub)
    }
}
