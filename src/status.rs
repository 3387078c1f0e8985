use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::dataset::dot;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Possible outcomes of a training run
pub enum StatusCode {
    /// Training not started
    Initialized,
    /// Relative weight change fell below the tolerance
    Optimal,
    /// Epoch cap reached before convergence (not an error)
    MaxEpochs,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A struct containing the solver state and diagnostics of a training run
pub struct Status {
    /// Weight vector after elastic-net shrinkage (exact zeros included)
    pub w: Vec<f64>,
    /// Raw dual accumulators; `w[j]` is `v[j]` run through the shrinkage operator
    pub v: Vec<f64>,
    /// Dual variable per sample (the warm-start carrier)
    pub a: Vec<f64>,
    /// Bias term, excluded from the penalty
    pub b: f64,
    /// Relative weight change observed at the last epoch boundary
    pub delta: f64,
    /// Number of epochs taken by the run
    pub epochs: usize,
    /// Elapsed time (in seconds)
    pub time: f64,
    /// Current status
    pub code: StatusCode,
}

impl Status {
    /// Create a [`Status`] struct with default initialization for `n` samples
    /// and `d` features.
    pub fn new(n: usize, d: usize) -> Status {
        Status {
            w: vec![0.0; d],
            v: vec![0.0; d],
            a: vec![0.0; n],
            b: 0.0,
            delta: f64::INFINITY,
            epochs: 0,
            time: 0.0,
            code: StatusCode::Initialized,
        }
    }

    /// Evaluate the decision function `w.x + b` for one feature vector.
    pub fn decision(&self, x: ArrayView1<'_, f64>) -> f64 {
        dot(&self.w, x) + self.b
    }

    /// Number of non-zero weight coordinates.
    pub fn nnz(&self) -> usize {
        self.w.iter().filter(|&&wj| wj != 0.0).count()
    }

    /// Indices of the non-zero weight coordinates.
    pub fn support(&self) -> Vec<usize> {
        self.w
            .iter()
            .enumerate()
            .filter(|(_, &wj)| wj != 0.0)
            .map(|(j, _)| j)
            .collect()
    }
}
