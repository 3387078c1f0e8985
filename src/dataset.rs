//! Dense training data view
use ndarray::{ArrayView1, ArrayView2};

use crate::error::{Error, Result};

/// A validated view on a dense training set.
///
/// Rows of `x` are samples, `y` holds one target per row (a real value for
/// regression, `-1.0`/`+1.0` for classification). The view is read-only for
/// the duration of a training run.
pub struct DataSet<'a> {
    x: ArrayView2<'a, f64>,
    y: &'a [f64],
}

impl<'a> DataSet<'a> {
    /// Validates shapes and wraps the data.
    pub fn new(x: ArrayView2<'a, f64>, y: &'a [f64]) -> Result<DataSet<'a>> {
        if x.nrows() == 0 {
            return Err(Error::InvalidConfiguration("dataset is empty".into()));
        }
        if x.ncols() == 0 {
            return Err(Error::InvalidConfiguration(
                "samples have no features".into(),
            ));
        }
        if y.len() != x.nrows() {
            return Err(Error::DimensionMismatch {
                expected: x.nrows(),
                found: y.len(),
            });
        }
        Ok(DataSet { x, y })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.nrows()
    }

    /// Whether the set holds no samples (never true after validation).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Feature dimensionality.
    pub fn dim(&self) -> usize {
        self.x.ncols()
    }

    /// Feature vector of the ith sample.
    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.x.row(i)
    }

    /// Target of the ith sample.
    pub fn target(&self, i: usize) -> f64 {
        self.y[i]
    }

    /// Per-sample curvatures `(|x_i|^2 + bias) / (lambda * n)` of the dual
    /// subproblems.
    pub(crate) fn curvatures(&self, lambda: f64, use_bias: bool) -> Vec<f64> {
        let scale = 1.0 / (lambda * self.len() as f64);
        let bias = if use_bias { 1.0 } else { 0.0 };
        (0..self.len())
            .map(|i| {
                let sq = self.row(i).fold(0.0, |acc, &xij| acc + xij * xij);
                (sq + bias) * scale
            })
            .collect()
    }
}

/// Inner product of a weight slice with one feature vector.
pub(crate) fn dot(w: &[f64], x: ArrayView1<'_, f64>) -> f64 {
    x.iter().zip(w).fold(0.0, |acc, (&xj, &wj)| acc + xj * wj)
}
