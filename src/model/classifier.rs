use ndarray::{ArrayView1, ArrayView2};
use rayon::ThreadPool;

use crate::dataset::DataSet;
use crate::error::{Error, Result};
use crate::loss::MarginLoss;
use crate::problem::Classification;
use crate::sdca::{self, Params};
use crate::status::Status;

/// A binary linear classifier trained by SDCA.
///
/// Class labels are `0` and `1`; internally training runs on signed labels.
pub struct Classifier<L> {
    loss: L,
    params: Params,
    status: Option<Status>,
}

impl<L: MarginLoss> Classifier<L> {
    /// Creates an untrained classifier from a margin loss and hyperparameters.
    pub fn new(loss: L, params: Params) -> Classifier<L> {
        Classifier {
            loss,
            params,
            status: None,
        }
    }

    /// Returns the hyperparameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Returns the state of the last successful training run, if any.
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    fn trained(&self) -> Result<&Status> {
        self.status.as_ref().ok_or(Error::NotTrained)
    }

    /// Trains from scratch, replacing any previous state. A thread pool
    /// splits each epoch across its workers; `None` trains sequentially.
    pub fn train(
        &mut self,
        x: ArrayView2<'_, f64>,
        y: &[usize],
        pool: Option<&ThreadPool>,
    ) -> Result<()> {
        let yv = signed_labels(y)?;
        let data = DataSet::new(x.view(), &yv)?;
        let problem = Classification::new(&yv, &self.loss);
        self.status = Some(sdca::solve(&problem, &data, &self.params, pool)?);
        Ok(())
    }

    /// Trains warm-started from another classifier's converged state.
    pub fn train_warm(
        &mut self,
        x: ArrayView2<'_, f64>,
        y: &[usize],
        from: &Classifier<L>,
        pool: Option<&ThreadPool>,
    ) -> Result<()> {
        let warm = from.trained()?.clone();
        let yv = signed_labels(y)?;
        let data = DataSet::new(x.view(), &yv)?;
        let problem = Classification::new(&yv, &self.loss);
        self.status = Some(sdca::solve_with_status(
            warm,
            &problem,
            &data,
            &self.params,
            pool,
        )?);
        Ok(())
    }

    /// Evaluates the decision function `w.x + b` for one sample.
    pub fn decision_function(&self, x: ArrayView1<'_, f64>) -> Result<f64> {
        let status = self.trained()?;
        if x.len() != status.w.len() {
            return Err(Error::DimensionMismatch {
                expected: status.w.len(),
                found: x.len(),
            });
        }
        Ok(status.decision(x))
    }

    /// Predicts the most likely class from the sign of the decision function.
    pub fn predict(&self, x: ArrayView1<'_, f64>) -> Result<usize> {
        Ok(if self.decision_function(x)? > 0.0 { 1 } else { 0 })
    }

    /// Returns the trained weight vector (exact zeros included).
    pub fn weights(&self) -> Result<&[f64]> {
        Ok(&self.trained()?.w)
    }

    /// Returns the trained bias term.
    pub fn bias(&self) -> Result<f64> {
        Ok(self.trained()?.b)
    }

    /// Number of epochs the last training run took.
    pub fn epochs_taken(&self) -> Result<usize> {
        Ok(self.trained()?.epochs)
    }
}

fn signed_labels(y: &[usize]) -> Result<Vec<f64>> {
    y.iter()
        .map(|&yi| match yi {
            0 => Ok(-1.0),
            1 => Ok(1.0),
            _ => Err(Error::InvalidConfiguration(format!(
                "class label {yi} is not binary"
            ))),
        })
        .collect()
}
