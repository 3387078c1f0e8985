use ndarray::{ArrayView1, ArrayView2};
use rayon::ThreadPool;

use crate::dataset::DataSet;
use crate::error::{Error, Result};
use crate::loss::ResidualLoss;
use crate::problem::Regression;
use crate::sdca::{self, Params};
use crate::status::Status;

/// A linear regressor trained by SDCA.
pub struct Regressor<L> {
    loss: L,
    params: Params,
    status: Option<Status>,
}

impl<L: ResidualLoss> Regressor<L> {
    /// Creates an untrained regressor from a residual loss and hyperparameters.
    pub fn new(loss: L, params: Params) -> Regressor<L> {
        Regressor {
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
        y: &[f64],
        pool: Option<&ThreadPool>,
    ) -> Result<()> {
        let data = DataSet::new(x.view(), y)?;
        let problem = Regression::new(y, &self.loss);
        self.status = Some(sdca::solve(&problem, &data, &self.params, pool)?);
        Ok(())
    }

    /// Trains warm-started from another regressor's converged state.
    pub fn train_warm(
        &mut self,
        x: ArrayView2<'_, f64>,
        y: &[f64],
        from: &Regressor<L>,
        pool: Option<&ThreadPool>,
    ) -> Result<()> {
        let warm = from.trained()?.clone();
        let data = DataSet::new(x.view(), y)?;
        let problem = Regression::new(y, &self.loss);
        self.status = Some(sdca::solve_with_status(
            warm,
            &problem,
            &data,
            &self.params,
            pool,
        )?);
        Ok(())
    }

    /// Predicts the target `w.x + b` for one sample.
    pub fn predict(&self, x: ArrayView1<'_, f64>) -> Result<f64> {
        let status = self.trained()?;
        if x.len() != status.w.len() {
            return Err(Error::DimensionMismatch {
                expected: status.w.len(),
                found: x.len(),
            });
        }
        Ok(status.decision(x))
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
