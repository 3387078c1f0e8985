use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Hyperparameters of a training run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Params {
    /// Overall regularization strength (> 0)
    pub lambda: f64,
    /// Elastic-net mixing in [0, 1]; 0 is pure L2, 1 is pure L1
    pub alpha: f64,
    /// Relative weight-change threshold for convergence
    pub tol: f64,
    /// Maximum number of epochs
    pub max_epochs: usize,
    /// Whether to fit an unpenalized bias term
    pub use_bias: bool,
    /// Seed for the per-epoch sample shuffle; random if unset
    pub seed: Option<u64>,
}

impl Params {
    const DEFAULT_LAMBDA: f64 = 1e-4;
    const DEFAULT_ALPHA: f64 = 0.5;
    const DEFAULT_TOL: f64 = 1e-4;
    const DEFAULT_MAX_EPOCHS: usize = 100;

    /// Creates the default parameter set.
    pub fn new() -> Self {
        Params {
            lambda: Self::DEFAULT_LAMBDA,
            alpha: Self::DEFAULT_ALPHA,
            tol: Self::DEFAULT_TOL,
            max_epochs: Self::DEFAULT_MAX_EPOCHS,
            use_bias: true,
            seed: None,
        }
    }

    /// Sets the regularization strength.
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    /// Sets the elastic-net mixing parameter.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the convergence tolerance.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Sets the epoch cap.
    pub fn with_max_epochs(mut self, max_epochs: usize) -> Self {
        self.max_epochs = max_epochs;
        self
    }

    /// Enables or disables the bias term.
    pub fn with_bias(mut self, use_bias: bool) -> Self {
        self.use_bias = use_bias;
        self
    }

    /// Fixes the shuffle seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks all hyperparameters before a training run.
    pub fn validate(&self) -> Result<()> {
        if !(self.lambda.is_finite() && self.lambda > 0.0) {
            return Err(Error::InvalidConfiguration(format!(
                "lambda must be positive, got {}",
                self.lambda
            )));
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(Error::InvalidConfiguration(format!(
                "alpha must lie in [0, 1], got {}",
                self.alpha
            )));
        }
        if !(self.tol.is_finite() && self.tol > 0.0) {
            return Err(Error::InvalidConfiguration(format!(
                "tolerance must be positive, got {}",
                self.tol
            )));
        }
        if self.max_epochs == 0 {
            return Err(Error::InvalidConfiguration(
                "max_epochs must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for Params {
    fn default() -> Self {
        Params::new()
    }
}
