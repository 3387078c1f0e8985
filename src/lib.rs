//! Train elastic-net regularized linear models by stochastic dual
//! coordinate ascent.
//!
//! The solver ascends a per-sample dual objective; the primal weight
//! vector is recovered through an elastic-net shrinkage operator, so the
//! L1 part of the penalty produces exact zeros. Classification and
//! regression share the same core behind the loss strategies in [`loss`].
#![warn(missing_docs)]

pub mod dataset;
mod error;
pub mod loss;
pub mod model;
pub mod problem;
pub mod prox;
pub mod sdca;

mod status;
pub use crate::error::{Error, Result};
pub use crate::model::{Classifier, Regressor};
pub use crate::sdca::Params;
pub use crate::status::{Status, StatusCode};
