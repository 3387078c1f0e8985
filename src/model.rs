//! Train/predict facade over the SDCA core
//!
//! The facades own the hyperparameters and the frozen [`Status`](crate::Status)
//! of their last successful run; prediction is read-only and repeated calls
//! on the same input return identical output.

pub mod classifier;
pub mod regressor;

pub use classifier::Classifier;
pub use regressor::Regressor;
