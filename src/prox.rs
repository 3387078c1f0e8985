//! Elastic-net proximal operator

/// Applies the elastic-net shrinkage to a single coordinate.
///
/// Soft-thresholds `z` by `lambda * alpha` and scales the remainder by
/// `1 / (1 + lambda * (1 - alpha))`. With `alpha = 0` this is pure ridge
/// scaling, with `alpha = 1` pure soft-thresholding.
pub fn shrink(z: f64, lambda: f64, alpha: f64) -> f64 {
    Shrinkage::new(lambda, alpha).apply(z)
}

/// Precomputed shrinkage constants for repeated application.
#[derive(Clone, Copy, Debug)]
pub struct Shrinkage {
    threshold: f64,
    scale: f64,
}

impl Shrinkage {
    /// Precomputes the threshold and scaling for the given regularization.
    pub fn new(lambda: f64, alpha: f64) -> Shrinkage {
        Shrinkage {
            threshold: lambda * alpha,
            scale: 1.0 / (1.0 + lambda * (1.0 - alpha)),
        }
    }

    /// Shrinks one coordinate.
    pub fn apply(&self, z: f64) -> f64 {
        let m = z.abs() - self.threshold;
        if m <= 0.0 {
            0.0
        } else {
            z.signum() * m * self.scale
        }
    }
}
