//! Synthetic problem generators shared by the behavioral suites.
#![allow(dead_code)]

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Noisy linear target over positive features, so relative errors are
/// well defined.
pub fn linear_regression(n: usize, seed: u64) -> (Array2<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let w = [1.5, 2.0, 0.5, 1.0];
    let d = w.len();
    let mut flat = Vec::with_capacity(n * d);
    let mut y = Vec::with_capacity(n);
    for _ in 0..n {
        let row: Vec<f64> = (0..d).map(|_| rng.gen_range(1.0..5.0)).collect();
        let target: f64 = row.iter().zip(&w).map(|(xj, wj)| xj * wj).sum::<f64>()
            + 1.0
            + rng.gen_range(-0.1..0.1);
        flat.extend(row);
        y.push(target);
    }
    (Array2::from_shape_vec((n, d), flat).unwrap(), y)
}

/// Two linearly separable classes with a comfortable margin.
pub fn two_class_linear(n: usize, seed: u64) -> (Array2<f64>, Vec<usize>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let d = 4;
    let mut flat = Vec::with_capacity(n * d);
    let mut y = Vec::with_capacity(n);
    for _ in 0..n {
        let cls = usize::from(rng.gen_bool(0.5));
        let center = if cls == 1 { 2.5 } else { -2.5 };
        for _ in 0..d {
            flat.push(center + rng.gen_range(-1.0..1.0));
        }
        y.push(cls);
    }
    (Array2::from_shape_vec((n, d), flat).unwrap(), y)
}

/// Two perfectly correlated feature triples: a strong one driven by `Z1`
/// and a weak one driven by `Z2`. The label mixes them as
/// `sign(Z1 + 0.2 * Z2)`.
pub fn correlated_groups(n: usize, seed: u64) -> (Array2<f64>, Vec<usize>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut flat = Vec::with_capacity(n * 6);
    let mut y = Vec::with_capacity(n);
    for _ in 0..n {
        let z1 = rng.gen_range(-10.0..10.0);
        let z2 = rng.gen_range(-10.0..10.0);
        flat.extend([z1, -z1, z1, z2, -z2, z2]);
        y.push(usize::from(z1 + 0.2 * z2 > 0.0));
    }
    (Array2::from_shape_vec((n, 6), flat).unwrap(), y)
}

/// One clean strong feature, two noise-dominated echoes of it, and the
/// weak `Z2` triple. Pure L1 at the right strength should keep only
/// feature 0.
pub fn strong_feature(n: usize, seed: u64) -> (Array2<f64>, Vec<usize>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut flat = Vec::with_capacity(n * 6);
    let mut y = Vec::with_capacity(n);
    for _ in 0..n {
        let z1 = rng.gen_range(-10.0..10.0);
        let z2 = rng.gen_range(-10.0..10.0);
        let e1 = rng.gen_range(-10.0..10.0);
        let e2 = rng.gen_range(-10.0..10.0);
        flat.extend([z1, -z1 / 10.0 + e1, z1 / 10.0 + e2, z2, -z2, z2]);
        y.push(usize::from(z1 + 0.2 * z2 > 0.0));
    }
    (Array2::from_shape_vec((n, 6), flat).unwrap(), y)
}
