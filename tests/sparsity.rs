//! Sparsity behavior of the elastic-net penalty at the solver level.
mod common;

use ndarray::ArrayView2;
use rusdca::loss::{Hinge, Logistic, MarginLoss};
use rusdca::{Classifier, Params};

fn fit<L: MarginLoss + Copy>(
    loss: L,
    x: ArrayView2<'_, f64>,
    y: &[usize],
    lambda: f64,
    alpha: f64,
) -> Vec<f64> {
    let params = Params::new()
        .with_lambda(lambda)
        .with_alpha(alpha)
        .with_tol(1e-6)
        .with_max_epochs(100)
        .with_bias(false)
        .with_seed(11);
    let mut model = Classifier::new(loss, params);
    model.train(x, y, None).unwrap();
    model.weights().unwrap().to_vec()
}

fn nnz(w: &[f64]) -> usize {
    w.iter().filter(|&&wj| wj != 0.0).count()
}

#[test]
fn nnz_is_monotone_in_lambda_under_pure_l1() {
    let (x, y) = common::strong_feature(500, 42);
    let mut last = usize::MAX;
    for &lambda in &[3e-3, 1e-2, 3e-2, 1e-1, 3e-1, 1.0, 3.0] {
        let w = fit(Logistic, x.view(), &y, lambda, 1.0);
        let count = nnz(&w);
        assert!(
            count <= last,
            "nnz grew from {last} to {count} at lambda {lambda}"
        );
        last = count;
    }
}

fn single_feature_window<L: MarginLoss + Copy>(loss: L) {
    let (x, y) = common::strong_feature(500, 42);
    let mut lambda = 1e-3;
    while lambda < 3.0 {
        let w = fit(loss, x.view(), &y, lambda, 1.0);
        if nnz(&w) == 1 {
            assert!(w[0] > 0.0, "surviving weight should be the true effect");
            assert!(w[1..].iter().all(|&wj| wj == 0.0));
            return;
        }
        lambda *= 1.15;
    }
    panic!("no lambda produced exactly one active feature");
}

#[test]
fn pure_l1_isolates_the_strong_feature_logistic() {
    single_feature_window(Logistic);
}

#[test]
fn pure_l1_isolates_the_strong_feature_hinge() {
    single_feature_window(Hinge);
}

#[test]
fn elastic_net_keeps_correlated_features_together() {
    let (x, y) = common::correlated_groups(800, 42);

    // walk the regularization path until the weak group is dropped
    let mut lambda = 1e-3;
    let w = loop {
        assert!(lambda < 10.0, "no lambda produced the 3-feature solution");
        let w = fit(Logistic, x.view(), &y, lambda, 0.5);
        if nnz(&w) <= 3 {
            break w;
        }
        lambda *= 1.25;
    };

    assert_eq!(nnz(&w), 3);
    assert!(w[0] > 0.0 && w[1] < 0.0 && w[2] > 0.0, "weights {w:?}");
    let mean = (w[0].abs() + w[1].abs() + w[2].abs()) / 3.0;
    let spread = (w[0] + 2.0 * w[1] + w[2]).abs() / 3.0;
    assert!(
        spread < 0.4 * mean,
        "correlated weights are not grouped: {w:?}"
    );

    // pure L2 at a stronger lambda turns every feature back on
    let w = fit(Logistic, x.view(), &y, lambda * 3.0, 0.0);
    assert_eq!(nnz(&w), 6);
    let signs: Vec<f64> = w.iter().map(|wj| wj.signum()).collect();
    assert_eq!(signs, vec![1.0, -1.0, 1.0, 1.0, -1.0, 1.0], "weights {w:?}");
}
