use std::time::Instant;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use rayon::ThreadPool;

use super::update::{run_partition, PartialUpdate};
use super::Params;
use crate::dataset::DataSet;
use crate::error::{Error, Result};
use crate::problem::Problem;
use crate::prox::Shrinkage;
use crate::status::{Status, StatusCode};

/// Uses the SDCA method to solve the given training problem starting from
/// the all-zero initial point.
///
/// When a thread pool is supplied, each epoch partitions the shuffled
/// sample order across its workers and reduces their deltas at the epoch
/// boundary; otherwise the epoch runs sequentially.
pub fn solve(
    problem: &dyn Problem,
    data: &DataSet<'_>,
    params: &Params,
    pool: Option<&ThreadPool>,
) -> Result<Status> {
    params.validate()?;
    check_problem(problem, data)?;
    let status = Status::new(data.len(), data.dim());
    run(status, problem, data, params, pool)
}

/// Uses the SDCA method to solve the given training problem warm-started
/// from a previous run's final [`Status`].
pub fn solve_with_status(
    status: Status,
    problem: &dyn Problem,
    data: &DataSet<'_>,
    params: &Params,
    pool: Option<&ThreadPool>,
) -> Result<Status> {
    params.validate()?;
    check_problem(problem, data)?;
    if status.a.len() != data.len() {
        return Err(Error::IncompatibleWarmStart(format!(
            "warm-start state holds {} dual variables, dataset has {} samples",
            status.a.len(),
            data.len()
        )));
    }
    if status.w.len() != data.dim() || status.v.len() != data.dim() {
        return Err(Error::IncompatibleWarmStart(format!(
            "warm-start state has dimensionality {}, dataset has {}",
            status.w.len(),
            data.dim()
        )));
    }
    let mut status = status;
    status.code = StatusCode::Initialized;
    status.epochs = 0;
    status.delta = f64::INFINITY;
    status.time = 0.0;
    run(status, problem, data, params, pool)
}

fn check_problem(problem: &dyn Problem, data: &DataSet<'_>) -> Result<()> {
    if problem.size() != data.len() {
        return Err(Error::DimensionMismatch {
            expected: data.len(),
            found: problem.size(),
        });
    }
    Ok(())
}

fn run(
    mut status: Status,
    problem: &dyn Problem,
    data: &DataSet<'_>,
    params: &Params,
    pool: Option<&ThreadPool>,
) -> Result<Status> {
    let n = data.len();
    let start = Instant::now();
    let shrinkage = Shrinkage::new(params.lambda, params.alpha);
    let sigma = data.curvatures(params.lambda, params.use_bias);
    let inv_ln = 1.0 / (params.lambda * n as f64);

    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut order: Vec<usize> = (0..n).collect();

    for epoch in 1..=params.max_epochs {
        order.shuffle(&mut rng);
        let w_prev = status.w.clone();
        let b_prev = status.b;

        let partials: Vec<PartialUpdate> = match pool {
            Some(pool) if pool.current_num_threads() > 1 => {
                let workers = pool.current_num_threads();
                let chunk = (n + workers - 1) / workers;
                let (v0, b0, a0) = (&status.v, status.b, &status.a);
                pool.install(|| {
                    order
                        .par_chunks(chunk)
                        .map(|part| {
                            run_partition(
                                problem,
                                data,
                                &sigma,
                                &shrinkage,
                                params.use_bias,
                                inv_ln,
                                part,
                                v0,
                                b0,
                                a0,
                            )
                        })
                        .collect()
                })
            }
            _ => vec![run_partition(
                problem,
                data,
                &sigma,
                &shrinkage,
                params.use_bias,
                inv_ln,
                &order,
                &status.v,
                status.b,
                &status.a,
            )],
        };

        // reduce worker deltas, then apply the shrinkage once to the
        // aggregated accumulators
        for part in partials {
            for (vj, dvj) in status.v.iter_mut().zip(&part.dv) {
                *vj += dvj;
            }
            status.b += part.db;
            for (i, ai) in part.a {
                status.a[i] = ai;
            }
        }
        for (wj, &vj) in status.w.iter_mut().zip(&status.v) {
            *wj = shrinkage.apply(vj);
        }

        status.epochs = epoch;
        status.time = start.elapsed().as_secs_f64();
        status.delta = relative_change(&w_prev, b_prev, &status.w, status.b);
        debug!(
            "epoch {:>4}: delta {:9.3e}, nnz {:>6} / {}, time {:.2}s",
            epoch,
            status.delta,
            status.nnz(),
            status.w.len(),
            status.time
        );

        if status.delta < params.tol {
            status.code = StatusCode::Optimal;
            break;
        }
    }

    if status.code != StatusCode::Optimal {
        status.code = StatusCode::MaxEpochs;
        info!(
            "epoch cap {} reached, last delta {:.3e}",
            params.max_epochs, status.delta
        );
    } else {
        info!(
            "converged after {} epochs, delta {:.3e}",
            status.epochs, status.delta
        );
    }
    Ok(status)
}

/// Normalized Euclidean distance between successive weight vectors,
/// including the bias coordinate.
fn relative_change(w0: &[f64], b0: f64, w1: &[f64], b1: f64) -> f64 {
    let mut diff = (b1 - b0) * (b1 - b0);
    let mut n0 = b0 * b0;
    let mut n1 = b1 * b1;
    for (&w0j, &w1j) in w0.iter().zip(w1) {
        diff += (w1j - w0j) * (w1j - w0j);
        n0 += w0j * w0j;
        n1 += w1j * w1j;
    }
    diff.sqrt() / f64::max(f64::max(n0, n1).sqrt(), 1e-12)
}
