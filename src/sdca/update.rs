use crate::dataset::{dot, DataSet};
use crate::problem::Problem;
use crate::prox::Shrinkage;

/// Updates accumulated by one worker over its sample partition.
pub(crate) struct PartialUpdate {
    /// Change of the raw weight accumulators.
    pub dv: Vec<f64>,
    /// Change of the bias term.
    pub db: f64,
    /// New dual values, one entry per touched sample.
    pub a: Vec<(usize, f64)>,
}

/// Runs the dual coordinate update over one partition of the shuffled order.
///
/// The worker owns a copy of `(v, b)` taken at the epoch start and the dual
/// variables of its partition; decisions are computed against its own
/// shrunk view, so the single-partition case is exactly sequential SDCA.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_partition(
    problem: &dyn Problem,
    data: &DataSet<'_>,
    sigma: &[f64],
    shrinkage: &Shrinkage,
    use_bias: bool,
    inv_ln: f64,
    order: &[usize],
    v0: &[f64],
    b0: f64,
    a0: &[f64],
) -> PartialUpdate {
    let mut v = v0.to_vec();
    let mut w: Vec<f64> = v.iter().map(|&vj| shrinkage.apply(vj)).collect();
    let mut b = b0;
    let mut updated = Vec::new();

    for &i in order {
        // an all-zero sample without bias has no curvature and nothing to update
        if sigma[i] == 0.0 {
            continue;
        }
        let xi = data.row(i);
        let dec = dot(&w, xi) + b;
        // each sample index occurs at most once per epoch, so the snapshot
        // of its dual is current
        let ai = a0[i];
        let an = problem.dual_update(i, ai, dec, sigma[i]);
        let diff = an - ai;
        if diff == 0.0 {
            continue;
        }
        let step = diff * problem.sign(i) * inv_ln;
        for (j, &xij) in xi.iter().enumerate() {
            if xij == 0.0 {
                continue;
            }
            v[j] += step * xij;
            w[j] = shrinkage.apply(v[j]);
        }
        if use_bias {
            b += step;
        }
        updated.push((i, an));
    }

    for (vj, &v0j) in v.iter_mut().zip(v0) {
        *vj -= v0j;
    }
    PartialUpdate {
        dv: v,
        db: b - b0,
        a: updated,
    }
}
