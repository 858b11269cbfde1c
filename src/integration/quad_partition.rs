use rayon::prelude::*;

use crate::error::{Result, RiesError};
use crate::integration::{nquad, quad, QuadOptions, QuadResult};

fn check_partition(x0_partition: &[f64]) -> Result<()> {
    if x0_partition.len() < 2 {
        return Err(RiesError::InvalidArgument(format!(
            "a partition needs at least 2 points, got {}",
            x0_partition.len()
        )));
    }
    Ok(())
}

fn combine(parts: &[QuadResult]) -> QuadResult {
    QuadResult {
        value: parts.iter().map(|part| part.value).sum(),
        abs_error: parts.iter().map(|part| part.abs_error.powi(2)).sum::<f64>().sqrt(),
    }
}

/// Integrate `f` over a hyper-rectangle whose first axis is split at the
/// points of `x0_partition`.
///
/// Every slice `[x0[i], x0[i + 1]] x other_ranges` is handed to `nquad`
/// separately, so that features which a single adaptive rule would step
/// over (a resonance a few eV wide on a MeV scale) are sampled as long as
/// the partition resolves them. Slices are integrated in parallel, the
/// errors of the slices are added in quadrature.
pub fn quad_partition<F>(
    f: &F,
    x0_partition: &[f64],
    other_ranges: &[(f64, f64)],
    options: &QuadOptions,
) -> Result<QuadResult>
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    check_partition(x0_partition)?;

    let parts: Vec<QuadResult> = x0_partition
        .par_windows(2)
        .map(|bounds| {
            let mut ranges = Vec::with_capacity(other_ranges.len() + 1);
            ranges.push((bounds[0], bounds[1]));
            ranges.extend_from_slice(other_ranges);
            nquad(f, &ranges, options)
        })
        .collect();

    Ok(combine(&parts))
}

/// One-dimensional version of [`quad_partition`].
pub fn quad_partition_1d<F>(
    f: &F,
    x0_partition: &[f64],
    options: &QuadOptions,
) -> Result<QuadResult>
where
    F: Fn(f64) -> f64 + Sync,
{
    check_partition(x0_partition)?;

    let parts: Vec<QuadResult> = x0_partition
        .par_windows(2)
        .map(|bounds| quad(f, bounds[0], bounds[1], options))
        .collect();

    Ok(combine(&parts))
}
