use crate::error::{Result, RiesError};
use crate::integration::QuadResult;

/// Lower Darboux sum of tabulated function values and the distance to the
/// upper sum.
///
/// On each interval the lower sum takes the smaller and the upper sum the
/// larger of the two boundary values. For a function that is monotonic
/// between the grid points (a resonance sampled on a grid that contains
/// its maximum), the exact integral lies between the two sums.
pub fn darboux(fx: &[f64], x: &[f64]) -> Result<QuadResult> {
    if fx.len() != x.len() {
        return Err(RiesError::InvalidArgument(format!(
            "function values ({}) and grid ({}) differ in length",
            fx.len(),
            x.len()
        )));
    }
    if x.len() < 2 {
        return Err(RiesError::InvalidArgument(
            "a Darboux sum needs at least 2 grid points".to_string(),
        ));
    }

    let (lower, upper) = fx
        .windows(2)
        .zip(x.windows(2))
        .fold((0.0, 0.0), |(lower, upper), (f, x)| {
            let dx = x[1] - x[0];
            (lower + f[0].min(f[1]) * dx, upper + f[0].max(f[1]) * dx)
        });

    Ok(QuadResult {
        value: lower,
        abs_error: (upper - lower).abs(),
    })
}

/// [`darboux`] for a function that is evaluated on the grid first.
pub fn darboux_fn<F: Fn(f64) -> f64>(f: F, x: &[f64]) -> Result<QuadResult> {
    let fx: Vec<f64> = x.iter().map(|&xi| f(xi)).collect();
    darboux(&fx, x)
}
