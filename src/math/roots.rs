use crate::error::{Result, RiesError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootOptions {
    /// Absolute tolerance on the root.
    pub x_tolerance: f64,
    pub max_iterations: usize,
}

impl Default for RootOptions {
    fn default() -> Self {
        Self {
            x_tolerance: 1.48e-8,
            max_iterations: 50,
        }
    }
}

/// Newton-Raphson iteration for f(x) = 0 starting from `x0`.
pub fn newton<F, D>(f: F, fprime: D, x0: f64, options: &RootOptions) -> Result<f64>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let mut x = x0;
    for iteration in 0..options.max_iterations {
        let fx = f(x);
        if fx == 0.0 {
            return Ok(x);
        }
        let slope = fprime(x);
        if slope == 0.0 || !slope.is_finite() {
            return Err(RiesError::NoConvergence { iterations: iteration, estimate: x });
        }
        let x_next = x - fx / slope;
        if !x_next.is_finite() {
            return Err(RiesError::NoConvergence { iterations: iteration, estimate: x });
        }
        if (x_next - x).abs() <= options.x_tolerance {
            return Ok(x_next);
        }
        x = x_next;
    }
    Err(RiesError::NoConvergence { iterations: options.max_iterations, estimate: x })
}

/// Bisection for f(x) = 0 on a bracket [a, b] with a sign change.
pub fn bisect<F>(f: F, a: f64, b: f64, options: &RootOptions) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    let (mut lo, mut hi) = if a <= b { (a, b) } else { (b, a) };
    let mut f_lo = f(lo);
    let f_hi = f(hi);
    if f_lo == 0.0 {
        return Ok(lo);
    }
    if f_hi == 0.0 {
        return Ok(hi);
    }
    if f_lo.signum() == f_hi.signum() {
        return Err(RiesError::InvalidArgument(format!(
            "no sign change between f({lo}) = {f_lo} and f({hi}) = {f_hi}"
        )));
    }

    for _ in 0..options.max_iterations {
        let mid = 0.5 * (lo + hi);
        // Floating point resolution reached
        if mid <= lo || mid >= hi || hi - lo <= options.x_tolerance {
            return Ok(mid);
        }
        let f_mid = f(mid);
        if f_mid == 0.0 {
            return Ok(mid);
        }
        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }
    Err(RiesError::NoConvergence {
        iterations: options.max_iterations,
        estimate: 0.5 * (lo + hi),
    })
}

/// Newton-Raphson iteration from `x0`, falling back to bisection on
/// `bracket` when Newton's method fails or leaves the bracket.
pub fn newton_bisect<F, D>(
    f: F,
    fprime: D,
    x0: f64,
    bracket: (f64, f64),
    newton_options: &RootOptions,
    bisect_options: &RootOptions,
) -> Result<f64>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let (lower, upper) = if bracket.0 <= bracket.1 { bracket } else { (bracket.1, bracket.0) };
    match newton(&f, fprime, x0, newton_options) {
        Ok(x) if x >= lower && x <= upper => Ok(x),
        newton_result => {
            log::debug!(
                "Newton iteration from {} failed ({:?}), bisecting [{}, {}]",
                x0,
                newton_result,
                lower,
                upper
            );
            bisect(f, lower, upper, bisect_options)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_newton_square_root() {
        let root = newton(|x| x * x - 2.0, |x| 2.0 * x, 1.0, &RootOptions::default()).unwrap();
        assert_abs_diff_eq!(root, std::f64::consts::SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_newton_reports_flat_derivative() {
        let result = newton(|x| x * x + 1.0, |x| 2.0 * x, 0.0, &RootOptions::default());
        assert!(matches!(result, Err(RiesError::NoConvergence { iterations: 0, .. })));
    }

    #[test]
    fn test_newton_gives_up() {
        let options = RootOptions { x_tolerance: 1e-12, max_iterations: 3 };
        // Cycles between 0 and 1
        let cubic = |x: f64| x.powi(3) - 2.0 * x + 2.0;
        let result = newton(cubic, |x| 3.0 * x * x - 2.0, 0.0, &options);
        assert!(matches!(result, Err(RiesError::NoConvergence { iterations: 3, .. })));
    }

    #[test]
    fn test_bisect() {
        let options = RootOptions { x_tolerance: 1e-13, max_iterations: 200 };
        let root = bisect(|x: f64| x.cos() - x, 0.0, 1.0, &options).unwrap();
        assert_abs_diff_eq!(root, 0.7390851332151607, epsilon = 1e-12);
        // Reversed bracket
        let root = bisect(|x: f64| x - 0.25, 1.0, 0.0, &options).unwrap();
        assert_abs_diff_eq!(root, 0.25, epsilon = 1e-12);
        assert!(bisect(|x: f64| x * x + 1.0, -1.0, 1.0, &options).is_err());
    }

    #[test]
    fn test_newton_bisect() {
        let options = RootOptions { x_tolerance: 1e-13, max_iterations: 200 };
        let root = newton_bisect(
            |x: f64| x.cos() - x,
            |x: f64| -x.sin() - 1.0,
            0.5,
            (0.0, 1.0),
            &options,
            &options,
        )
        .unwrap();
        assert_abs_diff_eq!(root, 0.7390851332151607, epsilon = 1e-12);

        // Newton cycles between 0 and 1, bisection finds the root left of the bracket start
        let cubic = |x: f64| x.powi(3) - 2.0 * x + 2.0;
        let newton_options = RootOptions { x_tolerance: 1e-12, max_iterations: 3 };
        let slope = |x: f64| 3.0 * x * x - 2.0;
        let root =
            newton_bisect(cubic, slope, 0.0, (-3.0, 0.0), &newton_options, &options).unwrap();
        assert_abs_diff_eq!(cubic(root), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_newton_bisect_reports_failure() {
        let options = RootOptions::default();
        // No root at all: both methods fail and the error reaches the caller
        let result =
            newton_bisect(|x: f64| x * x + 1.0, |x| 2.0 * x, 0.0, (-1.0, 1.0), &options, &options);
        assert!(result.is_err());
    }
}
