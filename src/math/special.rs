use std::f64::consts::{FRAC_1_SQRT_2, PI, SQRT_2};

//=====================================================================
// Error function and the standard normal distribution.
//=====================================================================

// Below this the Taylor series is used, above it the continued fraction
const SERIES_LIMIT: f64 = 2.5;
const MAX_SERIES_TERMS: usize = 200;
const CONTINUED_FRACTION_DEPTH: usize = 120;

const FRAC_2_SQRT_PI: f64 = std::f64::consts::FRAC_2_SQRT_PI;

/// erf(x) = 2/sqrt(pi) exp(-x^2) sum_n 2^n x^(2n+1) / (2n+1)!!
///
/// All terms share the sign of x, so the sum does not cancel.
fn erf_series(x: f64) -> f64 {
    let x2 = x * x;
    let mut term = x;
    let mut sum = x;
    for n in 1..MAX_SERIES_TERMS {
        term *= 2.0 * x2 / (2 * n + 1) as f64;
        sum += term;
        if term.abs() <= f64::EPSILON * sum.abs() {
            break;
        }
    }
    FRAC_2_SQRT_PI * (-x2).exp() * sum
}

/// erfc(x) for x >= SERIES_LIMIT, Laplace continued fraction evaluated
/// from the tail.
fn erfc_continued_fraction(x: f64) -> f64 {
    let mut f = x;
    for n in (1..=CONTINUED_FRACTION_DEPTH).rev() {
        f = x + (n as f64 / 2.0) / f;
    }
    (-x * x).exp() / (PI.sqrt() * f)
}

pub fn erf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x.abs() < SERIES_LIMIT {
        erf_series(x)
    } else {
        x.signum() * (1.0 - erfc_continued_fraction(x.abs()))
    }
}

pub fn erfc(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x >= SERIES_LIMIT {
        erfc_continued_fraction(x)
    } else if x <= -SERIES_LIMIT {
        2.0 - erfc_continued_fraction(-x)
    } else {
        1.0 - erf_series(x)
    }
}

#[inline]
pub fn normal_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

#[inline]
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * erfc(-x * FRAC_1_SQRT_2)
}

/// Quantile function of the standard normal distribution.
///
/// Starts from the rational approximation 26.2.23 of Abramowitz & Stegun
/// (absolute error below 4.5e-4) and polishes it with Halley steps. The
/// lower tail is always solved for, so that p close to 1 keeps the
/// precision that 1 - p still carries.
pub fn normal_ppf(p: f64) -> f64 {
    if p.is_nan() {
        return f64::NAN;
    }
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    let q = if p < 0.5 { p } else { 1.0 - p };
    let t = (-2.0 * q.ln()).sqrt();
    let mut x = -(t
        - (2.515517 + t * (0.802853 + t * 0.010328))
            / (1.0 + t * (1.432788 + t * (0.189269 + t * 0.001308))));

    for _ in 0..4 {
        let e = normal_cdf(x) - q;
        let u = e * (2.0 * PI).sqrt() * (0.5 * x * x).exp();
        if !u.is_finite() {
            break;
        }
        x -= u / (1.0 + 0.5 * x * u);
    }

    if p < 0.5 { x } else { -x }
}

/// Standard deviation of a normal distribution with the given full width
/// at half maximum.
#[inline]
pub fn normal_sigma_from_fwhm(fwhm: f64) -> f64 {
    fwhm / (2.0 * SQRT_2 * std::f64::consts::LN_2.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_erf_reference_values() {
        assert_eq!(erf(0.0), 0.0);
        assert_relative_eq!(erf(0.5), 0.5204998778130465, max_relative = 1e-13);
        assert_relative_eq!(erf(1.0), 0.8427007929497149, max_relative = 1e-13);
        assert_relative_eq!(erf(2.0), 0.9953222650189527, max_relative = 1e-13);
        assert_relative_eq!(erf(3.0), 0.9999779095030014, max_relative = 1e-13);
        assert_relative_eq!(erf(-1.0), -0.8427007929497149, max_relative = 1e-13);
        assert_eq!(erf(f64::INFINITY), 1.0);
        assert!(erf(f64::NAN).is_nan());
    }

    #[test]
    fn test_erfc_tails() {
        assert_relative_eq!(erfc(3.0), 2.2090496998585438e-05, max_relative = 1e-10);
        assert_relative_eq!(erfc(5.0), 1.5374597944280351e-12, max_relative = 1e-10);
        assert_relative_eq!(erfc(-1.0), 1.842700792949715, max_relative = 1e-13);
        assert_eq!(erfc(40.0), 0.0);
    }

    #[test]
    fn test_erf_is_continuous_at_the_method_switch() {
        let below = erf(SERIES_LIMIT - 1e-12);
        let above = erf(SERIES_LIMIT + 1e-12);
        assert!((below - above).abs() < 1e-11);
    }

    #[test]
    fn test_normal_distribution() {
        assert_relative_eq!(normal_cdf(1.96), 0.9750021048517796, max_relative = 1e-12);
        assert_eq!(normal_cdf(0.0), 0.5);
        assert_relative_eq!(normal_pdf(0.0), 0.3989422804014327, max_relative = 1e-15);
        assert_relative_eq!(normal_ppf(0.975), 1.9599639845400536, max_relative = 1e-9);
        assert_relative_eq!(normal_ppf(0.3), -0.5244005127080407, max_relative = 1e-9);
        assert_relative_eq!(normal_ppf(1e-10), -6.361340902404056, max_relative = 1e-9);
        assert!(normal_ppf(0.5).abs() < 1e-12);
        assert_eq!(normal_ppf(0.0), f64::NEG_INFINITY);
        assert_eq!(normal_ppf(1.0), f64::INFINITY);
    }

    #[test]
    fn test_normal_ppf_inverts_cdf() {
        for &p in &[1e-6, 0.01, 0.2, 0.45, 0.55, 0.9, 0.999] {
            assert_relative_eq!(normal_cdf(normal_ppf(p)), p, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_sigma_from_fwhm() {
        let sigma = normal_sigma_from_fwhm(2.0);
        assert_relative_eq!(normal_pdf(1.0 / sigma), 0.5 * normal_pdf(0.0), max_relative = 1e-12);
    }
}
