use std::f64::consts::{PI, SQRT_2};

use num_complex::Complex64;

use crate::math::normal_pdf;

/// Faddeeva function w(z) = exp(-z^2) erfc(-iz) for Im(z) >= 0.
///
/// Humlicek's W4 rational approximation (JQSRT 27, 437, 1982). The relative
/// error of the real part stays below 1e-4 over the upper half-plane, which
/// is far below the uncertainty of any tabulated level width.
pub fn faddeeva(z: Complex64) -> Complex64 {
    let (x, y) = (z.re, z.im);
    let t = Complex64::new(y, -x);
    let s = x.abs() + y;

    if s >= 15.0 {
        // Region I
        t * 0.5641896 / (0.5 + t * t)
    } else if s >= 5.5 {
        // Region II
        let u = t * t;
        t * (1.410474 + u * 0.5641896) / (0.75 + u * (3.0 + u))
    } else if y >= 0.195 * x.abs() - 0.176 {
        // Region III
        (16.4955 + t * (20.20933 + t * (11.96482 + t * (3.778987 + t * 0.5642236))))
            / (16.4955 + t * (38.82363 + t * (39.27121 + t * (21.69274 + t * (6.699398 + t)))))
    } else {
        // Region IV
        let u = t * t;
        let numerator = 36183.31
            - u * (3321.9905
                - u * (1540.787 - u * (219.0313 - u * (35.76683 - u * (1.320522 - u * 0.56419)))));
        let denominator = 32066.6
            - u * (24322.84
                - u * (9022.228
                    - u * (2186.181 - u * (364.2191 - u * (61.57037 - u * (1.841439 - u))))));
        u.exp() - t * numerator / denominator
    }
}

/// Convolution of a centered normal distribution (standard deviation `sigma`)
/// with a centered Cauchy distribution (half width `gamma`), evaluated at `x`.
pub fn voigt_profile(x: f64, sigma: f64, gamma: f64) -> f64 {
    match (sigma > 0.0, gamma > 0.0) {
        (false, false) => {
            if x == 0.0 { f64::INFINITY } else { 0.0 }
        }
        (false, true) => gamma / (PI * (x * x + gamma * gamma)),
        (true, false) => normal_pdf(x / sigma) / sigma,
        (true, true) => {
            let z = Complex64::new(x, gamma) / (sigma * SQRT_2);
            faddeeva(z).re / (sigma * (2.0 * PI).sqrt())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_faddeeva_on_imaginary_axis() {
        // w(iy) = exp(y^2) erfc(y) is real
        let w = faddeeva(Complex64::new(0.0, 1.0));
        assert_relative_eq!(w.re, 0.42758357615580705, max_relative = 1e-4);
        assert!(w.im.abs() < 1e-6);
    }

    #[test]
    fn test_voigt_profile_reference_values() {
        assert_relative_eq!(voigt_profile(0.0, 1.0, 1.0), 0.2087092805203676, max_relative = 1e-5);
        assert_relative_eq!(voigt_profile(1.0, 1.0, 1.0), 0.1657956626891665, max_relative = 1e-5);
        assert_relative_eq!(
            voigt_profile(3.0, 0.5, 0.1),
            0.0038779077624469384,
            max_relative = 1e-4
        );
    }

    #[test]
    fn test_voigt_profile_is_symmetric() {
        for &x in &[0.3, 2.0, 7.5, 40.0] {
            assert_relative_eq!(
                voigt_profile(x, 0.8, 0.3),
                voigt_profile(-x, 0.8, 0.3),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_voigt_profile_limits() {
        let lorentz = voigt_profile(0.5, 0.0, 2.0);
        assert_relative_eq!(lorentz, 2.0 / (PI * 4.25), max_relative = 1e-14);
        let gauss = voigt_profile(0.5, 2.0, 0.0);
        assert_relative_eq!(gauss, normal_pdf(0.25) / 2.0, max_relative = 1e-14);
        // A tiny Lorentzian component leaves the Gaussian unchanged
        assert_relative_eq!(voigt_profile(0.5, 2.0, 1e-9), gauss, max_relative = 1e-4);
        assert_eq!(voigt_profile(1.0, 0.0, 0.0), 0.0);
    }
}
