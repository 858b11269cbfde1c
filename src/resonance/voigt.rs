use std::f64::consts::{LN_2, PI, SQRT_2};

use crate::integration::gauss_kronrod_15;
use crate::math::{newton_bisect, voigt_profile};
use crate::probability::Probability;
use crate::resonance::{LineShape, PseudoVoigtProfile};

// Breakpoints of the cdf integration in units of the FWHM: the first one
// at 1/8, then doubling up to 2^40, beyond which only the Lorentzian tail
// gamma / (pi x^2) is left.
const FIRST_BREAKPOINT: f64 = 0.125;
const TAIL_BREAKPOINT: f64 = 1_099_511_627_776.0;

//=====================================================================
// Voigt profile: a Cauchy distribution with half width `gamma`
// convolved with a normal distribution with standard deviation `sigma`.
// The cdf integrates the density with a 15-point Kronrod rule on
// intervals that double in length away from the center, the ppf starts
// from the quantile of the pseudo-Voigt approximation with the same
// Gaussian and Lorentzian widths.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoigtProfile {
    pub location: f64,
    pub sigma: f64,
    pub gamma: f64,
    pseudo_voigt: PseudoVoigtProfile,
    /// Integral of the density from the center to infinity.
    half_mass: f64,
}

impl VoigtProfile {
    pub fn new(location: f64, sigma: f64, gamma: f64) -> Self {
        let gaussian_fwhm = 2.0 * SQRT_2 * LN_2.sqrt() * sigma;
        let lorentzian_fwhm = 2.0 * gamma;
        let mut profile = Self {
            location,
            sigma,
            gamma,
            pseudo_voigt: PseudoVoigtProfile::new(location, gaussian_fwhm, lorentzian_fwhm),
            half_mass: 0.5,
        };
        if profile.has_width() {
            let tail = TAIL_BREAKPOINT * profile.pseudo_voigt.fwhm;
            profile.half_mass = profile.mass_from_center(tail) + gamma / (PI * tail);
        }
        profile
    }

    pub fn pseudo_voigt(&self) -> &PseudoVoigtProfile {
        &self.pseudo_voigt
    }

    fn has_width(&self) -> bool {
        self.pseudo_voigt.fwhm > 0.0 && self.pseudo_voigt.fwhm.is_finite()
    }

    // Integral of the density over [location, location + distance]
    fn mass_from_center(&self, distance: f64) -> f64 {
        let density = |offset: f64| voigt_profile(offset, self.sigma, self.gamma);
        let mut mass = 0.0;
        let mut lower = 0.0;
        let mut upper = FIRST_BREAKPOINT * self.pseudo_voigt.fwhm;
        while upper < distance {
            mass += gauss_kronrod_15(&density, lower, upper).value;
            lower = upper;
            upper *= 2.0;
        }
        mass + gauss_kronrod_15(&density, lower, distance).value
    }

    // Widen the bracket of the pseudo-Voigt components until it contains
    // the quantile `p` of the profile.
    fn quantile_bracket(&self, quantile: Probability) -> (f64, f64) {
        let p = quantile.value();
        let (mut lower, mut upper) = self.pseudo_voigt.quantile_bracket(quantile);
        let mut step = self.pseudo_voigt.fwhm;
        for _ in 0..64 {
            if self.cdf(lower) <= p {
                break;
            }
            lower -= step;
            step *= 2.0;
        }
        step = self.pseudo_voigt.fwhm;
        for _ in 0..64 {
            if self.cdf(upper) >= p {
                break;
            }
            upper += step;
            step *= 2.0;
        }
        (lower, upper)
    }
}

impl LineShape for VoigtProfile {
    fn pdf(&self, energy: f64) -> f64 {
        voigt_profile(energy - self.location, self.sigma, self.gamma)
    }

    fn cdf(&self, energy: f64) -> f64 {
        if !self.has_width() {
            return self.pseudo_voigt.cdf(energy);
        }
        if energy.is_nan() {
            return f64::NAN;
        }

        let offset = energy - self.location;
        let distance = offset.abs();
        let mass = if distance >= TAIL_BREAKPOINT * self.pseudo_voigt.fwhm {
            self.half_mass - self.gamma / (PI * distance)
        } else {
            self.mass_from_center(distance)
        };
        let fraction = (0.5 * mass / self.half_mass).min(0.5);
        if offset >= 0.0 {
            0.5 + fraction
        } else {
            0.5 - fraction
        }
    }

    fn ppf(&self, quantile: Probability) -> f64 {
        let p = quantile.value();
        if p <= 0.0 {
            return f64::NEG_INFINITY;
        }
        if p >= 1.0 {
            return f64::INFINITY;
        }

        let start = self.pseudo_voigt.ppf(quantile);
        if !self.has_width() {
            return start;
        }
        let normalization = 2.0 * self.half_mass;
        let root = newton_bisect(
            |energy| self.cdf(energy) - p,
            |energy| self.pdf(energy) / normalization,
            start,
            self.quantile_bracket(quantile),
            &self.pseudo_voigt.root_options(50),
            &self.pseudo_voigt.root_options(200),
        );
        root.unwrap_or_else(|err| {
            log::warn!(
                "Voigt quantile {} did not converge ({}), using the pseudo-Voigt quantile {}",
                p,
                err,
                start
            );
            start
        })
    }

    fn location(&self) -> f64 {
        self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::integration::{quad, QuadOptions};
    use crate::resonance::Cauchy;

    fn tight() -> QuadOptions {
        QuadOptions {
            eps_abs: 1e-14,
            eps_rel: 1e-12,
            limit: 500,
        }
    }

    #[test]
    fn test_pdf_close_to_pseudo_voigt() {
        let voigt = VoigtProfile::new(2.0, 0.1, 0.05);
        for &energy in &[2.0, 2.05, 2.1] {
            assert_relative_eq!(
                voigt.pdf(energy),
                voigt.pseudo_voigt().pdf(energy),
                max_relative = 2e-2
            );
        }
    }

    #[test]
    fn test_cdf_is_integral_of_pdf() {
        let voigt = VoigtProfile::new(2.0, 0.1, 0.05);
        assert_eq!(voigt.cdf(2.0), 0.5);
        assert_eq!(voigt.cdf(f64::INFINITY), 1.0);
        assert_eq!(voigt.cdf(f64::NEG_INFINITY), 0.0);
        for &energy in &[1.5, 1.9, 2.05, 2.3, 3.0, 10.0] {
            let (lower, upper) = if energy < 2.0 { (energy, 2.0) } else { (2.0, energy) };
            let mass = quad(|e| voigt.pdf(e), lower, upper, &tight()).value;
            assert_abs_diff_eq!((voigt.cdf(energy) - 0.5).abs(), mass, epsilon = 1e-6);
            assert_abs_diff_eq!(voigt.cdf(energy) + voigt.cdf(4.0 - energy), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_lorentzian_limit() {
        let voigt = VoigtProfile::new(0.0, 0.0, 1.0);
        let cauchy = Cauchy { location: 0.0, scale: 1.0 };
        for &energy in &[-100.0, -3.0, -0.5, 0.2, 1.0, 7.0, 1e3, 1e9, 1e15] {
            assert_abs_diff_eq!(voigt.cdf(energy), cauchy.cdf(energy), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_coverage_of_quartiles() {
        let voigt = VoigtProfile::new(2.0, 0.1, 0.05);
        let lower = voigt.ppf(Probability(0.25));
        let upper = voigt.ppf(Probability(0.75));
        assert_abs_diff_eq!(voigt.cdf(upper) - voigt.cdf(lower), 0.5, epsilon = 1e-9);
        let integral = quad(|energy| voigt.pdf(energy), lower, upper, &tight());
        assert_abs_diff_eq!(integral.value, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_ppf_far_tail() {
        let voigt = VoigtProfile::new(2.0, 0.1, 0.05);
        for p in [1e-6, 0.999999] {
            let energy = voigt.ppf(Probability(p));
            assert_relative_eq!(voigt.cdf(energy), p, max_relative = 1e-6);
        }
        assert_eq!(voigt.ppf(Probability(0.0)), f64::NEG_INFINITY);
        assert_eq!(voigt.ppf(Probability(1.0)), f64::INFINITY);
    }
}
