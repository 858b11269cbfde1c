use crate::math::{newton_bisect, normal_sigma_from_fwhm, RootOptions};
use crate::probability::Probability;
use crate::resonance::{Cauchy, LineShape, Normal};

//=====================================================================
// Pseudo-Voigt profile in the parametrization of Thompson, Cox and
// Hastings: a mixture of a normal and a Cauchy distribution with the
// same full width at half maximum, which approximates the convolution
// of a Gaussian and a Lorentzian to about 1 %.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PseudoVoigtProfile {
    pub location: f64,
    /// Full width at half maximum of the mixture.
    pub fwhm: f64,
    /// Weight of the Cauchy component.
    pub eta: f64,
    normal: Normal,
    cauchy: Cauchy,
}

impl PseudoVoigtProfile {
    /// Profile for a Gaussian and a Lorentzian with the full widths at
    /// half maximum `gaussian_fwhm` and `lorentzian_fwhm`.
    pub fn new(location: f64, gaussian_fwhm: f64, lorentzian_fwhm: f64) -> Self {
        let g = gaussian_fwhm;
        let l = lorentzian_fwhm;
        let fwhm = (g.powi(5)
            + 2.69269 * g.powi(4) * l
            + 2.42843 * g.powi(3) * l.powi(2)
            + 4.47163 * g.powi(2) * l.powi(3)
            + 0.07842 * g * l.powi(4)
            + l.powi(5))
        .powf(0.2);
        let ratio = l / fwhm;
        let eta = 1.36603 * ratio - 0.47719 * ratio.powi(2) + 0.11116 * ratio.powi(3);

        Self {
            location,
            fwhm,
            eta,
            normal: Normal {
                mean: location,
                sigma: normal_sigma_from_fwhm(fwhm),
            },
            cauchy: Cauchy {
                location,
                scale: 0.5 * fwhm,
            },
        }
    }

    pub fn normal(&self) -> &Normal {
        &self.normal
    }

    pub fn cauchy(&self) -> &Cauchy {
        &self.cauchy
    }

    /// The quantiles of the normal and the Cauchy component, in
    /// ascending order.
    pub fn quantile_bracket(&self, quantile: Probability) -> (f64, f64) {
        let normal_quantile = self.normal.ppf(quantile);
        let cauchy_quantile = self.cauchy.ppf(quantile);
        if cauchy_quantile <= normal_quantile {
            (cauchy_quantile, normal_quantile)
        } else {
            (normal_quantile, cauchy_quantile)
        }
    }

    pub(crate) fn root_options(&self, max_iterations: usize) -> RootOptions {
        RootOptions {
            x_tolerance: (1e-9 * self.fwhm).max(4.0 * f64::EPSILON * self.location.abs()),
            max_iterations,
        }
    }
}

impl LineShape for PseudoVoigtProfile {
    fn pdf(&self, energy: f64) -> f64 {
        (1.0 - self.eta) * self.normal.pdf(energy) + self.eta * self.cauchy.pdf(energy)
    }

    fn cdf(&self, energy: f64) -> f64 {
        (1.0 - self.eta) * self.normal.cdf(energy) + self.eta * self.cauchy.cdf(energy)
    }

    /// The mixture cdf has no closed-form inverse. Newton's method starts
    /// from the mixture of the component quantiles. Since the mixture cdf
    /// lies between the component cdfs, the component quantiles bracket
    /// the root, which is searched by bisection if Newton's method fails.
    fn ppf(&self, quantile: Probability) -> f64 {
        let p = quantile.value();
        if p <= 0.0 {
            return f64::NEG_INFINITY;
        }
        if p >= 1.0 {
            return f64::INFINITY;
        }

        let bracket = self.quantile_bracket(quantile);
        let start =
            (1.0 - self.eta) * self.normal.ppf(quantile) + self.eta * self.cauchy.ppf(quantile);
        let root = newton_bisect(
            |energy| self.cdf(energy) - p,
            |energy| self.pdf(energy),
            start,
            bracket,
            &self.root_options(50),
            &self.root_options(200),
        );
        root.unwrap_or_else(|err| {
            log::warn!("Pseudo-Voigt quantile {} did not converge ({}), using {}", p, err, start);
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
    use approx::assert_relative_eq;

    #[test]
    fn test_limiting_cases() {
        let gauss_only = PseudoVoigtProfile::new(0.0, 2.0, 0.0);
        assert_relative_eq!(gauss_only.fwhm, 2.0, max_relative = 1e-14);
        assert_eq!(gauss_only.eta, 0.0);

        let lorentz_only = PseudoVoigtProfile::new(0.0, 0.0, 2.0);
        assert_relative_eq!(lorentz_only.fwhm, 2.0, max_relative = 1e-14);
        assert_relative_eq!(lorentz_only.eta, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_half_maximum() {
        let profile = PseudoVoigtProfile::new(3.0, 1.0, 0.5);
        assert!(profile.fwhm > 1.0 && profile.fwhm < 1.5);
        assert!(profile.eta > 0.0 && profile.eta < 1.0);
        // Both components have the same FWHM, and so has the mixture
        assert_relative_eq!(
            profile.pdf(3.0 + 0.5 * profile.fwhm),
            0.5 * profile.pdf(3.0),
            max_relative = 1e-12
        );
        assert_eq!(profile.cauchy().scale, 0.5 * profile.fwhm);
    }

    #[test]
    fn test_ppf() {
        let resonance_energy = 1e6;
        let profile = PseudoVoigtProfile::new(resonance_energy, 1.0, 100.0);
        assert_relative_eq!(profile.ppf(Probability(0.5)), resonance_energy, max_relative = 1e-12);

        for p in [0.01, 0.2, 0.7, 0.999] {
            let energy = profile.ppf(Probability(p));
            assert_relative_eq!(profile.cdf(energy), p, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_ppf_far_tail() {
        let profile = PseudoVoigtProfile::new(1e6, 1.0, 100.0);
        let p = Probability(1e-7);
        let energy = profile.ppf(p);
        // Bracketed by the quantiles of the components
        assert!(energy > profile.cauchy().ppf(p));
        assert!(energy < profile.normal().ppf(p));
        assert_relative_eq!(profile.cdf(energy), p.value(), max_relative = 1e-6);
    }
}
