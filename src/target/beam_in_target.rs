use std::sync::Arc;

use crate::constants::ATOMIC_MASS_UNIT_KG;
use crate::cross_section::CrossSection;
use crate::error::{Result, RiesError};
use crate::integration::{quad_partition, quad_partition_1d, QuadOptions, QuadResult};

/// Areal density in atoms/fm^2 of a target with density `density`
/// (g/cm^3), thickness `thickness` (cm) and atomic mass `amu` (u).
pub fn areal_density(density: f64, thickness: f64, amu: f64) -> f64 {
    density * thickness / (amu * ATOMIC_MASS_UNIT_KG * 1e3) * 1e-26
}

//=====================================================================
// Photon beam traversing a homogeneous target. The beam is attenuated
// by resonant absorption (sigma) and by nonresonant processes (kappa),
// both in fm^2/atom. Depths are areal densities in atoms/fm^2.
//=====================================================================
#[derive(Clone)]
pub struct BeamInTarget {
    pub resonant: Arc<dyn CrossSection>,
    pub attenuation: Arc<dyn CrossSection>,
    pub options: QuadOptions,
}

impl BeamInTarget {
    pub fn new(resonant: Arc<dyn CrossSection>, attenuation: Arc<dyn CrossSection>) -> Self {
        Self {
            resonant,
            attenuation,
            options: QuadOptions::default(),
        }
    }

    pub fn with_options(mut self, options: QuadOptions) -> Self {
        self.options = options;
        self
    }

    /// Fraction of the incident photons with energy `energy` that reach
    /// the depth `depth`.
    pub fn photon_flux_density(&self, depth: f64, energy: f64) -> f64 {
        (-(self.attenuation.evaluate(energy) + self.resonant.evaluate(energy)) * depth).exp()
    }

    /// Resonantly absorbed photons per unit depth.
    pub fn resonance_absorption_density(&self, depth: f64, energy: f64) -> f64 {
        self.resonant.evaluate(energy) * self.photon_flux_density(depth, energy)
    }

    /// Resonance absorption density integrated over the target thickness
    /// `areal_density`.
    pub fn absorbed_fraction(&self, energy: f64, areal_density: f64) -> f64 {
        let sigma = self.resonant.evaluate(energy);
        let total = sigma + self.attenuation.evaluate(energy);
        if total == 0.0 {
            return 0.0;
        }
        sigma / total * -(-total * areal_density).exp_m1()
    }

    /// Absorbed fraction integrated over the energies of `energy_grid`,
    /// in MeV. Each interval of the grid is integrated separately.
    pub fn energy_integrated_absorption(
        &self,
        energy_grid: &[f64],
        areal_density: f64,
    ) -> Result<QuadResult> {
        check_depth(areal_density)?;
        quad_partition_1d(
            &|energy| self.absorbed_fraction(energy, areal_density),
            energy_grid,
            &self.options,
        )
    }

    /// Same as `energy_integrated_absorption`, with the depth integral
    /// done numerically.
    pub fn energy_and_depth_integrated_absorption(
        &self,
        energy_grid: &[f64],
        areal_density: f64,
    ) -> Result<QuadResult> {
        check_depth(areal_density)?;
        quad_partition(
            &|x: &[f64]| self.resonance_absorption_density(x[1], x[0]),
            energy_grid,
            &[(0.0, areal_density)],
            &self.options,
        )
    }

    /// Reaction rate for an incident beam with the spectral flux
    /// `spectral_flux` (photons per MeV and unit time).
    pub fn reaction_rate<F>(
        &self,
        spectral_flux: &F,
        energy_grid: &[f64],
        areal_density: f64,
    ) -> Result<QuadResult>
    where
        F: Fn(f64) -> f64 + Sync,
    {
        check_depth(areal_density)?;
        quad_partition_1d(
            &|energy| spectral_flux(energy) * self.absorbed_fraction(energy, areal_density),
            energy_grid,
            &self.options,
        )
    }
}

fn check_depth(areal_density: f64) -> Result<()> {
    if areal_density.is_nan() || areal_density < 0.0 {
        return Err(RiesError::InvalidArgument(format!(
            "areal density must not be negative, got {}",
            areal_density
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::constituents::{Parity, State};
    use crate::cross_section::ConstantCrossSection;
    use crate::integration::quad;
    use crate::resonance::{GridRange, MaxwellBoltzmann, Resonance, Transition, Voigt};

    fn voigt() -> Voigt {
        let transition = Transition::new(
            State::ground("0^+_1", 0, Parity::Positive),
            State::excited("1^+_1", 2, Parity::Positive, 1.0, [("0^+_1", 1e-6)]).unwrap(),
        );
        Resonance::voigt(transition, &MaxwellBoltzmann::new(10.0, 100.0)).unwrap()
    }

    // Target in which the nonresonant attenuation is a fifth of the
    // resonant attenuation at the maximum of a Gaussian resonance
    fn beam_in_target() -> (BeamInTarget, Voigt, f64) {
        let sigma = voigt();
        let maxwell_boltzmann = MaxwellBoltzmann::new(10.0, 100.0);
        let doppler_width = maxwell_boltzmann.doppler_width(sigma.resonance_energy());
        let peak = sigma.evaluate_relative(0.0) * 1e-6;
        let k = 0.5 * std::f64::consts::PI.sqrt() * peak / doppler_width;
        let beam =
            BeamInTarget::new(Arc::new(sigma.clone()), Arc::new(ConstantCrossSection(0.2 * k)));
        (beam, sigma, k)
    }

    #[test]
    fn test_flux_density() {
        let (beam, sigma, k) = beam_in_target();
        let energy = sigma.resonance_energy();
        assert_eq!(beam.photon_flux_density(0.0, energy), 1.0);
        assert_relative_eq!(
            beam.photon_flux_density(1.0 / k, energy),
            (-(0.2 * k + sigma.evaluate(energy)) / k).exp(),
            max_relative = 1e-14
        );
        // Far from the resonance only kappa attenuates
        assert_relative_eq!(
            beam.photon_flux_density(1.0 / k, 0.5),
            (-0.2_f64).exp(),
            max_relative = 1e-9
        );
        assert_eq!(beam.resonance_absorption_density(0.0, energy), sigma.evaluate(energy));
    }

    #[test]
    fn test_absorbed_fraction() {
        let (beam, sigma, k) = beam_in_target();
        let depth = 1.0 / k;
        for offset in [0.0, 1e-5, -3e-5] {
            let energy = sigma.resonance_energy() + offset;
            let density = |z: f64| beam.resonance_absorption_density(z, energy);
            let numerical = quad(density, 0.0, depth, &QuadOptions::default());
            assert_relative_eq!(
                beam.absorbed_fraction(energy, depth),
                numerical.value,
                max_relative = 1e-10
            );
        }
        assert_eq!(beam.absorbed_fraction(sigma.resonance_energy(), 0.0), 0.0);

        let vacuum = BeamInTarget::new(
            Arc::new(ConstantCrossSection(0.0)),
            Arc::new(ConstantCrossSection(0.0)),
        );
        assert_eq!(vacuum.absorbed_fraction(1.0, 1.0), 0.0);
    }

    #[test]
    fn test_depth_integral() {
        let (beam, sigma, k) = beam_in_target();
        let grid = sigma.probability_grid(GridRange::Coverage(0.98), 51).unwrap();
        let analytic = beam.energy_integrated_absorption(&grid, 1.0 / k).unwrap();
        let numerical = beam.energy_and_depth_integrated_absorption(&grid, 1.0 / k).unwrap();
        assert_relative_eq!(analytic.value, numerical.value, max_relative = 1e-6);
        // Self-absorption, less than the thin-target value
        assert!(analytic.value < sigma.energy_integrated_cross_section() / k);
        assert!(beam.energy_integrated_absorption(&grid, -1.0).is_err());
        assert!(beam.energy_integrated_absorption(&grid[..1], 1.0).is_err());
    }

    #[test]
    fn test_thin_target() {
        let (beam, sigma, k) = beam_in_target();
        let depth = 1e-6 / k;
        let grid = sigma.equidistant_probability_grid((0.99, 1.01), 201).unwrap();
        let absorbed = beam.energy_integrated_absorption(&grid, depth).unwrap();
        assert_relative_eq!(
            absorbed.value,
            sigma.energy_integrated_cross_section() * depth,
            max_relative = 1e-3
        );
    }

    #[test]
    fn test_reaction_rate() {
        let (beam, sigma, k) = beam_in_target();
        let grid = sigma.probability_grid(GridRange::Coverage(0.98), 51).unwrap();
        let absorbed = beam.energy_integrated_absorption(&grid, 1.0 / k).unwrap();
        let unit_rate = beam.reaction_rate(&|_| 1.0, &grid, 1.0 / k).unwrap();
        assert_eq!(unit_rate, absorbed);

        // The absolute tolerance of the quadrature does not scale with the flux
        let flux = 1e8;
        let rate = beam.reaction_rate(&|_| flux, &grid, 1.0 / k).unwrap();
        assert_relative_eq!(rate.value, flux * absorbed.value, max_relative = 1e-7);
    }

    #[test]
    fn test_areal_density() {
        // 1 cm of boron
        assert_relative_eq!(areal_density(2.34, 1.0, 10.81), 1.30359e-3, max_relative = 1e-4);
    }
}
