use std::f64::consts::PI;

use crate::constants::{CLASSICAL_ELECTRON_RADIUS, ELECTRON_MASS};
use crate::cross_section::CrossSection;

//=====================================================================
// Compton scattering of photons on the free electrons of an atom
// (Klein-Nishina formula). Energies in MeV, angles in rad, cross
// sections in fm^2 per atom. Polarized cross sections are given for a
// linearly polarized beam, with the azimuthal angle `phi` measured
// relative to the polarization plane.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KleinNishina {
    pub electrons_per_atom: f64,
}

impl Default for KleinNishina {
    fn default() -> Self {
        Self {
            electrons_per_atom: 1.0,
        }
    }
}

impl KleinNishina {
    pub fn new(electrons_per_atom: f64) -> Self {
        Self { electrons_per_atom }
    }

    /// Smallest energy of a scattered photon (scattering angle pi).
    pub fn compton_edge(&self, energy: f64) -> f64 {
        energy / (1.0 + 2.0 * energy / ELECTRON_MASS)
    }

    /// Scattering angle at which a photon of energy `energy` is scattered
    /// to `scattered_energy`.
    pub fn theta(&self, energy: f64, scattered_energy: f64) -> f64 {
        (1.0 - (energy / scattered_energy - 1.0) * ELECTRON_MASS / energy)
            .clamp(-1.0, 1.0)
            .acos()
    }

    /// Ratio of the scattered and the incident photon energy.
    pub fn ep_over_e(&self, energy: f64, theta: f64) -> f64 {
        1.0 / (1.0 + energy / ELECTRON_MASS * (1.0 - theta.cos()))
    }

    fn prefactor(&self) -> f64 {
        0.5 * self.electrons_per_atom * CLASSICAL_ELECTRON_RADIUS * CLASSICAL_ELECTRON_RADIUS
    }

    pub fn cs_diff_domega(&self, energy: f64, theta: f64, phi: f64) -> f64 {
        let k = self.ep_over_e(energy, theta);
        let sin_theta = theta.sin();
        let cos_phi = phi.cos();
        self.prefactor() * k * k * (k + 1.0 / k - 2.0 * sin_theta * sin_theta * cos_phi * cos_phi)
    }

    pub fn cs_diff_domega_unpolarized(&self, energy: f64, theta: f64) -> f64 {
        let k = self.ep_over_e(energy, theta);
        let sin_theta = theta.sin();
        self.prefactor() * k * k * (k + 1.0 / k - sin_theta * sin_theta)
    }

    /// Differential cross section in the polar angle, i.e. integrated over phi.
    pub fn cs_diff_dtheta(&self, energy: f64, theta: f64) -> f64 {
        2.0 * PI * theta.sin() * self.cs_diff_domega_unpolarized(energy, theta)
    }

    pub fn cs_diff_dep_dphi(&self, energy: f64, scattered_energy: f64, phi: f64) -> f64 {
        let theta = self.theta(energy, scattered_energy);
        self.cs_diff_domega(energy, theta, phi) * ELECTRON_MASS
            / (scattered_energy * scattered_energy)
    }

    /// Energy spectrum of the scattered photons.
    pub fn cs_diff_dep(&self, energy: f64, scattered_energy: f64) -> f64 {
        let theta = self.theta(energy, scattered_energy);
        2.0 * PI * self.cs_diff_domega_unpolarized(energy, theta) * ELECTRON_MASS
            / (scattered_energy * scattered_energy)
    }

    /// Total cross section. The closed form cancels catastrophically for
    /// small energies, where the expansion around the Thomson cross
    /// section is used instead.
    pub fn cs_total(&self, energy: f64) -> f64 {
        let x = energy / ELECTRON_MASS;
        let scale = self.electrons_per_atom * CLASSICAL_ELECTRON_RADIUS * CLASSICAL_ELECTRON_RADIUS;
        if x < 1e-3 {
            let series = 1.0 - 2.0 * x + 26.0 / 5.0 * x * x - 133.0 / 10.0 * x.powi(3);
            return scale * 8.0 * PI / 3.0 * series;
        }
        let one_plus_2x = 1.0 + 2.0 * x;
        scale * PI / x.powi(3)
            * (2.0 * x * (2.0 + x * (1.0 + x) * (8.0 + x)) / (one_plus_2x * one_plus_2x)
                + ((x - 2.0) * x - 2.0) * one_plus_2x.ln())
    }
}

impl CrossSection for KleinNishina {
    fn evaluate(&self, energy: f64) -> f64 {
        self.cs_total(energy)
    }
}
