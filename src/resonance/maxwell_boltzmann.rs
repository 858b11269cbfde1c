use crate::constants::{ATOMIC_MASS_UNIT_MEV, BOLTZMANN_MEV_PER_K};

/// Maxwell-Boltzmann velocity distribution of nuclei with mass `amu` (in u)
/// at the effective temperature `effective_temperature` (in K).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxwellBoltzmann {
    pub amu: f64,
    pub effective_temperature: f64,
}

impl MaxwellBoltzmann {
    pub fn new(amu: f64, effective_temperature: f64) -> Self {
        Self {
            amu,
            effective_temperature,
        }
    }

    /// Doppler width of a resonance at `resonance_energy`. The Doppler
    /// broadened line is a normal distribution with standard deviation
    /// `doppler_width / sqrt(2)`.
    pub fn doppler_width(&self, resonance_energy: f64) -> f64 {
        let thermal_energy = BOLTZMANN_MEV_PER_K * self.effective_temperature;
        resonance_energy * (2.0 * thermal_energy / (self.amu * ATOMIC_MASS_UNIT_MEV)).sqrt()
    }

    /// Effective temperature that results in the Doppler width
    /// `doppler_width` for a resonance at `resonance_energy`.
    pub fn effective_temperature_from_doppler_width(
        doppler_width: f64,
        amu: f64,
        resonance_energy: f64,
    ) -> f64 {
        (doppler_width / resonance_energy).powi(2) * amu * ATOMIC_MASS_UNIT_MEV
            / (2.0 * BOLTZMANN_MEV_PER_K)
    }
}
