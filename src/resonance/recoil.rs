use crate::constants::ATOMIC_MASS_UNIT_MEV;

/// Recoil correction to the resonance energy.
///
/// Absorbing a photon transfers momentum to the nucleus, so the photon
/// has to carry slightly more energy than the level difference.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Recoil {
    /// Infinitely heavy nucleus.
    #[default]
    None,
    /// Free nucleus at rest with a mass of `amu` u.
    FreeNucleus { amu: f64 },
}

impl Recoil {
    /// Recoil-corrected resonance energy for a level difference in MeV.
    pub fn resonance_energy(&self, energy_difference: f64) -> f64 {
        match self {
            Recoil::None => energy_difference,
            Recoil::FreeNucleus { amu } => {
                energy_difference * (1.0 + energy_difference / (2.0 * amu * ATOMIC_MASS_UNIT_MEV))
            }
        }
    }
}
