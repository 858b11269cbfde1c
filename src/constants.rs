//=====================================================================
// Physical constants (CODATA 2018). Energies in MeV, lengths in fm.
//=====================================================================

/// Reduced Planck constant times the speed of light in MeV fm.
pub const HBAR_C: f64 = 197.3269804;

/// Electron rest energy in MeV.
pub const ELECTRON_MASS: f64 = 0.51099895000;

/// Fine-structure constant.
pub const FINE_STRUCTURE: f64 = 7.2973525693e-3;

/// Classical electron radius in fm.
pub const CLASSICAL_ELECTRON_RADIUS: f64 = FINE_STRUCTURE * HBAR_C / ELECTRON_MASS;

/// Boltzmann constant in eV/K.
pub const BOLTZMANN_EV_PER_K: f64 = 8.617333262e-5;

/// Boltzmann constant in MeV/K.
pub const BOLTZMANN_MEV_PER_K: f64 = BOLTZMANN_EV_PER_K * 1e-6;

/// Atomic mass unit in MeV.
pub const ATOMIC_MASS_UNIT_MEV: f64 = 931.49410242;

/// Atomic mass unit in kg.
pub const ATOMIC_MASS_UNIT_KG: f64 = 1.66053906660e-27;

/// Mass of the hydrogen atom in u.
pub const HYDROGEN_MASS: f64 = 1.00782503223;

/// Neutron mass in u.
pub const NEUTRON_MASS: f64 = 1.00866491595;

/// Square centimeters to square femtometers.
pub const CM2_TO_FM2: f64 = 1e26;
