use crate::constants::{ATOMIC_MASS_UNIT_MEV, HYDROGEN_MASS, NEUTRON_MASS};

// Liquid-drop coefficients in MeV
const A_VOLUME: f64 = 15.75;
const A_SURFACE: f64 = 17.8;
const A_COULOMB: f64 = 0.711;
const A_ASYMMETRY: f64 = 23.7;
const A_PAIRING: f64 = 11.18;

/// Nuclear binding energy in MeV from the Bethe-Weizsaecker formula.
pub fn binding_energy(z: u8, a: u32) -> f64 {
    if a == 0 {
        return 0.0;
    }
    let z_f = z as f64;
    let a_f = a as f64;
    let n = a as i64 - z as i64;

    let pairing = match (z % 2, n.rem_euclid(2)) {
        (0, 0) => A_PAIRING / a_f.sqrt(),
        (1, 1) => -A_PAIRING / a_f.sqrt(),
        _ => 0.0,
    };

    A_VOLUME * a_f - A_SURFACE * a_f.powf(2.0 / 3.0) - A_COULOMB * z_f * (z_f - 1.0) / a_f.cbrt()
        - A_ASYMMETRY * (a_f - 2.0 * z_f).powi(2) / a_f
        + pairing
}

/// Atomic mass in u from the liquid-drop binding energy.
///
/// Deviates from measured masses by a few 1e-3 u for medium and heavy
/// nuclei. Only meant as a stand-in where no evaluated mass is at hand.
pub fn semi_empirical_atomic_mass(z: u8, a: u32) -> f64 {
    match (z, a) {
        (_, 0) => 0.0,
        (0, 1) => NEUTRON_MASS,
        (1, 1) => HYDROGEN_MASS,
        _ => {
            let n = a.saturating_sub(z as u32) as f64;
            z as f64 * HYDROGEN_MASS + n * NEUTRON_MASS
                - binding_energy(z, a) / ATOMIC_MASS_UNIT_MEV
        }
    }
}
