use std::sync::Once;

use crate::constituents::ElementSymbol;
use crate::error::{Result, RiesError};
use crate::integration::{quad, QuadOptions};

/// Debye temperature in K that is used for all elements.
pub const DEFAULT_DEBYE_TEMPERATURE: f64 = 500.0;

static DEFAULT_DEBYE_TEMPERATURE_WARNING: Once = Once::new();

/// Effective temperature of nuclei in a Debye solid.
///
/// In the Debye model the nuclei move with a Maxwell-Boltzmann velocity
/// distribution at the effective temperature
///
/// T_eff = 3 (T / T_D)^3 T \int_0^{T_D / T} t^3 (1 / (e^t - 1) + 1/2) dt,
///
/// which approaches the thermodynamic temperature T for T >> T_D and
/// 3/8 T_D (zero-point motion) for T << T_D.
pub fn effective_temperature_debye(temperature: f64, debye_temperature: f64) -> Result<f64> {
    let positive = |value: f64| value > 0.0;
    if !positive(temperature) || !positive(debye_temperature) {
        return Err(RiesError::InvalidArgument(format!(
            "temperatures must be positive, got T = {} K and T_D = {} K",
            temperature, debye_temperature
        )));
    }

    let integrand = |t: f64| {
        if t == 0.0 {
            0.0
        } else {
            t.powi(3) / t.exp_m1() + 0.5 * t.powi(3)
        }
    };
    let integral = quad(integrand, 0.0, debye_temperature / temperature, &QuadOptions::default());

    Ok(3.0 * (temperature / debye_temperature).powi(3) * temperature * integral.value)
}

/// Debye temperature of an element at room temperature.
///
/// No compilation is included yet, every element gets the same value.
pub fn room_temperature_debye_temperature(symbol: ElementSymbol) -> f64 {
    DEFAULT_DEBYE_TEMPERATURE_WARNING.call_once(|| {
        log::warn!(
            "Using a Debye temperature of {} K for {} and all other elements",
            DEFAULT_DEBYE_TEMPERATURE,
            symbol
        );
    });
    DEFAULT_DEBYE_TEMPERATURE
}
