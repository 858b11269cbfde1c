mod debye_model;
mod line_shape;
mod maxwell_boltzmann;
mod photoabsorption;
mod pseudo_voigt;
mod recoil;
mod resonance;
mod voigt;

pub use debye_model::{
    effective_temperature_debye, room_temperature_debye_temperature, DEFAULT_DEBYE_TEMPERATURE,
};
pub use line_shape::{Cauchy, LineShape, Normal, Uniform};
pub use maxwell_boltzmann::MaxwellBoltzmann;
pub use photoabsorption::{PhotoabsorptionCrossSection, ResonanceModel};
pub use pseudo_voigt::PseudoVoigtProfile;
pub use recoil::Recoil;
pub use resonance::{
    BreitWigner, Gauss, GridRange, Kinematics, PseudoVoigt, Rectangular, Resonance, Transition,
    Voigt,
};
pub use voigt::VoigtProfile;
