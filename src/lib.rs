pub mod constants;
pub mod constituents;
pub mod cross_section;
pub mod error;
pub mod integration;
pub mod interpolation;
pub mod math;
pub mod nonresonant;
pub mod probability;
pub mod resonance;
pub mod target;
pub mod utils;

#[cfg(feature = "plot")]
pub mod plot;

pub use constituents::{Element, ElementSymbol, Isotope, Parity, State, NATURAL_ELEMENTS};
pub use cross_section::{ConstantCrossSection, CrossSection, CrossSectionSum};
pub use error::{Result, RiesError};
pub use nonresonant::{Attenuation, AttenuationUnit, KleinNishina, XrmacLibrary};
pub use resonance::{
    MaxwellBoltzmann, PhotoabsorptionCrossSection, Recoil, Resonance, ResonanceModel, Transition,
};
pub use target::BeamInTarget;
