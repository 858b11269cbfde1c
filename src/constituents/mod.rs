mod ame2020;
mod densities;
mod element;
mod element_symbol;
mod isotope;
mod isotopic_compositions;
mod mass_model;
mod nist_elements;
mod state;

pub use ame2020::AtomicMassTable;
pub use densities::{density, read_densities, GEANT4_DENSITIES};
pub use element::{Element, NATURAL_ELEMENTS};
pub use element_symbol::ElementSymbol;
pub use isotope::Isotope;
pub use isotopic_compositions::{isotopic_composition, reference_mass_number, ISOTOPIC_COMPOSITIONS};
pub use mass_model::{binding_energy, semi_empirical_atomic_mass};
pub use nist_elements::{NistElementData, NistIsotopeRecord};
pub use state::{Parity, State};
