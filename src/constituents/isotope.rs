use crate::constituents::{semi_empirical_atomic_mass, ElementSymbol, State};
use crate::error::Result;

//=====================================================================
// Isotope AX with its atomic mass in u and, optionally, its level
// scheme. Without a ground state the isotope takes part in nonresonant
// processes only.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct Isotope {
    pub z: u8,
    pub a: u32,
    /// Mass number and element symbol, e.g. `208Pb`.
    pub label: String,
    pub amu: f64,
    pub ground_state: Option<State>,
    pub excited_states: Vec<State>,
}

impl Isotope {
    pub fn new(z: u8, a: u32, amu: f64) -> Result<Self> {
        let symbol = ElementSymbol::from_z(z)?;
        Ok(Self {
            z,
            a,
            label: format!("{}{}", a, symbol),
            amu,
            ground_state: None,
            excited_states: Vec::new(),
        })
    }

    /// Isotope with a liquid-drop mass.
    pub fn semi_empirical(z: u8, a: u32) -> Result<Self> {
        Self::new(z, a, semi_empirical_atomic_mass(z, a))
    }

    pub fn with_level_scheme(mut self, ground_state: State, excited_states: Vec<State>) -> Self {
        self.ground_state = Some(ground_state);
        self.excited_states = excited_states;
        self
    }

    pub fn symbol(&self) -> Result<ElementSymbol> {
        ElementSymbol::from_z(self.z)
    }

    pub fn has_level_scheme(&self) -> bool {
        self.ground_state.is_some()
    }

    pub fn excited_state(&self, label: &str) -> Option<&State> {
        self.excited_states.iter().find(|state| state.label == label)
    }

    /// Excited states that can be populated by photoabsorption on the
    /// ground state, i.e. those with a partial width to the ground state.
    pub fn ground_state_transitions(&self) -> impl Iterator<Item = &State> {
        let ground_state_label = self.ground_state.as_ref().map(|state| state.label.as_str());
        self.excited_states.iter().filter(move |state| {
            ground_state_label
                .map(|label| state.partial_widths.contains_key(label))
                .unwrap_or(false)
        })
    }
}
