use std::collections::HashMap;
use std::sync::Arc;

use crate::constituents::{Element, Isotope};
use crate::cross_section::{CrossSection, CrossSectionSum};
use crate::error::{Result, RiesError};
use crate::resonance::{MaxwellBoltzmann, Recoil, Resonance, Transition};

/// Line shape used for all resonances of an isotope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResonanceModel {
    Rectangular,
    BreitWigner,
    Gauss(MaxwellBoltzmann),
    PseudoVoigt(MaxwellBoltzmann),
    Voigt(MaxwellBoltzmann),
}

impl ResonanceModel {
    pub fn resonance(&self, transition: Transition) -> Result<Arc<dyn CrossSection>> {
        Ok(match self {
            ResonanceModel::Rectangular => Arc::new(Resonance::rectangular(transition)?),
            ResonanceModel::BreitWigner => Arc::new(Resonance::breit_wigner(transition)?),
            ResonanceModel::Gauss(maxwell_boltzmann) => {
                Arc::new(Resonance::gauss(transition, maxwell_boltzmann)?)
            }
            ResonanceModel::PseudoVoigt(maxwell_boltzmann) => {
                Arc::new(Resonance::pseudo_voigt(transition, maxwell_boltzmann)?)
            }
            ResonanceModel::Voigt(maxwell_boltzmann) => {
                Arc::new(Resonance::voigt(transition, maxwell_boltzmann)?)
            }
        })
    }
}

//=====================================================================
// Photoabsorption cross section of an isotope (sum over all resonances
// excited from the ground state) or of an element (abundance-weighted
// sum over its isotopes). Each component is labeled with the excited
// state or the isotope, respectively.
//=====================================================================
#[derive(Clone, Debug)]
pub struct PhotoabsorptionCrossSection {
    pub label: String,
    labels: Vec<String>,
    sum: CrossSectionSum,
}

impl PhotoabsorptionCrossSection {
    pub fn for_isotope(isotope: &Isotope, model: &ResonanceModel, recoil: Recoil) -> Result<Self> {
        let ground_state = isotope.ground_state.as_ref().ok_or_else(|| {
            RiesError::InvalidArgument(format!("{} has no level scheme", isotope.label))
        })?;

        let mut labels = Vec::new();
        let mut sum = CrossSectionSum::new();
        for state in isotope.ground_state_transitions() {
            let transition =
                Transition::new(ground_state.clone(), state.clone()).with_recoil(recoil);
            sum.push(1.0, model.resonance(transition)?);
            labels.push(state.label.clone());
        }

        Ok(Self {
            label: isotope.label.clone(),
            labels,
            sum,
        })
    }

    /// `models` assigns a line shape and a recoil correction to the label
    /// of every isotope with a level scheme. Isotopes without a level
    /// scheme do not contribute.
    pub fn for_element(
        element: &Element,
        models: &HashMap<String, (ResonanceModel, Recoil)>,
    ) -> Result<Self> {
        let mut labels = Vec::new();
        let mut sum = CrossSectionSum::new();
        let isotopes = element.isotopes.iter().filter(|(isotope, _)| isotope.has_level_scheme());
        for (isotope, abundance) in isotopes {
            let (model, recoil) = models.get(&isotope.label).ok_or_else(|| {
                let message = format!("no resonance model given for {}", isotope.label);
                RiesError::InvalidArgument(message)
            })?;
            sum.push(*abundance, Arc::new(Self::for_isotope(isotope, model, *recoil)?));
            labels.push(isotope.label.clone());
        }

        Ok(Self {
            label: element.symbol.to_string(),
            labels,
            sum,
        })
    }

    /// Labels of the components in the order of `components`.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Weighted components of the sum.
    pub fn components(&self) -> &[(f64, Arc<dyn CrossSection>)] {
        self.sum.terms()
    }

    pub fn component(&self, label: &str) -> Option<&Arc<dyn CrossSection>> {
        self.labels
            .iter()
            .position(|existing| existing == label)
            .map(|index| &self.sum.terms()[index].1)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl CrossSection for PhotoabsorptionCrossSection {
    fn evaluate(&self, energy: f64) -> f64 {
        self.sum.evaluate(energy)
    }

    fn equidistant_probability_grid(
        &self,
        limits: (f64, f64),
        n_points: usize,
    ) -> Result<Vec<f64>> {
        self.sum.equidistant_probability_grid(limits, n_points)
    }
}
