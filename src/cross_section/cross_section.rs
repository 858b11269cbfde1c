use std::sync::Arc;

use crate::error::Result;
use crate::utils::linspace;

/// Energy-dependent cross section.
///
/// Implementors that have sharp features (resonances) override
/// `equidistant_probability_grid` with a grid that concentrates points
/// where the cross section carries its weight. For smooth cross sections
/// the probability grid is just the energy grid.
pub trait CrossSection: Send + Sync {
    fn evaluate(&self, energy: f64) -> f64;

    fn evaluate_many(&self, energies: &[f64]) -> Vec<f64> {
        energies.iter().map(|&energy| self.evaluate(energy)).collect()
    }

    fn equidistant_energy_grid(&self, limits: (f64, f64), n_points: usize) -> Vec<f64> {
        linspace(limits.0, limits.1, n_points)
    }

    fn equidistant_probability_grid(
        &self,
        limits: (f64, f64),
        n_points: usize,
    ) -> Result<Vec<f64>> {
        Ok(self.equidistant_energy_grid(limits, n_points))
    }
}

impl<T: CrossSection + ?Sized> CrossSection for Arc<T> {
    fn evaluate(&self, energy: f64) -> f64 {
        (**self).evaluate(energy)
    }

    fn evaluate_many(&self, energies: &[f64]) -> Vec<f64> {
        (**self).evaluate_many(energies)
    }

    fn equidistant_energy_grid(&self, limits: (f64, f64), n_points: usize) -> Vec<f64> {
        (**self).equidistant_energy_grid(limits, n_points)
    }

    fn equidistant_probability_grid(
        &self,
        limits: (f64, f64),
        n_points: usize,
    ) -> Result<Vec<f64>> {
        (**self).equidistant_probability_grid(limits, n_points)
    }
}

//=====================================================================
// Energy-independent cross section.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantCrossSection(pub f64);

impl CrossSection for ConstantCrossSection {
    fn evaluate(&self, _energy: f64) -> f64 {
        self.0
    }
}
