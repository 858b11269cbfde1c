use std::f64::consts::{LN_2, PI, SQRT_2};

use crate::constants::HBAR_C;
use crate::constituents::State;
use crate::cross_section::CrossSection;
use crate::error::{Result, RiesError};
use crate::probability::Probability;
use crate::resonance::{
    Cauchy, LineShape, MaxwellBoltzmann, Normal, PseudoVoigtProfile, Recoil, Uniform, VoigtProfile,
};
use crate::utils::linspace;

//=====================================================================
// Photoexcitation of an isolated state 2 from a state 0, optionally
// followed by the decay to a state 1.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub initial_state: State,
    pub intermediate_state: State,
    pub final_state: Option<State>,
    pub recoil: Recoil,
}

/// Energy-independent quantities of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    /// Recoil-corrected resonance energy in MeV.
    pub resonance_energy: f64,
    /// (2 J_2 + 1) / (2 J_0 + 1)
    pub statistical_factor: f64,
    /// Branching ratio to the final state, 1 without a final state.
    pub branching_ratio: f64,
    /// Energy-integrated cross section in MeV fm^2.
    pub energy_integrated_cross_section: f64,
}

impl Transition {
    pub fn new(initial_state: State, intermediate_state: State) -> Self {
        Self {
            initial_state,
            intermediate_state,
            final_state: None,
            recoil: Recoil::None,
        }
    }

    pub fn with_final_state(mut self, final_state: State) -> Self {
        self.final_state = Some(final_state);
        self
    }

    pub fn with_recoil(mut self, recoil: Recoil) -> Self {
        self.recoil = recoil;
        self
    }

    fn partial_width(&self, to: &State) -> Result<f64> {
        self.intermediate_state
            .partial_width(&to.label)
            .ok_or_else(|| RiesError::MissingPartialWidth {
                state: self.intermediate_state.label.clone(),
                to: to.label.clone(),
            })
    }

    /// Resonance energy and energy-integrated cross section
    ///
    /// I = (pi hbar c / E_r)^2 S Gamma_{2->0} b
    ///
    /// assuming detailed balance, i.e. equal partial widths for excitation
    /// and decay.
    pub fn kinematics(&self) -> Result<Kinematics> {
        let excitation_energy =
            self.intermediate_state.excitation_energy - self.initial_state.excitation_energy;
        let resonance_energy = self.recoil.resonance_energy(excitation_energy);
        if resonance_energy.is_nan() || resonance_energy <= 0.0 {
            return Err(RiesError::InvalidArgument(format!(
                "state `{}` does not lie above state `{}`",
                self.intermediate_state.label, self.initial_state.label
            )));
        }

        let statistical_factor =
            (self.intermediate_state.two_j as f64 + 1.0) / (self.initial_state.two_j as f64 + 1.0);
        let excitation_width = self.partial_width(&self.initial_state)?;
        let branching_ratio = match &self.final_state {
            None => 1.0,
            Some(final_state) => {
                let partial_width = self.partial_width(final_state)?;
                let width = self.intermediate_state.width();
                if width > 0.0 { partial_width / width } else { 0.0 }
            }
        };

        Ok(Kinematics {
            resonance_energy,
            statistical_factor,
            branching_ratio,
            energy_integrated_cross_section: (PI * HBAR_C / resonance_energy).powi(2)
                * statistical_factor
                * excitation_width
                * branching_ratio,
        })
    }
}

/// Energy range of a grid around a resonance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridRange {
    /// Central interval that contains this fraction of the line shape.
    Coverage(f64),
    /// Explicit lower and upper energy.
    Limits(f64, f64),
}

//=====================================================================
// Cross section of an isolated resonance: the energy-integrated cross
// section times a normalized line shape. Narrow resonances are resolved
// numerically with probability grids, i.e. the energies at equidistant
// values of the cdf of the line shape.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct Resonance<L: LineShape> {
    pub transition: Transition,
    pub kinematics: Kinematics,
    pub line_shape: L,
}

pub type Rectangular = Resonance<Uniform>;
pub type BreitWigner = Resonance<Cauchy>;
pub type Gauss = Resonance<Normal>;
pub type PseudoVoigt = Resonance<PseudoVoigtProfile>;
pub type Voigt = Resonance<VoigtProfile>;

impl Resonance<Uniform> {
    /// Rectangle of 1 MeV width around the resonance energy, only useful
    /// for checks of the integration.
    pub fn rectangular(transition: Transition) -> Result<Self> {
        let kinematics = transition.kinematics()?;
        let line_shape = Uniform {
            lower: kinematics.resonance_energy - 0.5,
            width: 1.0,
        };
        Ok(Self::from_parts(transition, kinematics, line_shape))
    }
}

impl Resonance<Cauchy> {
    /// Breit-Wigner resonance with the total width of the intermediate state.
    pub fn breit_wigner(transition: Transition) -> Result<Self> {
        let kinematics = transition.kinematics()?;
        let line_shape = Cauchy {
            location: kinematics.resonance_energy,
            scale: 0.5 * transition.intermediate_state.width(),
        };
        Ok(Self::from_parts(transition, kinematics, line_shape))
    }
}

impl Resonance<Normal> {
    /// Doppler-broadened resonance whose natural width is negligible.
    pub fn gauss(transition: Transition, maxwell_boltzmann: &MaxwellBoltzmann) -> Result<Self> {
        let kinematics = transition.kinematics()?;
        let line_shape = Normal {
            mean: kinematics.resonance_energy,
            sigma: maxwell_boltzmann.doppler_width(kinematics.resonance_energy) / SQRT_2,
        };
        Ok(Self::from_parts(transition, kinematics, line_shape))
    }
}

impl Resonance<PseudoVoigtProfile> {
    pub fn pseudo_voigt(
        transition: Transition,
        maxwell_boltzmann: &MaxwellBoltzmann,
    ) -> Result<Self> {
        let kinematics = transition.kinematics()?;
        let doppler_width = maxwell_boltzmann.doppler_width(kinematics.resonance_energy);
        let line_shape = PseudoVoigtProfile::new(
            kinematics.resonance_energy,
            2.0 * LN_2.sqrt() * doppler_width,
            transition.intermediate_state.width(),
        );
        Ok(Self::from_parts(transition, kinematics, line_shape))
    }
}

impl Resonance<VoigtProfile> {
    /// Breit-Wigner resonance convolved with the Doppler broadening.
    pub fn voigt(transition: Transition, maxwell_boltzmann: &MaxwellBoltzmann) -> Result<Self> {
        let kinematics = transition.kinematics()?;
        let doppler_width = maxwell_boltzmann.doppler_width(kinematics.resonance_energy);
        let line_shape = VoigtProfile::new(
            kinematics.resonance_energy,
            doppler_width / SQRT_2,
            0.5 * transition.intermediate_state.width(),
        );
        Ok(Self::from_parts(transition, kinematics, line_shape))
    }
}

impl<L: LineShape> Resonance<L> {
    pub fn from_parts(transition: Transition, kinematics: Kinematics, line_shape: L) -> Self {
        Self {
            transition,
            kinematics,
            line_shape,
        }
    }

    #[inline]
    pub fn resonance_energy(&self) -> f64 {
        self.kinematics.resonance_energy
    }

    #[inline]
    pub fn energy_integrated_cross_section(&self) -> f64 {
        self.kinematics.energy_integrated_cross_section
    }

    /// Cross section at an energy relative to the resonance energy.
    pub fn evaluate_relative(&self, energy_difference: f64) -> f64 {
        self.evaluate(self.resonance_energy() + energy_difference)
    }

    /// Central energy interval that contains the fraction `coverage` of
    /// the energy-integrated cross section.
    pub fn coverage_interval(&self, coverage: f64) -> Result<(f64, f64)> {
        let (lower, upper) = Probability::coverage(coverage)?.central_quantiles();
        Ok((self.line_shape.ppf(lower), self.line_shape.ppf(upper)))
    }

    fn limits(&self, range: GridRange) -> Result<(f64, f64)> {
        match range {
            GridRange::Coverage(coverage) => self.coverage_interval(coverage),
            GridRange::Limits(lower, upper) => {
                if lower.is_nan() || upper.is_nan() || lower > upper {
                    return Err(RiesError::InvalidArgument(format!(
                        "grid limits must be ordered, got [{}, {}]",
                        lower, upper
                    )));
                }
                Ok((lower, upper))
            }
        }
    }

    pub fn energy_grid(&self, range: GridRange, n_points: usize) -> Result<Vec<f64>> {
        let (lower, upper) = self.limits(range)?;
        Ok(linspace(lower, upper, n_points))
    }

    /// Grid whose neighbouring points enclose equal fractions of the
    /// line shape.
    ///
    /// For explicit limits the first and last point are set to the limits,
    /// because far from the resonance the cdf may round to 0 or 1, which
    /// would map to infinite energies. If the cdf does not change between
    /// the limits at all, the grid is equidistant in energy.
    pub fn probability_grid(&self, range: GridRange, n_points: usize) -> Result<Vec<f64>> {
        let quantile_limits = match range {
            GridRange::Coverage(coverage) => {
                let (lower, upper) = Probability::coverage(coverage)?.central_quantiles();
                (lower.value(), upper.value())
            }
            GridRange::Limits(..) => {
                let (lower, upper) = self.limits(range)?;
                let cdf_lower = self.line_shape.cdf(lower);
                let cdf_upper = self.line_shape.cdf(upper);
                if cdf_lower.is_nan() || cdf_upper.is_nan() || cdf_upper <= cdf_lower {
                    return Ok(linspace(lower, upper, n_points));
                }
                (cdf_lower, cdf_upper)
            }
        };

        let mut grid: Vec<f64> = linspace(quantile_limits.0, quantile_limits.1, n_points)
            .into_iter()
            .map(|quantile| Probability::new_unchecked(quantile.clamp(0.0, 1.0)))
            .map(|quantile| self.line_shape.ppf(quantile))
            .collect();

        if let GridRange::Limits(lower, upper) = range {
            if let Some(first) = grid.first_mut() {
                *first = lower;
            }
            if n_points > 1 {
                if let Some(last) = grid.last_mut() {
                    *last = upper;
                }
            }
        }
        Ok(grid)
    }
}

impl<L: LineShape> CrossSection for Resonance<L> {
    fn evaluate(&self, energy: f64) -> f64 {
        let energy_integrated_cross_section = self.energy_integrated_cross_section();
        // States without a width to the ground state have a degenerate line shape
        if energy_integrated_cross_section == 0.0 {
            return 0.0;
        }
        energy_integrated_cross_section * self.line_shape.pdf(energy)
    }

    fn equidistant_probability_grid(
        &self,
        limits: (f64, f64),
        n_points: usize,
    ) -> Result<Vec<f64>> {
        self.probability_grid(GridRange::Limits(limits.0, limits.1), n_points)
    }
}
