use std::collections::BTreeMap;

use strum_macros::Display;

use crate::error::{Result, RiesError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Parity {
    #[strum(serialize = "+")]
    Positive,
    #[strum(serialize = "-")]
    Negative,
}

//=====================================================================
// Nuclear state. The label (e.g. `5/2^-_1` for the first 5/2^- state)
// is the unique identifier that partial widths refer to. Energies and
// widths are in MeV.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub label: String,
    pub two_j: u32,
    pub parity: Parity,
    pub excitation_energy: f64,
    /// Partial widths for decays to lower-lying states, keyed by their label.
    pub partial_widths: BTreeMap<String, f64>,
}

impl State {
    /// Ground state: no excitation energy, no decays.
    pub fn ground(label: impl Into<String>, two_j: u32, parity: Parity) -> Self {
        Self {
            label: label.into(),
            two_j,
            parity,
            excitation_energy: 0.0,
            partial_widths: BTreeMap::new(),
        }
    }

    pub fn excited<I, S>(
        label: impl Into<String>,
        two_j: u32,
        parity: Parity,
        excitation_energy: f64,
        partial_widths: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let label = label.into();
        if excitation_energy.is_nan() || excitation_energy < 0.0 {
            return Err(RiesError::InvalidArgument(format!(
                "excitation energy of state `{}` must not be negative, got {}",
                label, excitation_energy
            )));
        }

        let mut widths = BTreeMap::new();
        for (to, width) in partial_widths {
            let to = to.into();
            if width.is_nan() || width < 0.0 {
                return Err(RiesError::InvalidArgument(format!(
                    "partial width of state `{}` to `{}` must not be negative, got {}",
                    label, to, width
                )));
            }
            // A repeated final state replaces the earlier entry
            widths.insert(to, width);
        }

        Ok(Self {
            label,
            two_j,
            parity,
            excitation_energy,
            partial_widths: widths,
        })
    }

    /// Total width, the sum of all partial widths.
    pub fn width(&self) -> f64 {
        self.partial_widths.values().sum()
    }

    pub fn partial_width(&self, to: &str) -> Option<f64> {
        self.partial_widths.get(to).copied()
    }

    pub fn spin(&self) -> f64 {
        0.5 * self.two_j as f64
    }

    pub fn is_ground_state(&self) -> bool {
        self.excitation_energy == 0.0 && self.partial_widths.is_empty()
    }

    /// Spin and parity in the usual notation, e.g. `5/2^-` or `3^+`.
    pub fn j_pi(&self) -> String {
        if self.two_j % 2 == 0 {
            format!("{}^{}", self.two_j / 2, self.parity)
        } else {
            format!("{}/2^{}", self.two_j, self.parity)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ground_state() {
        let ground_state = State::ground("3/2^-_1", 3, Parity::Negative);
        assert_eq!(ground_state.excitation_energy, 0.0);
        assert_eq!(ground_state.width(), 0.0);
        assert!(ground_state.is_ground_state());
        assert_eq!(ground_state.j_pi(), "3/2^-");
        assert_eq!(ground_state.spin(), 1.5);
    }

    #[test]
    fn test_width_is_sum_of_partial_widths() {
        let state = State::excited(
            "3/2^-_2",
            3,
            Parity::Negative,
            5.02030,
            [("3/2^-_1", 0.856 * 1.97e-6), ("1/2^-_1", 0.144 * 1.97e-6)],
        )
        .unwrap();
        assert_relative_eq!(state.width(), 1.97e-6, max_relative = 1e-12);
        assert_eq!(state.partial_width("1/2^-_1"), Some(0.144 * 1.97e-6));
        assert_eq!(state.partial_width("5/2^-_1"), None);
        assert!(!state.is_ground_state());
    }

    #[test]
    fn test_integer_spin_notation() {
        let state =
            State::excited("1^+_1", 2, Parity::Positive, 0.71838, [("3^+_1", 0.0)]).unwrap();
        assert_eq!(state.j_pi(), "1^+");
        assert_eq!(state.width(), 0.0);
    }

    #[test]
    fn test_repeated_final_state_replaces_width() {
        let state =
            State::excited("x", 1, Parity::Positive, 1.0, [("y", 1.0), ("y", 2.0)]).unwrap();
        assert_eq!(state.partial_widths.len(), 1);
        assert_eq!(state.width(), 2.0);
    }

    #[test]
    fn test_invalid_states() {
        let negative_energy = State::excited("x", 1, Parity::Positive, -1.0, [("y", 1.0)]);
        assert!(matches!(negative_energy, Err(RiesError::InvalidArgument(_))));
        let negative_width = State::excited("x", 1, Parity::Positive, 1.0, [("y", -1.0)]);
        assert!(matches!(negative_width, Err(RiesError::InvalidArgument(_))));
    }
}
