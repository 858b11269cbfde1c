use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::constants::{ATOMIC_MASS_UNIT_KG, CM2_TO_FM2};
use crate::error::RiesError;
use crate::interpolation::InterpolationTable;

/// Conversion factor from a mass attenuation coefficient in cm^2/g to a
/// cross section in fm^2 per atom, for atoms with a mass of `amu` u.
pub fn cm2_per_g_to_fm2_per_atom(amu: f64) -> f64 {
    CM2_TO_FM2 * amu * ATOMIC_MASS_UNIT_KG * 1e3
}

//=====================================================================
// X-ray mass attenuation coefficients as tabulated by Hubbell and
// Seltzer (NIST). Each line of a table holds
//
//   [edge label]  energy/MeV  (mu/rho)/(cm^2/g)  (mu_en/rho)/(cm^2/g)
//
// where the optional label (K, L1, ...) marks the upper side of an
// absorption edge. Edges are listed twice with the same energy.
//=====================================================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XrmacData {
    pub energies: Vec<f64>,
    pub mass_attenuation: Vec<f64>,
    pub mass_energy_absorption: Vec<f64>,
    /// Index of the data point and label of each absorption edge.
    pub edges: Vec<(usize, String)>,
}

impl XrmacData {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("Could not open {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse {}", path.display()))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut data = Self::default();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            data.parse_line(&line, idx + 1)?;
        }
        Ok(data)
    }

    fn parse_line(&mut self, line: &str, n_line: usize) -> std::result::Result<(), RiesError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (label, values) = match tokens.len() {
            0 => return Ok(()),
            3 => (None, &tokens[..]),
            4 => (Some(tokens[0]), &tokens[1..]),
            n => {
                return Err(RiesError::Parse {
                    line: n_line,
                    message: format!("expected 3 or 4 columns, found {}", n),
                });
            }
        };

        let mut numbers = [0.0; 3];
        for (number, token) in numbers.iter_mut().zip(values.iter()) {
            *number = fast_float::parse(token).map_err(|_| RiesError::Parse {
                line: n_line,
                message: format!("invalid number `{}`", token),
            })?;
        }

        if let Some(label) = label {
            self.edges.push((self.energies.len(), label.to_string()));
        }
        self.energies.push(numbers[0]);
        self.mass_attenuation.push(numbers[1]);
        self.mass_energy_absorption.push(numbers[2]);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }
}

impl FromStr for XrmacData {
    type Err = anyhow::Error;

    fn from_str(contents: &str) -> Result<Self> {
        let mut data = Self::default();
        for (idx, line) in contents.lines().enumerate() {
            data.parse_line(line, idx + 1)?;
        }
        Ok(data)
    }
}

//=====================================================================
// Log-log interpolation of a mass attenuation table. Values outside of
// the tabulated energy range are held at the first or last value.
// `energy_scale` and `value_scale` convert the tabulated units
// (MeV, cm^2/g) into the units of the caller.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct Xrmac {
    mass_attenuation: InterpolationTable,
    mass_energy_absorption: InterpolationTable,
    pub energy_scale: f64,
    pub value_scale: f64,
}

impl Xrmac {
    pub fn new(data: &XrmacData) -> Result<Self, RiesError> {
        Self::with_scales(data, 1.0, 1.0)
    }

    pub fn with_scales(
        data: &XrmacData,
        energy_scale: f64,
        value_scale: f64,
    ) -> Result<Self, RiesError> {
        let energies: Vec<f64> = data.energies.iter().map(|energy| energy * energy_scale).collect();
        let scaled =
            |values: &[f64]| values.iter().map(|value| value * value_scale).collect::<Vec<_>>();

        Ok(Self {
            mass_attenuation: InterpolationTable::from_x_and_y_with_discontinuities(
                energies.clone(),
                scaled(&data.mass_attenuation),
            )?,
            mass_energy_absorption: InterpolationTable::from_x_and_y_with_discontinuities(
                energies,
                scaled(&data.mass_energy_absorption),
            )?,
            energy_scale,
            value_scale,
        })
    }

    /// Mass attenuation coefficient mu/rho.
    pub fn mass_attenuation(&self, energy: f64) -> f64 {
        self.mass_attenuation.interpolate_clamped(energy).unwrap_or(f64::NAN)
    }

    /// Mass energy-absorption coefficient mu_en/rho.
    pub fn mass_energy_absorption(&self, energy: f64) -> f64 {
        self.mass_energy_absorption.interpolate_clamped(energy).unwrap_or(f64::NAN)
    }

    pub fn energy_range(&self) -> (f64, f64) {
        (
            self.mass_attenuation.x_min().unwrap_or(f64::NAN),
            self.mass_attenuation.x_max().unwrap_or(f64::NAN),
        )
    }
}
