use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{anyhow, Context, Result};

//=====================================================================
// Reader for the NIST 'Atomic Weights and Isotopic Compositions with
// Relative Atomic Masses' list in its 'Linearized ASCII Output' format:
// one paragraph of `PROPERTY = VALUE(UNCERTAINTY)` lines per isotope.
//=====================================================================

const Z_PREFIX: &str = "Atomic Number =";
const SYMBOL_PREFIX: &str = "Atomic Symbol =";
const A_PREFIX: &str = "Mass Number =";
const AMU_PREFIX: &str = "Relative Atomic Mass =";
const ABUNDANCE_PREFIX: &str = "Isotopic Composition =";

#[derive(Debug, Clone, PartialEq)]
pub struct NistIsotopeRecord {
    pub z: u8,
    pub symbol: String,
    pub a: u32,
    pub amu: f64,
    /// Zero for isotopes without a natural abundance.
    pub abundance: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NistElementData {
    records: Vec<NistIsotopeRecord>,
}

// Value with the uncertainty in parentheses stripped
fn value_without_uncertainty(value: &str) -> &str {
    value.split('(').next().unwrap_or(value).trim()
}

fn parse_float(value: &str, n_line: usize) -> Result<f64> {
    fast_float::parse(value_without_uncertainty(value))
        .map_err(|_| anyhow!("Invalid number `{}` on line {}", value.trim(), n_line))
}

impl NistElementData {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("Could not open {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse {}", path.display()))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut records = Vec::new();
        let mut z: Option<u8> = None;
        let mut symbol: Option<String> = None;
        let mut a: Option<u32> = None;
        let mut amu: Option<f64> = None;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let n_line = idx + 1;
            let line = line.trim_end();

            if let Some(value) = line.strip_prefix(Z_PREFIX) {
                let context = || format!("Invalid atomic number on line {}", n_line);
                z = Some(value.trim().parse::<u8>().with_context(context)?);
            } else if let Some(value) = line.strip_prefix(SYMBOL_PREFIX) {
                symbol = Some(value.trim().to_string());
            } else if let Some(value) = line.strip_prefix(A_PREFIX) {
                let context = || format!("Invalid mass number on line {}", n_line);
                a = Some(value.trim().parse::<u32>().with_context(context)?);
            } else if let Some(value) = line.strip_prefix(AMU_PREFIX) {
                amu = Some(parse_float(value, n_line)?);
            } else if let Some(value) = line.strip_prefix(ABUNDANCE_PREFIX) {
                // The composition line closes the paragraph of an isotope
                let abundance = match value_without_uncertainty(value) {
                    "" => 0.0,
                    _ => parse_float(value, n_line)?,
                };
                match (z, symbol.take(), a.take(), amu.take()) {
                    (Some(z), Some(symbol), Some(a), Some(amu)) => records.push(NistIsotopeRecord {
                        z,
                        symbol,
                        a,
                        amu,
                        abundance,
                    }),
                    _ => return Err(anyhow!("Incomplete isotope record before line {}", n_line)),
                }
            }
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[NistIsotopeRecord] {
        &self.records
    }

    pub fn isotopes(&self, z: u8) -> impl Iterator<Item = &NistIsotopeRecord> {
        self.records.iter().filter(move |record| record.z == z)
    }

    /// Element symbols by proton number, first occurrence wins (the list
    /// names deuterium and tritium `D` and `T`).
    pub fn element_symbols(&self) -> BTreeMap<u8, String> {
        let mut symbols = BTreeMap::new();
        for record in self.records.iter() {
            symbols.entry(record.z).or_insert_with(|| record.symbol.clone());
        }
        symbols
    }
}
