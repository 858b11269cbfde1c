use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};

use crate::utils::read_lines;

//=====================================================================
// Reader for the atomic masses of the Atomic Mass Evaluation 2020
// (`mass_1.mas20`, Huang et al., Chin. Phys. C 45, 030002 (2021)).
// The file has a fixed-column layout described in its header.
//=====================================================================

const HEADER_LINES: usize = 36;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtomicMassTable {
    masses: HashMap<(u8, u32), f64>,
    symbols: BTreeMap<u8, String>,
}

fn column<'a>(line: &'a str, start: usize, end: usize, n_line: usize) -> Result<&'a str> {
    line.get(start..end.min(line.len()))
        .ok_or_else(|| anyhow!("Line {} is too short for columns {}-{}", n_line, start, end))
}

impl AtomicMassTable {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let start = Instant::now();
        let file = File::open(path).with_context(|| format!("Could not open {}", path.display()))?;
        let table = Self::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse {}", path.display()))?;
        log::info!("Read {} atomic masses in {:?}", table.len(), start.elapsed());
        Ok(table)
    }

    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let header = read_lines(&mut reader, HEADER_LINES)?;
        if header.len() < HEADER_LINES {
            return Err(anyhow!("File ends within the {} header lines", HEADER_LINES));
        }

        let mut table = Self::default();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let n_line = HEADER_LINES + idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            let z: u8 = column(&line, 9, 14, n_line)?
                .trim()
                .parse()
                .with_context(|| format!("Invalid proton number on line {}", n_line))?;
            let a: u32 = column(&line, 14, 19, n_line)?
                .trim()
                .parse()
                .with_context(|| format!("Invalid mass number on line {}", n_line))?;
            let symbol = column(&line, 20, 22, n_line)?.trim().to_string();
            // Micro-u, with `#` in place of the decimal point for estimated values
            let mut mass_field: String = column(&line, 106, 125, n_line)?
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| if c == '#' { '.' } else { c })
                .collect();
            if mass_field.ends_with('.') {
                mass_field.push('0');
            }
            let micro_u: f64 = fast_float::parse(&mass_field)
                .map_err(|_| anyhow!("Invalid mass `{}` on line {}", mass_field, n_line))?;

            table.masses.insert((z, a), micro_u * 1e-6);
            table.symbols.entry(z).or_insert(symbol);
        }

        Ok(table)
    }

    /// Atomic mass in u.
    pub fn mass(&self, z: u8, a: u32) -> Option<f64> {
        self.masses.get(&(z, a)).copied()
    }

    /// Element symbols as they appear in the file, by proton number.
    pub fn element_symbols(&self) -> &BTreeMap<u8, String> {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }
}
