use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Context};
use dashmap::DashMap;
use futures::future::join_all;
use rayon::prelude::*;

use crate::constituents::{ElementSymbol, NATURAL_ELEMENTS};
use crate::cross_section::CrossSection;
use crate::error::{Result, RiesError};
use crate::nonresonant::{cm2_per_g_to_fm2_per_atom, KleinNishina, Xrmac, XrmacData};

/// Environment variable with the directory of the NIST tables.
pub const XRMAC_DIR_ENV: &str = "RIES_XRMAC_DIR";

/// Highest proton number with a tabulated attenuation coefficient.
pub const XRMAC_MAX_Z: u8 = 92;

/// Tables are named by the zero-padded proton number, `01.txt` for hydrogen.
pub fn xrmac_file_name(z: u8) -> String {
    format!("{:02}.txt", z)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttenuationUnit {
    Cm2PerG,
    Fm2PerAtom,
}

#[derive(Debug, Clone, PartialEq)]
enum AttenuationModel {
    /// Tabulated, in cm^2/g.
    Tabulated(Arc<Xrmac>),
    /// Compton scattering only, in fm^2/atom.
    KleinNishina(KleinNishina),
}

//=====================================================================
// Nonresonant attenuation of photons by an element.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct Attenuation {
    pub z: u8,
    pub unit: AttenuationUnit,
    model: AttenuationModel,
    scale: f64,
}

impl Attenuation {
    /// Whether the attenuation comes from a tabulated XRMAC or from the
    /// Klein-Nishina fallback.
    pub fn is_tabulated(&self) -> bool {
        matches!(self.model, AttenuationModel::Tabulated(_))
    }
}

impl CrossSection for Attenuation {
    fn evaluate(&self, energy: f64) -> f64 {
        let value = match &self.model {
            AttenuationModel::Tabulated(xrmac) => xrmac.mass_attenuation(energy),
            AttenuationModel::KleinNishina(klein_nishina) => klein_nishina.cs_total(energy),
        };
        self.scale * value
    }
}

//=====================================================================
// Collection of XRMAC tables for the elements Z = 1 to 92. Elements
// without a table are attenuated by Compton scattering only.
//=====================================================================
#[derive(Debug, Clone, Default)]
pub struct XrmacLibrary {
    pub tables: HashMap<u8, Arc<Xrmac>>,
}

impl XrmacLibrary {
    /// Library without tables.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read all tables in `dir` concurrently.
    pub async fn load<P: AsRef<Path>>(dir: P) -> anyhow::Result<Self> {
        let dir = check_dir(dir.as_ref())?;
        let start = Instant::now();

        let reads = (1..=XRMAC_MAX_Z).map(|z| {
            let path = dir.join(xrmac_file_name(z));
            async move {
                let contents = tokio::fs::read_to_string(&path).await;
                (z, path, contents)
            }
        });
        let mut contents = Vec::new();
        for (z, path, result) in join_all(reads).await {
            if let Some(text) = existing(result, &path)? {
                contents.push((z, path, text));
            }
        }

        let library = Self::parse_all(contents)?;
        library.log_loaded(dir, start);
        Ok(library)
    }

    /// Same as `load`, without an async runtime.
    pub fn load_blocking<P: AsRef<Path>>(dir: P) -> anyhow::Result<Self> {
        let dir = check_dir(dir.as_ref())?;
        let start = Instant::now();

        let mut contents = Vec::new();
        for z in 1..=XRMAC_MAX_Z {
            let path = dir.join(xrmac_file_name(z));
            if let Some(text) = existing(std::fs::read_to_string(&path), &path)? {
                contents.push((z, path, text));
            }
        }

        let library = Self::parse_all(contents)?;
        library.log_loaded(dir, start);
        Ok(library)
    }

    /// Load the tables from the directory in `RIES_XRMAC_DIR`, or use
    /// Klein-Nishina for all elements if it is not set.
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var(XRMAC_DIR_ENV) {
            Ok(dir) => Self::load_blocking(dir),
            Err(_) => {
                log::warn!(
                    "{} is not set, using Klein-Nishina attenuation for all elements",
                    XRMAC_DIR_ENV
                );
                Ok(Self::empty())
            }
        }
    }

    fn log_loaded(&self, dir: &Path, start: Instant) {
        log::info!(
            "Loaded {} XRMAC tables from {} in {:?}",
            self.tables.len(),
            dir.display(),
            start.elapsed()
        );
    }

    fn parse_all(contents: Vec<(u8, PathBuf, String)>) -> anyhow::Result<Self> {
        let tables = DashMap::new();
        contents.par_iter().try_for_each(|(z, path, text)| -> anyhow::Result<()> {
            let data = text
                .parse::<XrmacData>()
                .with_context(|| format!("Could not parse {}", path.display()))?;
            let xrmac = Xrmac::new(&data)
                .with_context(|| format!("Invalid table in {}", path.display()))?;
            tables.insert(*z, Arc::new(xrmac));
            Ok(())
        })?;

        let library = Self {
            tables: tables.into_iter().collect(),
        };
        let missing: Vec<u8> =
            (1..=XRMAC_MAX_Z).filter(|z| !library.tables.contains_key(z)).collect();
        if !missing.is_empty() {
            log::warn!(
                "No XRMAC table for Z = {:?}, using Klein-Nishina attenuation instead",
                missing
            );
        }
        Ok(library)
    }

    pub fn insert(&mut self, z: u8, xrmac: Xrmac) {
        self.tables.insert(z, Arc::new(xrmac));
    }

    pub fn has_table(&self, z: u8) -> bool {
        self.tables.contains_key(&z)
    }

    pub fn xrmac(&self, z: u8) -> Option<&Arc<Xrmac>> {
        self.tables.get(&z)
    }

    /// Attenuation cross section of the natural element `z`.
    pub fn attenuation(&self, z: u8, unit: AttenuationUnit) -> Result<Attenuation> {
        if !(1..=XRMAC_MAX_Z).contains(&z) {
            let name = ElementSymbol::from_z(z)
                .map(|symbol| symbol.to_string())
                .unwrap_or_else(|_| format!("Z={}", z));
            return Err(RiesError::UnknownElement(name));
        }
        let amu = NATURAL_ELEMENTS[z as usize].amu();
        let fm2_per_atom = cm2_per_g_to_fm2_per_atom(amu);

        let model = match self.tables.get(&z) {
            Some(xrmac) => AttenuationModel::Tabulated(xrmac.clone()),
            None => AttenuationModel::KleinNishina(KleinNishina::new(z as f64)),
        };
        let scale = match (&model, unit) {
            (AttenuationModel::Tabulated(_), AttenuationUnit::Cm2PerG) => 1.0,
            (AttenuationModel::Tabulated(_), AttenuationUnit::Fm2PerAtom) => fm2_per_atom,
            (AttenuationModel::KleinNishina(_), AttenuationUnit::Cm2PerG) => 1.0 / fm2_per_atom,
            (AttenuationModel::KleinNishina(_), AttenuationUnit::Fm2PerAtom) => 1.0,
        };

        Ok(Attenuation { z, unit, model, scale })
    }
}

fn check_dir(dir: &Path) -> anyhow::Result<&Path> {
    if !dir.is_dir() {
        bail!("XRMAC directory {} does not exist", dir.display());
    }
    Ok(dir)
}

// A missing table is not an error, any other failure to read it is
fn existing(result: std::io::Result<String>, path: &Path) -> anyhow::Result<Option<String>> {
    match result {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err).with_context(|| format!("Could not read {}", path.display())),
    }
}
