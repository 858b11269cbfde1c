use lazy_static::lazy_static;

use crate::constituents::{
    density, isotopic_composition, reference_mass_number, semi_empirical_atomic_mass,
    AtomicMassTable, ElementSymbol, Isotope, NistElementData,
};
use crate::error::{Result, RiesError};

//=====================================================================
// Chemical element as a mixture of isotopes with given abundances.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub z: u8,
    pub symbol: ElementSymbol,
    /// Isotopes and their abundances.
    pub isotopes: Vec<(Isotope, f64)>,
    /// Density in g/cm^3.
    pub density: Option<f64>,
}

lazy_static! {
    /// Natural elements, Z = 0 to 118, with liquid-drop isotope masses.
    /// Use `Element::natural_with_masses` where evaluated masses matter.
    pub static ref NATURAL_ELEMENTS: Vec<Element> = (0..=118u8)
        .filter_map(|z| Element::natural(z).ok())
        .collect();
}

impl Element {
    pub fn new(z: u8, isotopes: Vec<(Isotope, f64)>) -> Result<Self> {
        let symbol = ElementSymbol::from_z(z)?;
        for (isotope, abundance) in isotopes.iter() {
            if isotope.z != z {
                return Err(RiesError::InvalidArgument(format!(
                    "isotope {} does not belong to element {}",
                    isotope.label, symbol
                )));
            }
            if abundance.is_nan() || *abundance < 0.0 {
                return Err(RiesError::InvalidArgument(format!(
                    "abundance of {} must not be negative, got {}",
                    isotope.label, abundance
                )));
            }
        }
        Ok(Self {
            z,
            symbol,
            isotopes,
            density: density(z),
        })
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }

    /// Natural isotopic composition with liquid-drop masses.
    pub fn natural(z: u8) -> Result<Self> {
        let isotopes = isotopic_composition(z)
            .iter()
            .map(|&(a, abundance)| Ok((Isotope::semi_empirical(z, a)?, abundance)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(z, isotopes)
    }

    /// Natural isotopic composition with masses from an atomic mass table.
    pub fn natural_with_masses(z: u8, masses: &AtomicMassTable) -> Result<Self> {
        let isotopes = isotopic_composition(z)
            .iter()
            .map(|&(a, abundance)| {
                let amu = masses.mass(z, a).unwrap_or_else(|| {
                    log::warn!("No tabulated mass for Z={} A={}, using the liquid-drop mass", z, a);
                    semi_empirical_atomic_mass(z, a)
                });
                Ok((Isotope::new(z, a, amu)?, abundance))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(z, isotopes)
    }

    /// Composition and masses as listed by NIST. Isotopes without natural
    /// abundance are kept with an abundance of zero.
    pub fn from_nist(z: u8, data: &NistElementData) -> Result<Self> {
        let isotopes = data
            .isotopes(z)
            .map(|record| Ok((Isotope::new(z, record.a, record.amu)?, record.abundance)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(z, isotopes)
    }

    /// Abundance-weighted atomic mass in u.
    ///
    /// Elements without a natural composition get the mass of their
    /// longest-lived isotope.
    pub fn amu(&self) -> f64 {
        if self.isotopes.is_empty() {
            return reference_mass_number(self.z)
                .map(|a| semi_empirical_atomic_mass(self.z, a))
                .unwrap_or(0.0);
        }
        self.isotopes.iter().map(|(isotope, abundance)| isotope.amu * abundance).sum()
    }

    pub fn isotope(&self, label: &str) -> Option<&Isotope> {
        self.isotopes.iter().map(|(isotope, _)| isotope).find(|isotope| isotope.label == label)
    }

    pub fn abundance(&self, label: &str) -> Option<f64> {
        self.isotopes
            .iter()
            .find(|(isotope, _)| isotope.label == label)
            .map(|(_, abundance)| *abundance)
    }

    /// Replace the isotope with the same label, e.g. to attach a level
    /// scheme to an isotope of a natural element.
    pub fn replace_isotope(&mut self, isotope: Isotope) -> Result<()> {
        let entry = self
            .isotopes
            .iter_mut()
            .find(|(existing, _)| existing.label == isotope.label)
            .ok_or_else(|| {
                RiesError::InvalidArgument(format!(
                    "{} is not an isotope of {}",
                    isotope.label, self.symbol
                ))
            })?;
        entry.0 = isotope;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Cursor;

    use crate::utils::testing::{B11, NATURAL_BORON};

    #[test]
    fn test_natural_lead() {
        let lead = &NATURAL_ELEMENTS[82];
        assert_eq!(lead.z, 82);
        assert_eq!(lead.symbol, ElementSymbol::Pb);
        assert_eq!(lead.isotopes.len(), 4);
        assert_eq!(lead.density, Some(11.35));
        assert_eq!(lead.abundance("204Pb"), Some(0.014245));
        // Standard atomic weight 207.2
        assert!((lead.amu() - 207.2).abs() < 0.05);
    }

    #[test]
    fn test_amu_is_abundance_weighted() {
        let expected: f64 = NATURAL_BORON
            .isotopes
            .iter()
            .map(|(isotope, abundance)| isotope.amu * abundance)
            .sum();
        assert_eq!(NATURAL_BORON.amu(), expected);
        assert_relative_eq!(NATURAL_BORON.amu(), 10.81, max_relative = 1e-3);
    }

    #[test]
    fn test_natural_elements_table() {
        assert_eq!(NATURAL_ELEMENTS.len(), 119);
        assert_eq!(NATURAL_ELEMENTS[0].symbol, ElementSymbol::Neutron);
        assert_eq!(NATURAL_ELEMENTS[118].symbol.to_string(), "Og");
        // Technetium has no natural isotopes, but a mass anyway
        assert!(NATURAL_ELEMENTS[43].isotopes.is_empty());
        assert!((NATURAL_ELEMENTS[43].amu() - 98.0).abs() < 0.2);
        assert_eq!(NATURAL_ELEMENTS[0].amu(), crate::constants::NEUTRON_MASS);
    }

    #[test]
    fn test_natural_with_masses() {
        let mut contents = String::new();
        for _ in 0..36 {
            contents.push_str("header\n");
        }
        let identifiers = format!("{:<9}{:>5}{:>5} {:<2}", 0, 5, 11, "B");
        contents.push_str(&format!("{:<106}{:<19}\n", identifiers, " 11 009305.166"));
        let masses = AtomicMassTable::from_reader(Cursor::new(contents)).unwrap();

        let boron = Element::natural_with_masses(5, &masses).unwrap();
        assert_relative_eq!(boron.isotope("11B").unwrap().amu, 11.009305166, max_relative = 1e-14);
        // 10B falls back to the liquid-drop mass
        assert!((boron.isotope("10B").unwrap().amu - 10.012937).abs() < 0.01);
    }

    #[test]
    fn test_from_nist() {
        let contents = "\
Atomic Number = 5
Atomic Symbol = B
Mass Number = 10
Relative Atomic Mass = 10.01293695(41)
Isotopic Composition = 0.199(7)

Atomic Number = 5
Atomic Symbol = B
Mass Number = 11
Relative Atomic Mass = 11.00930536(45)
Isotopic Composition = 0.801(7)
";
        let data = NistElementData::from_reader(Cursor::new(contents)).unwrap();
        let boron = Element::from_nist(5, &data).unwrap();
        assert_eq!(boron.isotopes.len(), 2);
        assert_relative_eq!(
            boron.amu(),
            0.199 * 10.01293695 + 0.801 * 11.00930536,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_replace_isotope() {
        let mut boron = Element::natural(5).unwrap();
        boron.replace_isotope(B11.clone()).unwrap();
        assert!(boron.isotope("11B").unwrap().has_level_scheme());
        let lead = Isotope::new(82, 208, 207.98).unwrap();
        assert!(boron.replace_isotope(lead.clone()).is_err());
        assert!(Element::new(5, vec![(lead, 1.0)]).is_err());
    }
}
