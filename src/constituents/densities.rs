use std::collections::HashMap;
use std::io::BufRead;

use anyhow::{Context, Result};

use crate::constituents::ElementSymbol;

//=====================================================================
// Densities of the natural elements at standard conditions in g/cm^3,
// Z = 1 to 98, as used by the Geant4 NIST material builder
// (G4NistMaterialBuilder.cc, version 10.6).
//=====================================================================
pub static GEANT4_DENSITIES: [f64; 98] = [
    8.3748e-05, 0.000166322, 0.534, 1.848, 2.37, 2.0, 0.0011652,
    0.00133151, 0.00158029, 0.000838505, 0.971, 1.74, 2.699, 2.33,
    2.2, 2.0, 0.00299473, 0.00166201, 0.862, 1.55, 2.989,
    4.54, 6.11, 7.18, 7.44, 7.874, 8.9, 8.902,
    8.96, 7.133, 5.904, 5.323, 5.73, 4.5, 0.0070721,
    0.00347832, 1.532, 2.54, 4.469, 6.506, 8.57, 10.22,
    11.5, 12.41, 12.41, 12.02, 10.5, 8.65, 7.31,
    7.31, 6.691, 6.24, 4.93, 0.00548536, 1.873, 3.5,
    6.154, 6.657, 6.71, 6.9, 7.22, 7.46, 5.243,
    7.9004, 8.229, 8.55, 8.795, 9.066, 9.321, 6.73,
    9.84, 13.31, 16.654, 19.3, 21.02, 22.57, 22.42,
    21.45, 19.32, 13.546, 11.72, 11.35, 9.747, 9.32,
    9.32, 0.00900662, 1.0, 5.0, 10.07, 11.72, 15.37,
    18.95, 20.25, 19.84, 13.67, 13.51, 14.0, 10.0,
];

pub fn density(z: u8) -> Option<f64> {
    match z {
        0 => None,
        _ => GEANT4_DENSITIES.get(z as usize - 1).copied(),
    }
}

/// Read a density table with one `SYMBOL VALUE` pair per line.
pub fn read_densities<R: BufRead>(reader: R) -> Result<HashMap<ElementSymbol, f64>> {
    let mut densities = HashMap::new();
    for (n_line, line) in reader.lines().enumerate() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let (Some(symbol), Some(value)) = (fields.next(), fields.next()) else {
            continue;
        };
        let symbol = ElementSymbol::from_symbol(symbol)
            .with_context(|| format!("Unknown element symbol on line {}", n_line + 1))?;
        let value: f64 = fast_float::parse(value)
            .map_err(|_| anyhow::anyhow!("Invalid density `{}` on line {}", value, n_line + 1))?;
        densities.insert(symbol, value);
    }
    Ok(densities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_embedded_densities() {
        assert_eq!(density(82), Some(11.35));
        assert_eq!(density(1), Some(8.3748e-5));
        assert_eq!(density(98), Some(10.0));
        assert_eq!(density(0), None);
        assert_eq!(density(99), None);
    }

    #[test]
    fn test_read_densities() {
        let table = "H  8.3748e-05\nPb 11.35\n\nU  18.95\n";
        let densities = read_densities(Cursor::new(table)).unwrap();
        assert_eq!(densities.len(), 3);
        assert_eq!(densities[&ElementSymbol::Pb], 11.35);
        assert_eq!(densities[&ElementSymbol::U], density(92).unwrap());
    }

    #[test]
    fn test_read_densities_rejects_garbage() {
        assert!(read_densities(Cursor::new("Xx 1.0\n")).is_err());
        assert!(read_densities(Cursor::new("Pb heavy\n")).is_err());
    }
}
