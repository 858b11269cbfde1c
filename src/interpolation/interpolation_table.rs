use std::ops::{Deref, DerefMut};

use crate::interpolation::{InterpolationRegion, XY};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    #[error("interpolation table is empty")]
    Empty,
    #[error("x ({x}) and y ({y}) vectors must be of the same length")]
    LengthMismatch { x: usize, y: usize },
    #[error("x values must be sorted in ascending order")]
    Unsorted,
    #[error("log-log interpolation requires strictly positive values")]
    NonPositive,
    #[error("x={x} is outside of the table range [{min}, {max}]")]
    OutOfBounds { x: f64, min: f64, max: f64 },
}

//=====================================================================
// Interpolation table. A sequence of regions sorted in x, where
// neighbouring regions may share their boundary point.
//=====================================================================
#[derive(Debug, Clone, Default, PartialEq, PartialOrd)]
pub struct InterpolationTable(pub Vec<InterpolationRegion>);

impl Deref for InterpolationTable {
    type Target = Vec<InterpolationRegion>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for InterpolationTable {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl InterpolationTable {
    /// Single region table.
    pub fn from_x_and_y(x: Vec<f64>, y: Vec<f64>) -> Result<Self, InterpolationError> {
        Ok(Self(vec![InterpolationRegion::from_x_and_y(x, y)?]))
    }

    /// Table that starts a new region wherever an x value is repeated.
    ///
    /// Photon attenuation tables list absorption edges as two entries at the
    /// same energy, one on each side of the jump. Interpolating across such a
    /// pair would smear out the edge, so each side becomes its own region.
    pub fn from_x_and_y_with_discontinuities(
        x: Vec<f64>,
        y: Vec<f64>,
    ) -> Result<Self, InterpolationError> {
        if x.len() != y.len() {
            return Err(InterpolationError::LengthMismatch { x: x.len(), y: y.len() });
        }
        if x.is_empty() {
            return Err(InterpolationError::Empty);
        }

        let mut regions = Vec::new();
        let mut start = 0;
        for idx in 1..=x.len() {
            if idx == x.len() || x[idx] == x[idx - 1] {
                regions.push(InterpolationRegion::from_x_and_y(
                    x[start..idx].to_vec(),
                    y[start..idx].to_vec(),
                )?);
                start = idx;
            }
        }

        Ok(Self(regions))
    }

    pub fn x_min(&self) -> Option<f64> {
        self.first().map(|region| region.x_min())
    }

    pub fn x_max(&self) -> Option<f64> {
        self.last().map(|region| region.x_max())
    }

    // Interpolate a value from the table
    pub fn interpolate(&self, x_val: f64) -> Result<f64, InterpolationError> {
        if self.is_empty() {
            return Err(InterpolationError::Empty);
        }
        let region = self.iter().find(|region| region.contains(x_val)).ok_or_else(|| {
            InterpolationError::OutOfBounds {
                x: x_val,
                min: self[0].x_min(),
                max: self[self.len() - 1].x_max(),
            }
        })?;

        Ok(region.interpolate(x_val))
    }

    /// Interpolate, holding the first and last tabulated values constant
    /// outside of the table range.
    pub fn interpolate_clamped(&self, x_val: f64) -> Result<f64, InterpolationError> {
        let (first, last) = match (self.first(), self.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(InterpolationError::Empty),
        };
        if x_val < first.x_min() {
            return Ok(first.data[0].y);
        }
        if x_val > last.x_max() {
            return Ok(last.data[last.data.len() - 1].y);
        }
        self.interpolate(x_val)
    }

    pub fn points(&self) -> impl Iterator<Item = &XY> {
        self.iter().flat_map(|region| region.data.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_region() -> InterpolationTable {
        InterpolationTable::from_x_and_y(vec![1.0, 2.0, 3.0], vec![2.0, 5.0, 10.0]).unwrap()
    }

    #[test]
    fn test_loglog_interpolation() {
        let table = single_region();
        assert!((table.interpolate(1.5).unwrap() - 3.418298).abs() < 1e-5);
        assert!((table.interpolate(2.5).unwrap() - 7.322152).abs() < 1e-5);
        assert_eq!(table.interpolate(2.0).unwrap(), 5.0);
        assert_eq!(table.interpolate(3.0).unwrap(), 10.0);
        assert!(table.interpolate(0.9).is_err());
        assert!(table.interpolate(3.1).is_err());
    }

    #[test]
    fn test_loglog_is_linear_in_log10_space() {
        let table = InterpolationTable::from_x_and_y(vec![1e-3, 1e-1], vec![1e4, 1e0]).unwrap();
        // Halfway in log10(x) is halfway in log10(y)
        assert!((table.interpolate(1e-2).unwrap() - 1e2).abs() < 1e-9);
    }

    #[test]
    fn test_clamped_interpolation() {
        let table = single_region();
        assert_eq!(table.interpolate_clamped(0.0).unwrap(), 2.0);
        assert_eq!(table.interpolate_clamped(100.0).unwrap(), 10.0);
        assert!((table.interpolate_clamped(2.5).unwrap() - 7.322152).abs() < 1e-5);
        assert_eq!(
            InterpolationTable::default().interpolate_clamped(1.0),
            Err(InterpolationError::Empty)
        );
    }

    #[test]
    fn test_discontinuities_split_regions() {
        // An edge at x = 2: the value jumps from 1 to 10
        let table = InterpolationTable::from_x_and_y_with_discontinuities(
            vec![1.0, 2.0, 2.0, 3.0],
            vec![2.0, 1.0, 10.0, 5.0],
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert!((table.interpolate(1.5).unwrap() - 4.0 / 3.0).abs() < 1e-12);
        assert!((table.interpolate(2.5).unwrap() - 6.828593).abs() < 1e-5);
        // The lower side of the edge is found first
        assert_eq!(table.interpolate(2.0).unwrap(), 1.0);
        assert_eq!(table.points().count(), 4);
    }

    #[test]
    fn test_multiple_absorption_edges() {
        let table = InterpolationTable::from_x_and_y_with_discontinuities(
            vec![1.0, 2.0, 2.0, 3.0, 4.0, 4.0, 5.0],
            vec![4.0, 1.0, 8.0, 2.0, 16.0, 3.0, 6.0],
        )
        .unwrap();

        assert_eq!(table.len(), 3);
        assert!(table.interpolate(0.5).is_err());
        assert!((table.interpolate(1.5).unwrap() - 1.777778).abs() < 1e-5);
        assert!((table.interpolate(2.5).unwrap() - 3.730375).abs() < 1e-5);
        assert!((table.interpolate(3.5).unwrap() - 6.094512).abs() < 1e-5);
        assert!((table.interpolate(4.5).unwrap() - 4.325293).abs() < 1e-5);
        assert_eq!(table.interpolate(5.0).unwrap(), 6.0);
        assert_eq!(table.x_min(), Some(1.0));
        assert_eq!(table.x_max(), Some(5.0));
        assert!(matches!(
            table.interpolate(5.1),
            Err(InterpolationError::OutOfBounds { min, max, .. }) if min == 1.0 && max == 5.0
        ));
    }
}
