use crate::interpolation::InterpolationError;

//=====================================================================
// X/Y pair for interpolation.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct XY {
    pub x: f64,
    pub y: f64,
}

//=====================================================================
// Interpolation region. This contains a set of X/Y pairs, sorted in x,
// between which y is interpolated linearly in log(x) and log(y).
//=====================================================================
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct InterpolationRegion {
    pub data: Vec<XY>,
}

impl InterpolationRegion {
    pub fn from_x_and_y(x: Vec<f64>, y: Vec<f64>) -> Result<Self, InterpolationError> {
        if x.len() != y.len() {
            return Err(InterpolationError::LengthMismatch { x: x.len(), y: y.len() });
        }
        if x.is_empty() {
            return Err(InterpolationError::Empty);
        }
        if x.windows(2).any(|pair| pair[1] < pair[0]) {
            return Err(InterpolationError::Unsorted);
        }
        if x.iter().chain(y.iter()).any(|&val| val <= 0.0) {
            return Err(InterpolationError::NonPositive);
        }

        let data = x.into_iter().zip(y).map(|(x, y)| XY { x, y }).collect();
        Ok(Self { data })
    }

    #[inline]
    pub fn x_min(&self) -> f64 {
        self.data[0].x
    }

    #[inline]
    pub fn x_max(&self) -> f64 {
        self.data[self.data.len() - 1].x
    }

    #[inline]
    pub fn contains(&self, x_val: f64) -> bool {
        self.x_min() <= x_val && x_val <= self.x_max()
    }

    // Caller guarantees that the region contains x_val
    pub fn interpolate(&self, x_val: f64) -> f64 {
        let idx = match self.data.binary_search_by(|xy| xy.x.total_cmp(&x_val)) {
            // Exactly on a data point
            Ok(idx) => return self.data[idx].y,
            Err(idx) => idx.saturating_sub(1).min(self.data.len().saturating_sub(2)),
        };
        if self.data.len() == 1 {
            return self.data[0].y;
        }

        let start = &self.data[idx];
        let end = &self.data[idx + 1];
        log_log(x_val, start, end)
    }
}

#[inline]
fn log_log(x: f64, start: &XY, end: &XY) -> f64 {
    let slope = (end.y / start.y).ln() / (end.x / start.x).ln();
    start.y * ((x / start.x).ln() * slope).exp()
}
