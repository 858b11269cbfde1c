use std::f64::consts::PI;

use crate::math::{normal_cdf, normal_pdf, normal_ppf};
use crate::probability::Probability;

/// Normalized energy distribution of a resonance.
///
/// `ppf` is the inverse of `cdf`. It returns -inf and +inf for the
/// quantiles 0 and 1 of unbounded shapes.
pub trait LineShape: Send + Sync {
    fn pdf(&self, energy: f64) -> f64;
    fn cdf(&self, energy: f64) -> f64;
    fn ppf(&self, quantile: Probability) -> f64;
    /// Position of the maximum.
    fn location(&self) -> f64;
}

//=====================================================================
// Rectangle of unit area between `lower` and `lower + width`.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    pub lower: f64,
    pub width: f64,
}

impl LineShape for Uniform {
    fn pdf(&self, energy: f64) -> f64 {
        if energy >= self.lower && energy <= self.lower + self.width {
            1.0 / self.width
        } else {
            0.0
        }
    }

    fn cdf(&self, energy: f64) -> f64 {
        ((energy - self.lower) / self.width).clamp(0.0, 1.0)
    }

    fn ppf(&self, quantile: Probability) -> f64 {
        self.lower + quantile.value() * self.width
    }

    fn location(&self) -> f64 {
        self.lower + 0.5 * self.width
    }
}

//=====================================================================
// Cauchy (Lorentz) distribution with half width at half maximum `scale`.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cauchy {
    pub location: f64,
    pub scale: f64,
}

impl LineShape for Cauchy {
    fn pdf(&self, energy: f64) -> f64 {
        let z = (energy - self.location) / self.scale;
        1.0 / (PI * self.scale * (1.0 + z * z))
    }

    // 0.5 + atan(z)/pi, written so that the far tails keep their precision
    fn cdf(&self, energy: f64) -> f64 {
        let z = (energy - self.location) / self.scale;
        1.0_f64.atan2(-z) / PI
    }

    fn ppf(&self, quantile: Probability) -> f64 {
        let p = quantile.value();
        if p <= 0.0 {
            f64::NEG_INFINITY
        } else if p >= 1.0 {
            f64::INFINITY
        } else if p < 0.5 {
            self.location - self.scale / (PI * p).tan()
        } else {
            self.location + self.scale / (PI * (1.0 - p)).tan()
        }
    }

    fn location(&self) -> f64 {
        self.location
    }
}

//=====================================================================
// Normal distribution.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    pub mean: f64,
    pub sigma: f64,
}

impl LineShape for Normal {
    fn pdf(&self, energy: f64) -> f64 {
        normal_pdf((energy - self.mean) / self.sigma) / self.sigma
    }

    fn cdf(&self, energy: f64) -> f64 {
        normal_cdf((energy - self.mean) / self.sigma)
    }

    fn ppf(&self, quantile: Probability) -> f64 {
        self.mean + self.sigma * normal_ppf(quantile.value())
    }

    fn location(&self) -> f64 {
        self.mean
    }
}
