use crate::error::{Result, RiesError};

// Quantiles and coverages live in [0.0, 1.0]. Values coming from internal
// computations are only checked in debug builds, values handed in by a
// caller go through `Probability::new`.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Probability(pub f64);

impl Probability {
    #[inline(always)]
    pub fn new_unchecked(val: f64) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&val),
            "Probability must be in [0.0, 1.0], got {}",
            val
        );
        Probability(val)
    }

    pub fn new(val: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&val) {
            Ok(Probability(val))
        } else {
            Err(RiesError::InvalidArgument(format!(
                "probability must be in [0.0, 1.0], got {}",
                val
            )))
        }
    }

    // A coverage of 0 or 1 yields an empty or unbounded central interval
    pub fn coverage(val: f64) -> Result<Self> {
        if val > 0.0 && val < 1.0 {
            Ok(Probability(val))
        } else {
            Err(RiesError::InvalidArgument(format!(
                "coverage must be in (0.0, 1.0), got {}",
                val
            )))
        }
    }

    #[inline(always)]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Lower and upper quantile of the central interval with this coverage.
    pub fn central_quantiles(self) -> (Probability, Probability) {
        (
            Probability::new_unchecked(0.5 * (1.0 - self.0)),
            Probability::new_unchecked(0.5 * (1.0 + self.0)),
        )
    }
}
