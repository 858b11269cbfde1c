use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use std::sync::Arc;

use crate::cross_section::{ConstantCrossSection, CrossSection};
use crate::error::Result;
use crate::utils::sorted_union;

//=====================================================================
// Linear combination of cross sections. Sums and scalings of cross
// sections are expressed through this type, so that e.g. an element
// cross section is the abundance-weighted sum of isotope cross sections.
//=====================================================================
#[derive(Clone, Default)]
pub struct CrossSectionSum {
    terms: Vec<(f64, Arc<dyn CrossSection>)>,
}

impl CrossSectionSum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum with a single term of weight 1.
    pub fn of<C: CrossSection + 'static>(cross_section: C) -> Self {
        Self::from_shared(Arc::new(cross_section))
    }

    pub fn from_shared(cross_section: Arc<dyn CrossSection>) -> Self {
        Self {
            terms: vec![(1.0, cross_section)],
        }
    }

    pub fn push(&mut self, scale: f64, cross_section: Arc<dyn CrossSection>) {
        self.terms.push((scale, cross_section));
    }

    pub fn terms(&self) -> &[(f64, Arc<dyn CrossSection>)] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl fmt::Debug for CrossSectionSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrossSectionSum")
            .field("scales", &self.terms.iter().map(|(scale, _)| *scale).collect::<Vec<_>>())
            .finish()
    }
}

impl CrossSection for CrossSectionSum {
    fn evaluate(&self, energy: f64) -> f64 {
        self.terms
            .iter()
            .map(|(scale, cross_section)| scale * cross_section.evaluate(energy))
            .sum()
    }

    /// Union of the probability grids of all terms.
    fn equidistant_probability_grid(
        &self,
        limits: (f64, f64),
        n_points: usize,
    ) -> Result<Vec<f64>> {
        let grids = self
            .terms
            .iter()
            .map(|(_, cross_section)| cross_section.equidistant_probability_grid(limits, n_points))
            .collect::<Result<Vec<_>>>()?;
        Ok(sorted_union(grids))
    }
}

impl Add for CrossSectionSum {
    type Output = CrossSectionSum;

    fn add(mut self, rhs: CrossSectionSum) -> Self::Output {
        self.terms.extend(rhs.terms);
        self
    }
}

impl Add<f64> for CrossSectionSum {
    type Output = CrossSectionSum;

    fn add(mut self, rhs: f64) -> Self::Output {
        self.push(1.0, Arc::new(ConstantCrossSection(rhs)));
        self
    }
}

impl Add<CrossSectionSum> for f64 {
    type Output = CrossSectionSum;

    fn add(self, rhs: CrossSectionSum) -> Self::Output {
        rhs + self
    }
}

impl Mul<f64> for CrossSectionSum {
    type Output = CrossSectionSum;

    fn mul(mut self, rhs: f64) -> Self::Output {
        for (scale, _) in self.terms.iter_mut() {
            *scale *= rhs;
        }
        self
    }
}

impl Mul<CrossSectionSum> for f64 {
    type Output = CrossSectionSum;

    fn mul(self, rhs: CrossSectionSum) -> Self::Output {
        rhs * self
    }
}

impl Sum for CrossSectionSum {
    fn sum<I: Iterator<Item = CrossSectionSum>>(iter: I) -> Self {
        iter.fold(CrossSectionSum::new(), |acc, next| acc + next)
    }
}
