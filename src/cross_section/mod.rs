mod cross_section;
mod cross_section_sum;

pub use cross_section::{ConstantCrossSection, CrossSection};
pub use cross_section_sum::CrossSectionSum;
