mod interpolation_region;
mod interpolation_table;

pub use interpolation_region::{InterpolationRegion, XY};
pub use interpolation_table::{InterpolationError, InterpolationTable};
