mod beam_in_target;

pub use beam_in_target::{areal_density, BeamInTarget};
