mod darboux;
mod gauss_kronrod;
mod quad_partition;

pub use darboux::{darboux, darboux_fn};
pub use gauss_kronrod::{gauss_kronrod_15, nquad, quad, QuadOptions, QuadResult};
pub use quad_partition::{quad_partition, quad_partition_1d};
