mod helper_functions;

#[cfg(test)]
pub mod testing;

pub use helper_functions::{linspace, read_lines, sorted_union};
