use std::io::BufRead;

use anyhow::Result;

//====================================================================
// Assorted helper functions.
//====================================================================

// Read a specified number of lines from a buffered reader
#[inline]
pub fn read_lines<R: BufRead>(reader: &mut R, num_lines: usize) -> Result<Vec<String>> {
    reader
        .lines()
        .take(num_lines)
        .map(|line| line.map_err(anyhow::Error::from))
        .collect::<Result<Vec<_>>>()
}

/// `n` evenly spaced values from `start` to `stop`, both included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = stop;
            values
        }
    }
}

/// Sorted union of several grids with exact duplicates removed.
pub fn sorted_union<I>(grids: I) -> Vec<f64>
where
    I: IntoIterator<Item = Vec<f64>>,
{
    let mut union: Vec<f64> = grids.into_iter().flatten().collect();
    union.sort_by(|a, b| a.total_cmp(b));
    union.dedup();
    union
}
