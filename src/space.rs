//! Coordinate spaces: linearly spaced axes, index grids and parameter-space products.

use crate::error::{Error, Result};
use itertools::iproduct;

/// Generate `count` evenly spaced values from `start` to `end`, both inclusive.
///
/// A single element space yields just `start`.
pub fn linspace(count: usize, start: f32, end: f32) -> Vec<f32> {
    let delta = if count > 1 { (end - start) / (count - 1) as f32 } else { 0.0 };
    (0..count).map(|i| start + delta * i as f32).collect()
}

/// Row-major index coordinates of a `width x height` grid.
#[derive(Clone, Debug)]
pub struct IndexGrid {
    pub width: usize,
    pub height: usize,
    /// `xs[i * width + j] == j`
    pub xs: Vec<usize>,
    /// `ys[i * width + j] == i`
    pub ys: Vec<usize>,
}

impl IndexGrid {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Build the index arrays for a `width x height` grid.
pub fn build_grid(width: usize, height: usize) -> Result<IndexGrid> {
    if width == 0 || height == 0 {
        return Err(Error::config(format!("grid dimensions must be positive, got {width}x{height}")));
    }
    let (ys, xs): (Vec<usize>, Vec<usize>) = iproduct!(0..height, 0..width).unzip();
    Ok(IndexGrid { width, height, xs, ys })
}

/// Which axis of a parameter space varies fastest when flattened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrder {
    /// The first axis varies fastest, like a `meshgrid(x, y)` flattened row by row.
    FirstFastest,

    /// The last axis varies fastest, like a `meshgrid(.., indexing='ij')`.
    LastFastest,
}

/// A flattened cartesian product of linearly spaced axes.
#[derive(Clone, Debug)]
pub struct ParameterSpace {
    /// One flattened coordinate array per axis, all of the same length.
    pub axes: Vec<Vec<f32>>,
}

impl ParameterSpace {
    pub fn len(&self) -> usize {
        self.axes.first().map(Vec::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The coordinates of sample `index`, padded with zeros up to three axes.
    pub fn sample(&self, index: usize) -> [f32; 3] {
        let mut sample = [0.0; 3];
        for (slot, axis) in sample.iter_mut().zip(&self.axes) {
            *slot = axis[index];
        }
        sample
    }
}

/// Build the cartesian product of two or three linearly spaced axes.
///
/// `ranges[i]` is the inclusive `(start, end)` of axis `i` and `counts[i]` how many samples it has.
pub fn build_parameter_space(ranges: &[(f32, f32)], counts: &[usize], order: AxisOrder) -> Result<ParameterSpace> {
    if ranges.len() != counts.len() {
        return Err(Error::config(format!("{} ranges given for {} axis counts", ranges.len(), counts.len())));
    }
    if !(2..=3).contains(&ranges.len()) {
        return Err(Error::config(format!("parameter spaces need 2 or 3 axes, got {}", ranges.len())));
    }
    if let Some(axis) = counts.iter().position(|count| *count == 0) {
        return Err(Error::config(format!("axis {axis} must have at least one sample")));
    }

    let axes: Vec<Vec<f32>> =
        ranges.iter().zip(counts).map(|((start, end), count)| linspace(*count, *start, *end)).collect();

    // Indices into each axis, slowest first.
    let slowest_first: Vec<usize> = match order {
        AxisOrder::FirstFastest => (0..axes.len()).rev().collect(),
        AxisOrder::LastFastest => (0..axes.len()).collect(),
    };
    let total: usize = counts.iter().product();
    let mut flattened: Vec<Vec<f32>> = (0..axes.len()).map(|_| Vec::with_capacity(total)).collect();
    match slowest_first.as_slice() {
        [a, b] => {
            for (i, j) in iproduct!(0..counts[*a], 0..counts[*b]) {
                flattened[*a].push(axes[*a][i]);
                flattened[*b].push(axes[*b][j]);
            }
        }
        [a, b, c] => {
            for (i, j, k) in iproduct!(0..counts[*a], 0..counts[*b], 0..counts[*c]) {
                flattened[*a].push(axes[*a][i]);
                flattened[*b].push(axes[*b][j]);
                flattened[*c].push(axes[*c][k]);
            }
        }
        _ => unreachable!("axis count validated above"),
    }
    Ok(ParameterSpace { axes: flattened })
}
