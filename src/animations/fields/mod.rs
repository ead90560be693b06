//! 2D color field animations.
//!
//! A field maps every cell of a grid to three normalized channels, which are then clamped and
//! scaled into a color.

mod cellular;
mod heat_map;
mod interference;
mod vector_flow;

pub(crate) use cellular::Cellular;
pub(crate) use heat_map::HeatMap;
pub(crate) use interference::Interference;
pub(crate) use vector_flow::VectorFlow;

use super::common::{Animation, Frame, Schedule};
use super::AnimationOptions;
use crate::error::Result;
use crate::payload::{Grid, Payload, Rgb};
use crate::space::{build_grid, IndexGrid};
use rayon::prelude::*;

/// A scalar field evaluated per cell, producing normalized R, G and B channels
pub trait ColorField: Send + Sync {
    fn sample(&self, x: usize, y: usize, time: f32) -> [f32; 3];
}

impl<F> ColorField for F
where
    F: Fn(usize, usize, f32) -> [f32; 3] + Send + Sync,
{
    fn sample(&self, x: usize, y: usize, time: f32) -> [f32; 3] {
        self(x, y, time)
    }
}

/// A field with a default size, schedule and tag
pub(crate) trait FieldPreset: ColorField + Sized + 'static {
    const TAG: &'static str;
    const SIZE: (usize, usize);

    fn schedule() -> Schedule;

    /// Build the field for a grid of the given dimensions
    fn for_size(width: usize, height: usize) -> Self;
}

/// Renders a [`ColorField`] into one grid per scheduled time.
pub struct FieldAnimator<F> {
    field: F,
    grid: IndexGrid,
    schedule: Schedule,
    tag: String,
}

impl<F: ColorField> FieldAnimator<F> {
    pub fn new(field: F, width: usize, height: usize, schedule: Schedule, tag: impl Into<String>) -> Result<Self> {
        let grid = build_grid(width, height)?;
        schedule.validate()?;
        Ok(Self { field, grid, schedule, tag: tag.into() })
    }

    /// Evaluate the field at `time` over every cell
    pub fn render_grid(&self, time: f32) -> Grid {
        let cells: Vec<Rgb> = self
            .grid
            .xs
            .par_iter()
            .zip(self.grid.ys.par_iter())
            .map(|(x, y)| Rgb::from_unit(self.field.sample(*x, *y, time)))
            .collect();
        Grid::from_row_major(self.grid.width, self.grid.height, cells)
    }
}

impl<P: FieldPreset> FieldAnimator<P> {
    pub(crate) fn preset(options: &AnimationOptions) -> Result<Self> {
        let width = options.width.unwrap_or(P::SIZE.0);
        let height = options.height.unwrap_or(P::SIZE.1);
        Self::new(P::for_size(width, height), width, height, options.schedule_or(P::schedule()), options.tag_or(P::TAG))
    }
}

impl<F: ColorField> Animation for FieldAnimator<F> {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    fn render_frame(&mut self, frame: Frame) -> Payload {
        Payload::Grid(self.render_grid(frame.time))
    }
}
