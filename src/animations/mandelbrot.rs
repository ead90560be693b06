use super::common::{Animation, Frame, Schedule};
use super::AnimationOptions;
use crate::color::hsv_to_rgb;
use crate::error::Result;
use crate::payload::{Grid, Payload, Rgb};
use crate::space::{build_parameter_space, AxisOrder, ParameterSpace};
use rayon::prelude::*;
use std::f32::consts::PI;

const TARGET: (f64, f64) = (-0.7435685, 0.131405);
const DEFAULT_SIZE: usize = 1000;
const ESCAPE_RADIUS: f64 = 2.0;

/// Where and when a sample left the escape radius
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Escape {
    /// Zero based iteration at which `|z|` first exceeded the escape radius
    pub iteration: u32,
    /// `|z|` at that iteration
    pub magnitude: f64,
}

impl Escape {
    /// Fractional escape count, normalized by the iteration limit
    pub fn smooth(&self, max_iterations: u32) -> f64 {
        let smooth = self.iteration as f64 + 1.0 - self.magnitude.max(1e-10).log2().log2();
        smooth / max_iterations as f64
    }
}

/// Iterate `z = z² + c` for a batch of samples at once.
///
/// Samples that escape are frozen and drop out of the batch; the loop stops early once none remain.
/// `None` means the sample never escaped within `max_iterations`.
pub fn escape_batch(points: &[(f64, f64)], max_iterations: u32) -> Vec<Option<Escape>> {
    let mut z = vec![(0.0_f64, 0.0_f64); points.len()];
    let mut escapes = vec![None; points.len()];
    let mut active: Vec<usize> = (0..points.len()).collect();

    for iteration in 0..max_iterations {
        if active.is_empty() {
            break;
        }
        active.retain(|&index| {
            let (re, im) = z[index];
            let (c_re, c_im) = points[index];
            let next = (re * re - im * im + c_re, 2.0 * re * im + c_im);
            z[index] = next;
            let magnitude = next.0.hypot(next.1);
            if magnitude > ESCAPE_RADIUS {
                escapes[index] = Some(Escape { iteration, magnitude });
                false
            } else {
                true
            }
        });
    }
    escapes
}

/// Fractal grid - A spiralling zoom into the Mandelbrot set's seahorse valley
pub struct MandelbrotRenderer {
    width: usize,
    height: usize,
    base: ParameterSpace,
    schedule: Schedule,
    tag: String,
}

impl MandelbrotRenderer {
    pub const TAG: &'static str = "fractal-grid";

    pub(crate) fn new(options: &AnimationOptions) -> Result<Self> {
        let width = options.width.unwrap_or(DEFAULT_SIZE);
        let height = options.height.unwrap_or(DEFAULT_SIZE);
        let base = build_parameter_space(&[(-2.0, 2.0), (-2.0, 2.0)], &[width, height], AxisOrder::FirstFastest)?;
        let schedule = options.schedule_or(Schedule::linear(0.0, 2.0 * PI, 2));
        schedule.validate()?;
        Ok(Self { width, height, base, schedule, tag: options.tag_or(Self::TAG) })
    }

    /// The iteration limit grows with the zoom so deeper frames keep their detail
    pub fn max_iterations(time: f64) -> u32 {
        let zoom = time.exp();
        (500.0 + (zoom.ln() * 20.0).floor()).max(1.0) as u32
    }

    /// Center of the view at `time`, spiralling into the target as the zoom grows
    fn center(time: f64) -> (f64, f64) {
        let zoom = time.exp();
        let radius = 1.0 / (1.0 + time * 0.1);
        let angle = time * 3.0;
        (TARGET.0 + radius * angle.cos() / zoom, TARGET.1 + radius * angle.sin() / zoom)
    }

    pub fn render_grid(&self, time: f32) -> Grid {
        let time = time as f64;
        self.render_view(Self::center(time), time.exp(), time)
    }

    /// Render the base square scaled down by `zoom` and moved to `center`, colored for `time`
    pub fn render_view(&self, (center_x, center_y): (f64, f64), zoom: f64, time: f64) -> Grid {
        let max_iterations = Self::max_iterations(time);
        let saturation = (0.8 + 0.2 * (2.0 * time).sin()) as f32;
        let [xs, ys] = [&self.base.axes[0], &self.base.axes[1]];

        let mut cells = vec![Rgb::BLACK; self.width * self.height];
        cells.par_chunks_mut(self.width).enumerate().for_each(|(row, out)| {
            let offset = row * self.width;
            let points: Vec<_> = (offset..offset + self.width)
                .map(|i| (xs[i] as f64 / zoom + center_x, ys[i] as f64 / zoom + center_y))
                .collect();
            for (cell, escape) in out.iter_mut().zip(escape_batch(&points, max_iterations)) {
                let Some(escape) = escape else {
                    continue;
                };
                let normalized = escape.smooth(max_iterations);
                let hue = ((normalized * 8.0 + time * 0.2).rem_euclid(1.0) * 6.0) as f32;
                *cell = hsv_to_rgb(hue, saturation, 1.0);
            }
        });
        Grid::from_row_major(self.width, self.height, cells)
    }
}

impl Animation for MandelbrotRenderer {
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
