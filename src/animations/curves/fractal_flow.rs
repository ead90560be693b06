use super::{CurveContext, CurveFamily};
use crate::payload::Point2D;
use std::f32::consts::PI;

const OCTAVES: u32 = 4;

/// Fractal flow - Sum of sine octaves, each pass modulating the accumulated signal
pub(crate) struct FractalFlow;

impl CurveFamily for FractalFlow {
    fn tag(&self) -> &'static str {
        "fractal-flow-chart"
    }

    fn domain(&self) -> (f32, f32, usize) {
        (-2.0 * PI, 2.0 * PI, 1000)
    }

    fn series(&self) -> usize {
        4
    }

    fn point(&self, ctx: &CurveContext, x: f32, rng: &mut fastrand::Rng) -> Point2D {
        let t = ctx.frame.time * 0.03;
        let scale = 1.0 + ctx.series as f32 * 0.5;

        let mut y = 0.0;
        for octave in 1..=OCTAVES {
            let freq = octave as f32 * scale;
            y += (x * freq + t * freq).sin() / freq;
            y *= 1.0 + (x * 0.1).cos() * 0.2;
        }
        y += rng.f32() * 0.05 / (scale + 0.5);
        Point2D::new(x, y)
    }
}
