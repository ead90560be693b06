use super::{CurveContext, CurveFamily};
use crate::payload::Point2D;
use std::f32::consts::PI;

/// Harmonic waves - Interfering harmonics travelling in opposite directions
pub(crate) struct HarmonicWaves;

impl CurveFamily for HarmonicWaves {
    fn tag(&self) -> &'static str {
        "harmonic-waves-chart"
    }

    fn domain(&self) -> (f32, f32, usize) {
        (-PI, PI, 1000)
    }

    fn series(&self) -> usize {
        3
    }

    fn point(&self, ctx: &CurveContext, x: f32, rng: &mut fastrand::Rng) -> Point2D {
        let t = ctx.frame.time * 0.05;
        let freq = 1.0 + ctx.series as f32 * 0.5;
        let amplitude = 1.0 / (freq + 1.0);
        let phase = t * freq;

        let octave = amplitude * 0.5 * (x * freq * 2.0 - phase).cos();
        let y = amplitude * (x * freq + phase).sin() + octave + rng.f32() * 0.01;
        Point2D::new(x, y)
    }
}
