use super::{CurveContext, CurveFamily};
use crate::payload::Point2D;
use std::f32::consts::PI;

/// Damped oscillation - Decaying cosines whose damping coefficient grows over time
pub(crate) struct DampedOscillation;

impl CurveFamily for DampedOscillation {
    fn tag(&self) -> &'static str {
        "damped-oscillation-id"
    }

    fn domain(&self) -> (f32, f32, usize) {
        (0.0, 10.0, 1000)
    }

    fn series(&self) -> usize {
        2
    }

    fn point(&self, ctx: &CurveContext, t: f32, _rng: &mut fastrand::Rng) -> Point2D {
        let series = ctx.series as f32;
        let amplitude = 1.0 + series * 0.5;
        let omega = 2.0 * PI * (1.0 + series);
        let gamma = 0.1 + ctx.progress() * 0.5;
        Point2D::new(t, amplitude * (-gamma * t).exp() * (omega * t).cos())
    }
}
