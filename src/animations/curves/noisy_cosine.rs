use super::{CurveContext, CurveFamily};
use crate::payload::Point2D;
use std::f32::consts::PI;

/// Noisy cosine - Two drifting cosines modulated by a logarithmic envelope, with noise that
/// settles down as the animation progresses
pub(crate) struct NoisyCosine;

impl CurveFamily for NoisyCosine {
    fn tag(&self) -> &'static str {
        "line-chart-id"
    }

    fn domain(&self) -> (f32, f32, usize) {
        (0.0, 2.0 * PI * 5.0, 1000)
    }

    fn series(&self) -> usize {
        2
    }

    fn point(&self, ctx: &CurveContext, x: f32, rng: &mut fastrand::Rng) -> Point2D {
        let time = ctx.frame.time;
        let shifted = x + ctx.series as f32 + time / 50.0;
        // log10(0) would poison the first sample of every line.
        let envelope = x.max(f32::EPSILON).log10().cos();
        let noise = rng.f32() / (time / 20.0 + 0.1);
        Point2D::new(x, shifted.cos() * envelope + noise)
    }
}
