use super::{CurveContext, CurveFamily};
use crate::payload::Point2D;
use std::f32::consts::PI;

/// Spiral waves - Rotating spirals whose radius grows with the square root of the angle
pub(crate) struct SpiralWaves;

impl CurveFamily for SpiralWaves {
    fn tag(&self) -> &'static str {
        "spiral-waves-chart"
    }

    fn domain(&self) -> (f32, f32, usize) {
        (0.0, 2.0 * PI * 3.0, 1000)
    }

    fn series(&self) -> usize {
        2
    }

    fn point(&self, ctx: &CurveContext, value: f32, rng: &mut fastrand::Rng) -> Point2D {
        let angle = value + ctx.frame.time * 0.02;
        let radius = value.sqrt() + ctx.series as f32 * 0.5;
        Point2D::new(angle.cos() * radius, angle.sin() * radius + rng.f32() * 0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animations::common::Frame;

    #[test]
    fn radius_follows_square_root() {
        let mut rng = fastrand::Rng::with_seed(3);
        let ctx = CurveContext { series: 0, frame: Frame { index: 0, time: 0.0 }, total_frames: 200 };
        let point = SpiralWaves.point(&ctx, 4.0, &mut rng);
        // Noise only affects y, and by at most 0.1.
        assert!((point.x - 4.0_f32.cos() * 2.0).abs() < 1e-6);
        let radius = point.x.hypot(point.y);
        assert!((radius - 2.0).abs() < 0.1);
    }
}
