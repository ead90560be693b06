use super::{CurveContext, CurveFamily};
use crate::animations::common::uniform;
use crate::payload::Point2D;
use std::f32::consts::PI;

const JITTER: f32 = 0.05;

/// Circular dance - Concentric jittering circles rotating together
pub(crate) struct CircularDance;

impl CurveFamily for CircularDance {
    fn tag(&self) -> &'static str {
        "circular-dance-chart"
    }

    fn domain(&self) -> (f32, f32, usize) {
        (0.0, 2.0 * PI, 1000)
    }

    fn series(&self) -> usize {
        4
    }

    fn point(&self, ctx: &CurveContext, theta: f32, rng: &mut fastrand::Rng) -> Point2D {
        let t = ctx.frame.time * 0.03;
        let radius = 1.0 + ctx.series as f32 * 0.5;
        let x = radius * (theta + t).cos() + uniform(rng, -JITTER, JITTER);
        let y = radius * (theta + t).sin() + uniform(rng, -JITTER, JITTER);
        Point2D::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animations::common::Frame;

    #[test]
    fn points_stay_near_their_circle() {
        let mut rng = fastrand::Rng::new();
        for series in 0..4 {
            let ctx = CurveContext { series, frame: Frame { index: 10, time: 10.0 }, total_frames: 200 };
            let expected = 1.0 + series as f32 * 0.5;
            for step in 0..100 {
                let point = CircularDance.point(&ctx, step as f32 * 0.0628, &mut rng);
                let radius = point.x.hypot(point.y);
                assert!((radius - expected).abs() <= 2.0 * JITTER, "{radius} vs {expected}");
            }
        }
    }
}
