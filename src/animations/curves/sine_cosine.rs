use super::{CurveContext, CurveFamily};
use crate::animations::common::uniform;
use crate::payload::Point2D;
use std::f32::consts::PI;

const NOISE_AMPLITUDE: f32 = 0.1;

/// Sine/cosine sweep - Two sines whose frequency and phase sweep up over time, the second one
/// jittered with uniform noise
pub(crate) struct SineCosine;

impl CurveFamily for SineCosine {
    fn tag(&self) -> &'static str {
        "sine_cosine_group"
    }

    fn domain(&self) -> (f32, f32, usize) {
        (0.0, 4.0 * PI, 1000)
    }

    fn series(&self) -> usize {
        2
    }

    fn point(&self, ctx: &CurveContext, x: f32, rng: &mut fastrand::Rng) -> Point2D {
        let series = ctx.series as f32;
        let progress = ctx.progress();
        let frequency = 1.0 + progress * 5.0 + series;
        let amplitude = 1.0 + series * 0.5;
        let phase_shift = progress * PI;

        let mut y = amplitude * (frequency * x + phase_shift).sin();
        if ctx.series == 1 {
            y += uniform(rng, -NOISE_AMPLITUDE, NOISE_AMPLITUDE);
        }
        Point2D::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animations::common::Frame;

    fn ctx(series: usize) -> CurveContext {
        CurveContext { series, frame: Frame { index: 50, time: 50.0 }, total_frames: 200 }
    }

    #[test]
    fn first_series_is_noise_free() {
        let mut first = fastrand::Rng::with_seed(1);
        let mut second = fastrand::Rng::with_seed(2);
        for step in 0..50 {
            let x = step as f32 * 0.25;
            let expected = (2.25 * x + 0.25 * PI).sin();
            let a = SineCosine.point(&ctx(0), x, &mut first).y;
            let b = SineCosine.point(&ctx(0), x, &mut second).y;
            assert_eq!(a, b);
            assert!((a - expected).abs() < 1e-5, "{a} vs {expected}");
        }
    }

    #[test]
    fn second_series_noise_is_bounded() {
        let mut rng = fastrand::Rng::with_seed(7);
        for step in 0..500 {
            let x = step as f32 * 0.025;
            let clean = 1.5 * (3.25 * x + 0.25 * PI).sin();
            let noise = SineCosine.point(&ctx(1), x, &mut rng).y - clean;
            assert!(noise.abs() <= NOISE_AMPLITUDE + 1e-5, "{noise}");
        }
    }
}
