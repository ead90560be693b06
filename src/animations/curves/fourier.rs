use super::{CurveContext, CurveFamily};
use crate::animations::common::Schedule;
use crate::payload::Point2D;
use std::f32::consts::PI;

/// Fourier square wave - Odd harmonic partial sums that sharpen into a square wave.
///
/// The first line is the partial sum of the first `k` odd harmonics on frame `k`; the second one is
/// the harmonic that frame added.
pub(crate) struct FourierSquareWave;

fn harmonic(n: u32, t: f32) -> f32 {
    (4.0 / PI) * (1.0 / n as f32) * (n as f32 * t).sin()
}

impl CurveFamily for FourierSquareWave {
    fn tag(&self) -> &'static str {
        "fourier_square_wave_frame"
    }

    fn domain(&self) -> (f32, f32, usize) {
        (0.0, 2.0 * PI, 1000)
    }

    fn series(&self) -> usize {
        2
    }

    fn schedule(&self) -> Schedule {
        Schedule::Frames { start: 1, count: 100 }
    }

    fn point(&self, ctx: &CurveContext, t: f32, _rng: &mut fastrand::Rng) -> Point2D {
        let terms = (ctx.frame.time as u32).max(1);
        let y = match ctx.series {
            0 => (1..=terms).map(|k| harmonic(2 * k - 1, t)).sum(),
            _ => harmonic(2 * terms - 1, t),
        };
        Point2D::new(t, y)
    }
}
