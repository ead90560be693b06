use super::{CurveContext, CurveFamily};
use crate::payload::Point2D;
use std::f32::consts::PI;

/// Quantum waves - Gaussian wave packets with a dispersive carrier
pub(crate) struct QuantumWaves;

impl CurveFamily for QuantumWaves {
    fn tag(&self) -> &'static str {
        "quantum-waves-chart"
    }

    fn domain(&self) -> (f32, f32, usize) {
        (-3.0 * PI, 3.0 * PI, 1200)
    }

    fn series(&self) -> usize {
        3
    }

    fn point(&self, ctx: &CurveContext, x: f32, rng: &mut fastrand::Rng) -> Point2D {
        let t = ctx.frame.time * 0.04;
        let series = ctx.series as f32;
        let packet_width = 1.0 + series * 0.5;
        let envelope = (-x * x / (2.0 * packet_width)).exp();

        // Wave number and its dispersion relation
        let k = 2.0 + series * 0.5;
        let omega = k * k * 0.5;
        let phase = k * x - omega * t;

        let y = envelope * phase.cos() * (1.0 + 0.2 * (t * 0.5).sin());
        let noise = rng.f32() * 0.02 * envelope;
        Point2D::new(x, y + noise)
    }
}
