use super::{ParametricSurface, SurfacePreset};
use crate::animations::common::Schedule;
use crate::animations::AnimationOptions;
use crate::error::Result;
use crate::payload::Point3D;
use crate::space::{build_parameter_space, AxisOrder, ParameterSpace};
use std::f32::consts::PI;

const STRIP_WIDTH: f32 = 2.0;

/// Möbius strip - A single static frame of a half twisted band
pub(crate) struct MobiusStrip;

impl ParametricSurface for MobiusStrip {
    fn point(&self, [t, w, _]: [f32; 3], _time: f32) -> Point3D {
        let half_width = w / 2.0;
        let ring = 1.0 + half_width * t.cos() / 2.0;
        Point3D::new(ring * t.cos(), ring * t.sin(), half_width * t.sin() / 2.0)
    }
}

impl SurfacePreset for MobiusStrip {
    const TAG: &'static str = "mobius_strip_plot";

    fn schedule() -> Schedule {
        Schedule::frames(1)
    }

    fn space(options: &AnimationOptions) -> Result<ParameterSpace> {
        let counts = [options.width.unwrap_or(200), options.height.unwrap_or(20)];
        let ranges = [(0.0, 2.0 * PI), (-STRIP_WIDTH / 2.0, STRIP_WIDTH / 2.0)];
        // The width parameter varies fastest along each step of the loop.
        build_parameter_space(&ranges, &counts, AxisOrder::LastFastest)
    }

    fn build() -> Self {
        Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_line_is_unit_circle() {
        for step in 0..16 {
            let t = step as f32 * PI / 8.0;
            let point = MobiusStrip.point([t, 0.0, 0.0], 0.0);
            assert!((point.radial_distance() - 1.0).abs() < 1e-6);
            assert_eq!(point.z, 0.0);
        }
    }
}
