use super::{ParametricSurface, SurfacePreset};
use crate::animations::common::Schedule;
use crate::animations::AnimationOptions;
use crate::error::Result;
use crate::payload::Point3D;
use crate::space::{build_parameter_space, AxisOrder, ParameterSpace};
use std::f32::consts::PI;

const RESOLUTION: usize = 300;
const EXTENT: f32 = 5.0 * PI;

/// The square `(x, y)` domain shared by the room surfaces
pub(super) fn floor_space(options: &AnimationOptions) -> Result<ParameterSpace> {
    let counts = [options.width.unwrap_or(RESOLUTION), options.height.unwrap_or(RESOLUTION)];
    build_parameter_space(&[(-EXTENT, EXTENT), (-EXTENT, EXTENT)], &counts, AxisOrder::FirstFastest)
}

/// Room - A radial standing wave pulsing over a square floor
pub(crate) struct Room;

impl ParametricSurface for Room {
    fn point(&self, [x, y, _]: [f32; 3], offset: f32) -> Point3D {
        let radius = x.hypot(y);
        Point3D::new(x, y, 3.0 * offset.sin() * (offset + radius).sin())
    }
}

impl SurfacePreset for Room {
    const TAG: &'static str = "room_plot";

    fn schedule() -> Schedule {
        Schedule::linear(0.1, PI * 100.0, 100)
    }

    fn space(options: &AnimationOptions) -> Result<ParameterSpace> {
        floor_space(options)
    }

    fn build() -> Self {
        Self
    }
}
