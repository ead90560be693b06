use super::{ParametricSurface, SurfacePreset};
use crate::animations::common::Schedule;
use crate::animations::AnimationOptions;
use crate::error::Result;
use crate::payload::Point3D;
use crate::space::{build_parameter_space, AxisOrder, ParameterSpace};
use std::f32::consts::PI;

const MAX_RADIUS: f32 = 10.0;

/// Spherical shell - Nested spherical grids spinning around the Y axis
pub(crate) struct SphericalShell;

impl ParametricSurface for SphericalShell {
    fn point(&self, [r, theta, phi]: [f32; 3], angle: f32) -> Point3D {
        let x = r * theta.sin() * phi.cos();
        let y = r * theta.sin() * phi.sin();
        let z = r * theta.cos();

        let (sin, cos) = angle.sin_cos();
        Point3D::new(x * cos + z * sin, y, -x * sin + z * cos)
    }
}

impl SurfacePreset for SphericalShell {
    const TAG: &'static str = "animated_spherical_grid_plot";

    fn schedule() -> Schedule {
        Schedule::linear(0.0, 2.0 * PI, 60)
    }

    fn space(_options: &AnimationOptions) -> Result<ParameterSpace> {
        build_parameter_space(&[(1.0, MAX_RADIUS), (0.0, PI), (0.0, 2.0 * PI)], &[10, 20, 40], AxisOrder::LastFastest)
    }

    fn build() -> Self {
        Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_preserves_radius() {
        for angle in [0.0, 0.3, PI, 5.0] {
            let point = SphericalShell.point([4.0, 1.1, 2.3], angle);
            let radius = (point.x * point.x + point.y * point.y + point.z * point.z).sqrt();
            assert!((radius - 4.0).abs() < 1e-5);
        }
    }

    #[test]
    fn quarter_turn_maps_z_to_x() {
        let point = SphericalShell.point([1.0, 0.0, 0.0], PI / 2.0);
        assert!((point.x - 1.0).abs() < 1e-6);
        assert!(point.z.abs() < 1e-6);
    }
}
