use super::{ParametricSurface, SurfacePreset};
use crate::animations::common::Schedule;
use crate::animations::AnimationOptions;
use crate::error::Result;
use crate::payload::Point3D;
use crate::space::{build_parameter_space, AxisOrder, ParameterSpace};
use std::f32::consts::PI;

const STEPS: usize = 100;

/// Torus - A torus whose tube breathes, the minor radius oscillating once per cycle
pub(crate) struct Torus {
    major_radius: f32,
    base_minor_radius: f32,
}

impl Torus {
    /// The minor radius for a frame, shared by every point of it
    fn minor_radius(&self, frame: f32) -> f32 {
        self.base_minor_radius + frame.sin()
    }
}

impl ParametricSurface for Torus {
    fn point(&self, [u, v, _]: [f32; 3], frame: f32) -> Point3D {
        let r = self.minor_radius(frame);
        let ring = self.major_radius + r * v.cos();
        Point3D::new(ring * u.cos(), ring * u.sin(), r * v.sin())
    }
}

impl SurfacePreset for Torus {
    const TAG: &'static str = "animated_torus_plot";

    fn schedule() -> Schedule {
        Schedule::linear(0.0, 2.0 * PI, 60)
    }

    fn space(options: &AnimationOptions) -> Result<ParameterSpace> {
        let counts = [options.width.unwrap_or(STEPS), options.height.unwrap_or(STEPS)];
        build_parameter_space(&[(0.0, 2.0 * PI), (0.0, 2.0 * PI)], &counts, AxisOrder::FirstFastest)
    }

    fn build() -> Self {
        Self { major_radius: 10.0, base_minor_radius: 3.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animations::surfaces::SurfaceAnimator;

    #[test]
    fn points_lie_within_the_tube() {
        let animator = SurfaceAnimator::<Torus>::preset(&AnimationOptions::default()).unwrap();
        let torus = Torus::build();
        for frame in Torus::schedule().iter() {
            let r = torus.minor_radius(frame.time);
            for point in animator.render_points(frame.time) {
                let distance = point.radial_distance();
                assert!(distance >= 10.0 - r - 1e-4 && distance <= 10.0 + r + 1e-4, "{distance} with r = {r}");
            }
        }
    }

    #[test]
    fn minor_radius_oscillates_between_two_and_four() {
        let torus = Torus::build();
        assert!((torus.minor_radius(PI / 2.0) - 4.0).abs() < 1e-6);
        assert!((torus.minor_radius(3.0 * PI / 2.0) - 2.0).abs() < 1e-6);
    }
}
