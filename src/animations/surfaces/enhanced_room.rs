use super::room::floor_space;
use super::{ParametricSurface, SurfacePreset};
use crate::animations::common::Schedule;
use crate::animations::AnimationOptions;
use crate::error::Result;
use crate::payload::Point3D;
use crate::space::ParameterSpace;
use std::f32::consts::PI;

/// Knobs for the layered wave height field
#[derive(Clone, Debug)]
pub(crate) struct WaveParams {
    /// Number of interfering waves
    pub wave_count: usize,
    /// Height multiplier
    pub amplitude: f32,
    /// Frequency step between consecutive waves
    pub frequency: f32,
    /// Chaos factor, both for the spiral falloff and the noise
    pub turbulence: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self { wave_count: 4, amplitude: 3.0, frequency: 1.0, turbulence: 0.5 }
    }
}

/// Enhanced room - Traveling, spiral and radial waves layered over the floor plus turbulence
pub(crate) struct EnhancedRoom {
    params: WaveParams,
}

impl ParametricSurface for EnhancedRoom {
    fn point(&self, [x, y, _]: [f32; 3], time: f32) -> Point3D {
        let params = &self.params;
        let waves = params.wave_count as f32;
        let distance = x.hypot(y);
        let angle = y.atan2(x);

        let mut z = 0.0;
        for i in 0..params.wave_count {
            let phase = i as f32 * PI / waves;
            let freq_mult = 1.0 + i as f32 * params.frequency;

            // Primary
            z += (time + phase).sin() * (time + distance * freq_mult).sin();
            // Spiral
            z += (angle * waves + time).cos() * (-distance * params.turbulence).exp();
            // Radial
            z += (distance * freq_mult - time).sin() * (phase + time * 0.5).cos();
        }
        z *= params.amplitude / waves;

        let noise = (x * params.turbulence).sin() * (y * params.turbulence).cos() * time.sin();
        z += noise * params.amplitude * 0.2;
        Point3D::new(x, y, z)
    }
}

impl SurfacePreset for EnhancedRoom {
    const TAG: &'static str = "enhanced_room_plot";

    fn schedule() -> Schedule {
        Schedule::linear(0.1, PI * 3.0, 150)
    }

    fn space(options: &AnimationOptions) -> Result<ParameterSpace> {
        floor_space(options)
    }

    fn build() -> Self {
        Self { params: WaveParams::default() }
    }
}
