use super::{ColorField, FieldPreset};
use crate::animations::common::Schedule;
use std::f32::consts::PI;

/// Vector flow - Colors driven by a swirling angle field and its directional derivative
pub(crate) struct VectorFlow {
    width: f32,
    height: f32,
}

impl ColorField for VectorFlow {
    fn sample(&self, x: usize, y: usize, time: f32) -> [f32; 3] {
        let x_norm = x as f32 / self.width - 0.5;
        let y_norm = y as f32 / self.height - 0.5;

        let angle = (x_norm * y_norm * 10.0 + time).sin() * PI;
        let magnitude = x_norm.hypot(y_norm);
        let (flow_y, flow_x) = angle.sin_cos();

        let intensity = ((x_norm * flow_x + y_norm * flow_y) * 4.0 + time * 2.0).sin() * 0.5 + 0.5;
        let phase = (magnitude * 10.0 - time * 3.0).sin() * 0.5 + 0.5;
        [intensity, phase, (intensity + phase) * 0.5]
    }
}

impl FieldPreset for VectorFlow {
    const TAG: &'static str = "vector-field-grid";
    const SIZE: (usize, usize) = (1000, 1000);

    fn schedule() -> Schedule {
        Schedule::linear(0.0, 2.0 * PI, 100)
    }

    fn for_size(width: usize, height: usize) -> Self {
        Self { width: width as f32, height: height as f32 }
    }
}
