use super::{ColorField, FieldPreset};
use crate::animations::common::Schedule;
use crate::color::sine_palette;
use std::f32::consts::PI;

const CELL_SIZE: f32 = 20.0;

/// Cellular - Blocky cells whose hue follows a drifting trigonometric pattern
pub(crate) struct Cellular;

impl ColorField for Cellular {
    fn sample(&self, x: usize, y: usize, time: f32) -> [f32; 3] {
        let x_cell = (x as f32 / CELL_SIZE).floor();
        let y_cell = (y as f32 / CELL_SIZE).floor();
        let pattern = (x_cell + y_cell + time * 5.0).sin() * (x_cell * y_cell * 0.1 + time * 2.0).cos();
        let hue = (pattern * 0.5 + 0.5) * 2.0 * PI;
        sine_palette(hue)
    }
}

impl FieldPreset for Cellular {
    const TAG: &'static str = "cellular-grid";
    const SIZE: (usize, usize) = (1000, 1000);

    fn schedule() -> Schedule {
        Schedule::linear(0.0, 2.0 * PI, 100)
    }

    fn for_size(_width: usize, _height: usize) -> Self {
        Self
    }
}
