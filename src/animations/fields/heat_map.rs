use super::{ColorField, FieldPreset};
use crate::animations::common::Schedule;
use std::f32::consts::PI;

const RIPPLE_STRENGTH: f32 = 60.0;

/// Heat map - Radial sine ripples whose density breathes over time
pub(crate) struct HeatMap {
    center_x: f32,
    center_y: f32,
    max_distance: f32,
}

impl HeatMap {
    fn distance(&self, x: usize, y: usize) -> f32 {
        (x as f32 - self.center_x).hypot(y as f32 - self.center_y)
    }
}

impl ColorField for HeatMap {
    fn sample(&self, x: usize, y: usize, time: f32) -> [f32; 3] {
        let normalized = self.distance(x, y) / self.max_distance;
        let intensity = (-time + RIPPLE_STRENGTH * (time / 10.0).sin() * PI * normalized).sin();
        [1.0, 1.0 - normalized, (intensity + 1.0) / 2.0]
    }
}

impl FieldPreset for HeatMap {
    const TAG: &'static str = "heat-map";
    const SIZE: (usize, usize) = (500, 500);

    fn schedule() -> Schedule {
        Schedule::linear(0.0, 20.0 * PI, 100)
    }

    fn for_size(width: usize, height: usize) -> Self {
        let center_x = (width / 2) as f32;
        let center_y = (height / 2) as f32;
        // The farthest corner from the center is the origin.
        let max_distance = center_x.hypot(center_y).max(1.0);
        Self { center_x, center_y, max_distance }
    }
}
