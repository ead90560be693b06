use super::{ColorField, FieldPreset};
use crate::animations::common::Schedule;
use std::f32::consts::PI;

/// Interference - Ripples from four sources adding up into interference patterns
pub(crate) struct Interference {
    sources: [(f32, f32); 4],
}

impl ColorField for Interference {
    fn sample(&self, x: usize, y: usize, time: f32) -> [f32; 3] {
        // Sources are summed in a fixed order so frames are bit-for-bit stable.
        let mut intensity = 0.0;
        for (sx, sy) in &self.sources {
            let distance = (x as f32 - sx).hypot(y as f32 - sy);
            intensity += (distance * 0.1 - time).sin() / (1.0 + distance * 0.05);
        }
        let intensity = intensity * 0.5 + 0.5;
        [intensity, 1.0 - intensity, (intensity * 2.0 * PI).sin() * 0.5 + 0.5]
    }
}

impl FieldPreset for Interference {
    const TAG: &'static str = "interference-grid";
    const SIZE: (usize, usize) = (1000, 1000);

    fn schedule() -> Schedule {
        Schedule::linear(0.0, 4.0 * PI, 100)
    }

    fn for_size(width: usize, height: usize) -> Self {
        let (w, h) = (width as f32, height as f32);
        Self { sources: [(0.25 * w, 0.25 * h), (0.75 * w, 0.75 * h), (0.25 * w, 0.75 * h), (0.75 * w, 0.25 * h)] }
    }
}
