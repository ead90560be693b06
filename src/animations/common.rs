use crate::error::{Error, Result};
use crate::payload::Payload;
use crate::space::linspace;

/// A single step of an animation's schedule
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Position of this frame within the schedule
    pub index: usize,
    /// Time value driving the animation, in the animation's own units
    pub time: f32,
}

/// The finite, ordered list of time values an animation is rendered at
#[derive(Clone, Debug, PartialEq)]
pub enum Schedule {
    /// `count` times evenly spaced between `start` and `end`, both inclusive
    Linear { start: f32, end: f32, count: usize },

    /// Integer frame numbers `start..start + count`, used directly as time
    Frames { start: usize, count: usize },
}

impl Schedule {
    pub fn linear(start: f32, end: f32, count: usize) -> Self {
        Self::Linear { start, end, count }
    }

    pub fn frames(count: usize) -> Self {
        Self::Frames { start: 0, count }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Linear { count, .. } | Self::Frames { count, .. } => *count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The same schedule with a different number of frames
    pub fn with_len(&self, count: usize) -> Self {
        match *self {
            Self::Linear { start, end, .. } => Self::Linear { start, end, count },
            Self::Frames { start, .. } => Self::Frames { start, count },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::config("animation schedules need at least one frame"));
        }
        Ok(())
    }

    /// Expand into the ordered frames
    pub fn iter(&self) -> impl Iterator<Item = Frame> {
        let times: Vec<f32> = match *self {
            Self::Linear { start, end, count } => linspace(count, start, end),
            Self::Frames { start, count } => (start..start + count).map(|frame| frame as f32).collect(),
        };
        times.into_iter().enumerate().map(|(index, time)| Frame { index, time })
    }
}

/// Trait for animation families.
///
/// An animation owns everything it needs to render its frames, including its random source, and
/// is driven through its schedule by the sequencer.
pub trait Animation: Send {
    /// The stream tag frames of this animation are sent under
    fn tag(&self) -> &str;

    /// The schedule this animation is rendered at
    fn schedule(&self) -> &Schedule;

    /// Called once before the first frame of every run
    fn start(&mut self) {}

    /// Render a single frame
    fn render_frame(&mut self, frame: Frame) -> Payload;
}

/// Creates the random source for an animation, seeded if requested.
pub(crate) fn random_source(seed: Option<u64>) -> fastrand::Rng {
    match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    }
}

/// Uniform sample in `[low, high)`
pub(crate) fn uniform(rng: &mut fastrand::Rng, low: f32, high: f32) -> f32 {
    low + rng.f32() * (high - low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_schedule_includes_both_ends() {
        let frames: Vec<_> = Schedule::linear(0.0, 2.0, 3).iter().collect();
        assert_eq!(
            frames,
            vec![Frame { index: 0, time: 0.0 }, Frame { index: 1, time: 1.0 }, Frame { index: 2, time: 2.0 }]
        );
    }

    #[test]
    fn frame_schedule_counts_from_start() {
        let times: Vec<_> = Schedule::Frames { start: 1, count: 3 }.iter().map(|f| f.time).collect();
        assert_eq!(times, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn empty_schedule_is_invalid() {
        assert!(Schedule::frames(0).validate().is_err());
        assert!(Schedule::linear(0.0, 1.0, 0).validate().is_err());
    }

    #[test]
    fn uniform_stays_in_range() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..1000 {
            let value = uniform(&mut rng, -0.1, 0.1);
            assert!((-0.1..0.1).contains(&value));
        }
    }
}
