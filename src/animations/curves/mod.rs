//! Multi-series 2D curve animations.
//!
//! Every family samples a fixed x-domain and produces a set of polylines per frame.

mod circular;
mod damped;
mod fourier;
mod fractal_flow;
mod harmonic;
mod noisy_cosine;
mod quantum;
mod sine_cosine;
mod spiral;

pub(crate) use circular::CircularDance;
pub(crate) use damped::DampedOscillation;
pub(crate) use fourier::FourierSquareWave;
pub(crate) use fractal_flow::FractalFlow;
pub(crate) use harmonic::HarmonicWaves;
pub(crate) use noisy_cosine::NoisyCosine;
pub(crate) use quantum::QuantumWaves;
pub(crate) use sine_cosine::SineCosine;
pub(crate) use spiral::SpiralWaves;

use super::common::{Animation, Frame, Schedule};
use super::AnimationOptions;
use crate::error::{Error, Result};
use crate::payload::{LineSet, Payload, Point2D};
use crate::space::linspace;

/// Where a single curve sample sits within an animation
#[derive(Clone, Copy, Debug)]
pub(crate) struct CurveContext {
    /// Index of the polyline being generated
    pub series: usize,
    pub frame: Frame,
    /// Total number of frames in the schedule
    pub total_frames: usize,
}

impl CurveContext {
    /// Progress through the animation in [0, 1)
    pub fn progress(&self) -> f32 {
        self.frame.index as f32 / self.total_frames.max(1) as f32
    }
}

/// A closed-form family of curves
pub(crate) trait CurveFamily: Send {
    /// Default stream tag
    fn tag(&self) -> &'static str;

    /// Default x-domain: `(start, end, samples)`
    fn domain(&self) -> (f32, f32, usize);

    /// How many polylines every frame has
    fn series(&self) -> usize;

    fn schedule(&self) -> Schedule {
        Schedule::frames(200)
    }

    /// Evaluate one sample of one polyline
    fn point(&self, ctx: &CurveContext, x: f32, rng: &mut fastrand::Rng) -> Point2D;
}

/// Drives a [`CurveFamily`] over its schedule.
pub struct CurveAnimator {
    family: Box<dyn CurveFamily>,
    tag: String,
    domain: Vec<f32>,
    schedule: Schedule,
    rng: fastrand::Rng,
}

impl CurveAnimator {
    pub(crate) fn new(family: Box<dyn CurveFamily>, options: &AnimationOptions) -> Result<Self> {
        let (start, end, default_samples) = family.domain();
        let samples = options.samples.unwrap_or(default_samples);
        if samples == 0 {
            return Err(Error::config("curves need at least one sample per line"));
        }
        let schedule = options.schedule_or(family.schedule());
        schedule.validate()?;
        Ok(Self {
            tag: options.tag_or(family.tag()),
            domain: linspace(samples, start, end),
            schedule,
            rng: options.random_source(),
            family,
        })
    }

    fn render_lines(&mut self, frame: Frame) -> LineSet {
        let total_frames = self.schedule.len();
        let mut lines = Vec::with_capacity(self.family.series());
        for series in 0..self.family.series() {
            let ctx = CurveContext { series, frame, total_frames };
            let line = self.domain.iter().map(|x| self.family.point(&ctx, *x, &mut self.rng)).collect();
            lines.push(line);
        }
        lines
    }
}

impl Animation for CurveAnimator {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    fn render_frame(&mut self, frame: Frame) -> Payload {
        Payload::Lines(self.render_lines(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn animator(family: Box<dyn CurveFamily>) -> CurveAnimator {
        let options = AnimationOptions { seed: Some(42), ..Default::default() };
        CurveAnimator::new(family, &options).expect("valid animator")
    }

    #[rstest]
    #[case::noisy_cosine(Box::new(NoisyCosine), 2, 1000)]
    #[case::damped(Box::new(DampedOscillation), 2, 1000)]
    #[case::fourier(Box::new(FourierSquareWave), 2, 1000)]
    #[case::sine_cosine(Box::new(SineCosine), 2, 1000)]
    #[case::spiral(Box::new(SpiralWaves), 2, 1000)]
    #[case::harmonic(Box::new(HarmonicWaves), 3, 1000)]
    #[case::circular(Box::new(CircularDance), 4, 1000)]
    #[case::fractal_flow(Box::new(FractalFlow), 4, 1000)]
    #[case::quantum(Box::new(QuantumWaves), 3, 1200)]
    fn frame_shape(#[case] family: Box<dyn CurveFamily>, #[case] series: usize, #[case] samples: usize) {
        let mut animator = animator(family);
        let frames: Vec<_> = animator.schedule().iter().take(3).collect();
        for frame in frames {
            let Payload::Lines(lines) = animator.render_frame(frame) else {
                panic!("expected lines");
            };
            assert_eq!(lines.len(), series);
            for line in &lines {
                assert_eq!(line.len(), samples);
                assert!(line.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
            }
        }
    }

    #[test]
    fn seeded_runs_repeat() {
        let first = animator(Box::new(SineCosine)).render_frame(Frame { index: 3, time: 3.0 });
        let second = animator(Box::new(SineCosine)).render_frame(Frame { index: 3, time: 3.0 });
        assert_eq!(first, second);
    }

    #[test]
    fn overrides_apply() {
        let options =
            AnimationOptions { samples: Some(10), frames: Some(5), tag: Some("custom".into()), ..Default::default() };
        let animator = CurveAnimator::new(Box::new(DampedOscillation), &options).unwrap();
        assert_eq!(animator.tag(), "custom");
        assert_eq!(animator.schedule().len(), 5);
        assert_eq!(animator.domain.len(), 10);
    }

    #[test]
    fn zero_samples_rejected() {
        let options = AnimationOptions { samples: Some(0), ..Default::default() };
        assert!(matches!(CurveAnimator::new(Box::new(DampedOscillation), &options), Err(Error::Configuration(_))));
    }
}
