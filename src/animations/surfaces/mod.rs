//! 3D point cloud animations: parametric surfaces and the particle swarm.

mod enhanced_room;
mod mobius;
mod room;
mod spherical_shell;
mod swarm;
mod torus;

pub(crate) use enhanced_room::EnhancedRoom;
pub(crate) use mobius::MobiusStrip;
pub(crate) use room::Room;
pub(crate) use spherical_shell::SphericalShell;
pub use swarm::{ParticleSwarm, SwarmAnimator};
pub(crate) use torus::Torus;

use super::common::{Animation, Frame, Schedule};
use super::AnimationOptions;
use crate::error::{Error, Result};
use crate::payload::{Payload, Point3D, PointCloud};
use crate::space::ParameterSpace;
use rayon::prelude::*;

/// A closed-form surface `(X, Y, Z)(params, time)`.
///
/// `params` holds one coordinate per parameter axis, padded with zeros up to three.
pub trait ParametricSurface: Send + Sync {
    fn point(&self, params: [f32; 3], time: f32) -> Point3D;
}

/// A surface with a default parameter space, schedule and tag
pub(crate) trait SurfacePreset: ParametricSurface + Sized + 'static {
    const TAG: &'static str;

    fn schedule() -> Schedule;

    /// The parameter space to sample, honoring any resolution overrides
    fn space(options: &AnimationOptions) -> Result<ParameterSpace>;

    fn build() -> Self;
}

/// Samples a [`ParametricSurface`] over a parameter space once per scheduled time.
pub struct SurfaceAnimator<S> {
    surface: S,
    space: ParameterSpace,
    schedule: Schedule,
    tag: String,
}

impl<S: ParametricSurface> SurfaceAnimator<S> {
    pub fn new(surface: S, space: ParameterSpace, schedule: Schedule, tag: impl Into<String>) -> Result<Self> {
        if space.is_empty() {
            return Err(Error::config("surfaces need at least one parameter sample"));
        }
        schedule.validate()?;
        Ok(Self { surface, space, schedule, tag: tag.into() })
    }

    /// Evaluate every sample of the parameter space, flattened row-major
    pub fn render_points(&self, time: f32) -> PointCloud {
        (0..self.space.len()).into_par_iter().map(|index| self.surface.point(self.space.sample(index), time)).collect()
    }
}

impl<P: SurfacePreset> SurfaceAnimator<P> {
    pub(crate) fn preset(options: &AnimationOptions) -> Result<Self> {
        Self::new(P::build(), P::space(options)?, options.schedule_or(P::schedule()), options.tag_or(P::TAG))
    }
}

impl<S: ParametricSurface> Animation for SurfaceAnimator<S> {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    fn render_frame(&mut self, frame: Frame) -> Payload {
        Payload::Points3d(self.render_points(frame.time))
    }
}
