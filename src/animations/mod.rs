mod common;

// Animation families
pub mod curves;
pub mod fields;
pub mod fractal_cloud;
pub mod mandelbrot;
pub mod surfaces;

pub use common::{Animation, Frame, Schedule};

use crate::error::Result;
use curves::{
    CircularDance, CurveAnimator, DampedOscillation, FourierSquareWave, FractalFlow, HarmonicWaves, NoisyCosine,
    QuantumWaves, SineCosine, SpiralWaves,
};
use fields::{Cellular, FieldAnimator, HeatMap, Interference, VectorFlow};
use fractal_cloud::FractalCloudAnimator;
use mandelbrot::MandelbrotRenderer;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use surfaces::{EnhancedRoom, MobiusStrip, Room, SphericalShell, SurfaceAnimator, SwarmAnimator, Torus};
use tracing::warn;

/// Every animation this crate knows how to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "json-schema", derive(schemars::JsonSchema))]
pub enum AnimationKind {
    NoisyCosine,
    DampedOscillation,
    FourierSquareWave,
    SineCosine,
    SpiralWaves,
    HarmonicWaves,
    CircularDance,
    FractalFlow,
    QuantumWaves,
    HeatMap,
    Interference,
    Cellular,
    VectorFlow,
    Mandelbrot,
    Room,
    EnhancedRoom,
    Torus,
    Mobius,
    SphericalShell,
    ParticleSwarm,
    FractalCloud,
}

impl AnimationKind {
    fn is_curve(&self) -> bool {
        matches!(
            self,
            Self::NoisyCosine
                | Self::DampedOscillation
                | Self::FourierSquareWave
                | Self::SineCosine
                | Self::SpiralWaves
                | Self::HarmonicWaves
                | Self::CircularDance
                | Self::FractalFlow
                | Self::QuantumWaves
        )
    }

    /// Whether this kind samples a two dimensional domain whose size can be overridden
    fn is_sized(&self) -> bool {
        matches!(
            self,
            Self::HeatMap
                | Self::Interference
                | Self::Cellular
                | Self::VectorFlow
                | Self::Mandelbrot
                | Self::Room
                | Self::EnhancedRoom
                | Self::Torus
                | Self::Mobius
        )
    }
}

/// Per animation overrides of the built-in defaults
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json-schema", derive(schemars::JsonSchema))]
pub struct AnimationOptions {
    /// The stream tag frames are sent under
    #[serde(default)]
    pub tag: Option<String>,

    /// The number of frames to render, keeping the default time range
    #[serde(default)]
    pub frames: Option<usize>,

    #[serde(default)]
    pub width: Option<usize>,

    #[serde(default)]
    pub height: Option<usize>,

    /// Samples per polyline, for curves
    #[serde(default)]
    pub samples: Option<usize>,

    /// Recursion depth, for fractal clouds
    #[serde(default)]
    pub depth: Option<u32>,

    /// Particle count, for swarms
    #[serde(default)]
    pub particles: Option<usize>,

    /// Seed for the animation's random source
    #[serde(default)]
    pub seed: Option<u64>,
}

impl AnimationOptions {
    pub(crate) fn tag_or(&self, default: &str) -> String {
        self.tag.clone().unwrap_or_else(|| default.to_string())
    }

    pub(crate) fn schedule_or(&self, default: Schedule) -> Schedule {
        match self.frames {
            Some(frames) => default.with_len(frames),
            None => default,
        }
    }

    pub(crate) fn random_source(&self) -> fastrand::Rng {
        common::random_source(self.seed)
    }

    /// The overrides that `kind` has no use for
    fn ignored_by(&self, kind: AnimationKind) -> Vec<&'static str> {
        let mut ignored = Vec::new();
        if self.samples.is_some() && !kind.is_curve() {
            ignored.push("samples");
        }
        if self.depth.is_some() && kind != AnimationKind::FractalCloud {
            ignored.push("depth");
        }
        if self.particles.is_some() && kind != AnimationKind::ParticleSwarm {
            ignored.push("particles");
        }
        if (self.width.is_some() || self.height.is_some()) && !kind.is_sized() {
            ignored.push("width/height");
        }
        ignored
    }
}

/// Get the animation implementation for a given kind
pub fn get_animation(kind: AnimationKind, options: &AnimationOptions) -> Result<Box<dyn Animation>> {
    let ignored = options.ignored_by(kind);
    if !ignored.is_empty() {
        warn!("{kind} ignores the {} option(s)", ignored.join(", "));
    }
    let animation: Box<dyn Animation> = match kind {
        AnimationKind::NoisyCosine => Box::new(CurveAnimator::new(Box::new(NoisyCosine), options)?),
        AnimationKind::DampedOscillation => Box::new(CurveAnimator::new(Box::new(DampedOscillation), options)?),
        AnimationKind::FourierSquareWave => Box::new(CurveAnimator::new(Box::new(FourierSquareWave), options)?),
        AnimationKind::SineCosine => Box::new(CurveAnimator::new(Box::new(SineCosine), options)?),
        AnimationKind::SpiralWaves => Box::new(CurveAnimator::new(Box::new(SpiralWaves), options)?),
        AnimationKind::HarmonicWaves => Box::new(CurveAnimator::new(Box::new(HarmonicWaves), options)?),
        AnimationKind::CircularDance => Box::new(CurveAnimator::new(Box::new(CircularDance), options)?),
        AnimationKind::FractalFlow => Box::new(CurveAnimator::new(Box::new(FractalFlow), options)?),
        AnimationKind::QuantumWaves => Box::new(CurveAnimator::new(Box::new(QuantumWaves), options)?),
        AnimationKind::HeatMap => Box::new(FieldAnimator::<HeatMap>::preset(options)?),
        AnimationKind::Interference => Box::new(FieldAnimator::<Interference>::preset(options)?),
        AnimationKind::Cellular => Box::new(FieldAnimator::<Cellular>::preset(options)?),
        AnimationKind::VectorFlow => Box::new(FieldAnimator::<VectorFlow>::preset(options)?),
        AnimationKind::Mandelbrot => Box::new(MandelbrotRenderer::new(options)?),
        AnimationKind::Room => Box::new(SurfaceAnimator::<Room>::preset(options)?),
        AnimationKind::EnhancedRoom => Box::new(SurfaceAnimator::<EnhancedRoom>::preset(options)?),
        AnimationKind::Torus => Box::new(SurfaceAnimator::<Torus>::preset(options)?),
        AnimationKind::Mobius => Box::new(SurfaceAnimator::<MobiusStrip>::preset(options)?),
        AnimationKind::SphericalShell => Box::new(SurfaceAnimator::<SphericalShell>::preset(options)?),
        AnimationKind::ParticleSwarm => Box::new(SwarmAnimator::new(options)?),
        AnimationKind::FractalCloud => Box::new(FractalCloudAnimator::new(options)?),
    };
    Ok(animation)
}
