//! Procedural animation frames for a visualization sink.
//!
//! Animations render grids of colors, sets of polylines or 3D point clouds, one frame per
//! scheduled time value, and a [`FrameSequencer`] streams them into a [`FrameSink`].

pub mod animations;
pub mod color;
pub mod config;
pub mod error;
pub mod payload;
pub mod sequencer;
pub mod sink;
pub mod space;

pub use animations::{get_animation, Animation, AnimationKind, AnimationOptions, Frame, Schedule};
pub use config::{AnimationEntry, SequenceConfig};
pub use error::{Error, Result};
pub use payload::{Grid, Payload, Point2D, Point3D, Rgb};
pub use sequencer::{FrameSequencer, RunReport};
pub use sink::{FrameSink, JsonLinesSink, RecordingSink, SinkError};
