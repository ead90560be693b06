use crate::animations::Animation;
use crate::error::Result;
use crate::sink::FrameSink;
use std::time::Instant;
use tracing::{debug, info};

/// A summary of a finished run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub animations: usize,
    pub frames: usize,
}

/// Plays a list of animations into a sink, one after the other.
pub struct FrameSequencer<S> {
    project: String,
    verbose: bool,
    animations: Vec<Box<dyn Animation>>,
    sink: S,
}

impl<S: FrameSink> FrameSequencer<S> {
    pub fn new(project: impl Into<String>, verbose: bool, sink: S) -> Self {
        Self { project: project.into(), verbose, animations: Vec::new(), sink }
    }

    pub fn push(&mut self, animation: Box<dyn Animation>) {
        self.animations.push(animation);
    }

    pub fn with_animations(mut self, animations: impl IntoIterator<Item = Box<dyn Animation>>) -> Self {
        self.animations.extend(animations);
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Render every animation in order and stream its frames.
    ///
    /// The sink is drained exactly once, after the last frame. Any sink error stops the run.
    pub fn run(&mut self) -> Result<RunReport> {
        self.sink.initialize(&self.project, self.verbose)?;
        let mut report = RunReport::default();
        for animation in &mut self.animations {
            let started = Instant::now();
            let tag = animation.tag().to_string();
            info!("starting {tag} ({} frames)", animation.schedule().len());
            animation.start();

            let frames: Vec<_> = animation.schedule().iter().collect();
            for frame in frames {
                let payload = animation.render_frame(frame);
                let (elements, kind) = (payload.element_count(), payload.kind_name());
                debug!("{tag} frame {} at t={:.3}: {elements} {kind}", frame.index, frame.time);
                self.sink.send(payload, &tag)?;
                report.frames += 1;
            }
            report.animations += 1;
            info!("finished {tag} in {:?}", started.elapsed());
        }
        self.sink.drain()?;
        Ok(report)
    }
}
