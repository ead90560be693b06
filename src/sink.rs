use crate::payload::Payload;
use serde::Serialize;
use std::io::{BufWriter, Write};

/// Errors a sink can fail with
#[derive(thiserror::Error, Debug)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode frame: {0}")]
    Json(#[from] serde_json::Error),

    #[error("frame rejected: {0}")]
    Rejected(String),
}

/// The destination animation frames are streamed to.
///
/// A sink is initialized once, receives frames in order and is drained once at the end.
pub trait FrameSink {
    fn initialize(&mut self, project: &str, verbose: bool) -> Result<(), SinkError>;

    /// Hand a single frame over to the sink, under the stream identified by `tag`
    fn send(&mut self, payload: Payload, tag: &str) -> Result<(), SinkError>;

    /// Flush everything and wait until the consumer has everything
    fn drain(&mut self) -> Result<(), SinkError>;
}

/// A call a [`RecordingSink`] observed
#[derive(Clone, Debug, PartialEq)]
pub enum SinkEvent {
    Initialize { project: String, verbose: bool },
    Send { tag: String, payload: Payload },
    Drain,
}

/// A sink that keeps every call in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<SinkEvent> {
        self.events
    }

    /// The tags of every frame sent, in order
    pub fn sent_tags(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Send { tag, .. } => Some(tag.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl FrameSink for RecordingSink {
    fn initialize(&mut self, project: &str, verbose: bool) -> Result<(), SinkError> {
        self.events.push(SinkEvent::Initialize { project: project.to_string(), verbose });
        Ok(())
    }

    fn send(&mut self, payload: Payload, tag: &str) -> Result<(), SinkError> {
        self.events.push(SinkEvent::Send { tag: tag.to_string(), payload });
        Ok(())
    }

    fn drain(&mut self) -> Result<(), SinkError> {
        self.events.push(SinkEvent::Drain);
        Ok(())
    }
}

/// Header line written on initialization
#[derive(Serialize)]
struct StreamHeader<'a> {
    project: &'a str,
    verbose: bool,
}

/// A single frame line
#[derive(Serialize)]
struct StreamFrame<'a> {
    tag: &'a str,
    payload: &'a Payload,
}

/// A sink that writes one JSON document per line: a header followed by one line per frame.
pub struct JsonLinesSink<W: Write> {
    writer: BufWriter<W>,
    initialized: bool,
    frames: usize,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer: BufWriter::new(writer), initialized: false, frames: 0 }
    }

    /// The number of frames written so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn into_inner(self) -> Result<W, SinkError> {
        self.writer.into_inner().map_err(|e| SinkError::Io(e.into_error()))
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> Result<(), SinkError> {
        serde_json::to_writer(&mut self.writer, value)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> FrameSink for JsonLinesSink<W> {
    fn initialize(&mut self, project: &str, verbose: bool) -> Result<(), SinkError> {
        if self.initialized {
            return Err(SinkError::Rejected("sink was already initialized".into()));
        }
        self.write_line(&StreamHeader { project, verbose })?;
        self.initialized = true;
        Ok(())
    }

    fn send(&mut self, payload: Payload, tag: &str) -> Result<(), SinkError> {
        if !self.initialized {
            return Err(SinkError::Rejected(format!("frame for '{tag}' sent before initialization")));
        }
        self.write_line(&StreamFrame { tag, payload: &payload })?;
        self.frames += 1;
        Ok(())
    }

    fn drain(&mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        Ok(())
    }
}
