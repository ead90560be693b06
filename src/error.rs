use crate::animations::AnimationKind;
use crate::sink::SinkError;
use std::path::PathBuf;

/// Errors that can occur while configuring or generating animations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("requested depth {requested} exceeds the ceiling of {ceiling}")]
    ResourceLimit { requested: u32, ceiling: u32 },

    #[error("sink failure: {0}")]
    Sink(#[from] SinkError),

    #[error("failed to load config from '{path}': {source}")]
    ConfigFile { path: PathBuf, source: ConfigFileError },
}

/// The reasons a configuration file can fail to load
#[derive(thiserror::Error, Debug)]
pub enum ConfigFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown option(s) for {kind}: {keys}")]
    UnknownOptions { kind: AnimationKind, keys: String },
}

impl Error {
    pub(crate) fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
