use crate::animations::{get_animation, Animation, AnimationKind, AnimationOptions};
use crate::error::{ConfigFileError, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

/// A single entry of a sequence: which animation to play and how
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json-schema", derive(schemars::JsonSchema))]
pub struct AnimationEntry {
    pub kind: AnimationKind,

    #[serde(flatten)]
    pub options: AnimationOptions,

    /// Keys that aren't options, rejected once parsed
    #[serde(flatten)]
    #[cfg_attr(feature = "json-schema", schemars(skip))]
    unknown: BTreeMap<String, serde_yaml::Value>,
}

impl From<AnimationKind> for AnimationEntry {
    fn from(kind: AnimationKind) -> Self {
        Self { kind, options: AnimationOptions::default(), unknown: BTreeMap::new() }
    }
}

/// Everything needed to run a sequence of animations
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json-schema", derive(schemars::JsonSchema))]
#[serde(deny_unknown_fields)]
pub struct SequenceConfig {
    /// The project name announced to the sink
    #[serde(default = "default_project")]
    pub project: String,

    /// Whether the sink should be chatty
    #[serde(default)]
    pub verbose: bool,

    /// The animations to play, in order
    #[serde(default = "default_animations")]
    pub animations: Vec<AnimationEntry>,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self { project: default_project(), verbose: false, animations: default_animations() }
    }
}

fn default_project() -> String {
    "framegen".to_string()
}

/// Every known animation, with its defaults
fn default_animations() -> Vec<AnimationEntry> {
    AnimationKind::iter().map(AnimationEntry::from).collect()
}

impl SequenceConfig {
    /// Load a config from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::ConfigFile { path: path.into(), source: e.into() })?;
        Self::from_yaml(&contents).map_err(|source| Error::ConfigFile { path: path.into(), source })
    }

    /// Load the config at `path` if it exists, falling back to the default catalogue otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() { Self::load(path) } else { Ok(Self::default()) }
    }

    pub fn from_yaml(contents: &str) -> std::result::Result<Self, ConfigFileError> {
        let config: Self = serde_yaml::from_str(contents)?;
        // Options are flattened into each entry, so serde can't deny unknown keys there.
        if let Some(entry) = config.animations.iter().find(|entry| !entry.unknown.is_empty()) {
            let keys = entry.unknown.keys().map(String::as_str).collect::<Vec<_>>().join(", ");
            return Err(ConfigFileError::UnknownOptions { kind: entry.kind, keys });
        }
        Ok(config)
    }

    /// The config file used when none is given explicitly
    pub fn default_path() -> Option<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "framegen")?;
        Some(dirs.config_dir().join("config.yaml"))
    }

    /// Keep only the entries whose kind is in `kinds`
    pub fn retain_kinds(&mut self, kinds: &[AnimationKind]) {
        self.animations.retain(|entry| kinds.contains(&entry.kind));
    }

    /// Use `seed` for every entry that doesn't set its own
    pub fn apply_seed(&mut self, seed: u64) {
        for entry in &mut self.animations {
            entry.options.seed.get_or_insert(seed);
        }
    }

    /// Build every configured animation, failing on the first invalid one
    pub fn build_animations(&self) -> Result<Vec<Box<dyn Animation>>> {
        self.animations.iter().map(|entry| get_animation(entry.kind, &entry.options)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_full_config() {
        let input = r"
project: demo
verbose: true
animations:
  - kind: heat-map
    width: 32
    height: 16
    frames: 4
  - kind: fractal-cloud
    depth: 3
    seed: 42
    tag: cloud
";
        let config = SequenceConfig::from_yaml(input).expect("valid config");
        assert_eq!(config.project, "demo");
        assert!(config.verbose);
        assert_eq!(config.animations.len(), 2);
        assert_eq!(config.animations[0].kind, AnimationKind::HeatMap);
        assert_eq!(config.animations[0].options.width, Some(32));
        assert_eq!(config.animations[0].options.frames, Some(4));
        assert_eq!(config.animations[1].options.depth, Some(3));
        assert_eq!(config.animations[1].options.tag.as_deref(), Some("cloud"));
    }

    #[test]
    fn empty_config_runs_everything() {
        let config = SequenceConfig::from_yaml("{}").unwrap();
        assert_eq!(config, SequenceConfig::default());
        assert_eq!(config.animations.len(), AnimationKind::iter().count());
    }

    #[test]
    fn unknown_kind_rejected() {
        let input = "animations:\n  - kind: teapot\n";
        assert!(matches!(SequenceConfig::from_yaml(input), Err(ConfigFileError::Yaml(_))));
    }

    #[test]
    fn misspelled_option_rejected() {
        let input = "animations:\n  - kind: heat-map\n    widht: 8\n    frame: 2\n";
        let Err(ConfigFileError::UnknownOptions { kind, keys }) = SequenceConfig::from_yaml(input) else {
            panic!("expected unknown options");
        };
        assert_eq!(kind, AnimationKind::HeatMap);
        assert_eq!(keys, "frame, widht");
    }

    #[test]
    fn misspelled_option_in_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "animations:\n  - kind: torus\n    sed: 3").unwrap();
        let result = SequenceConfig::load(file.path());
        assert!(matches!(result, Err(Error::ConfigFile { source: ConfigFileError::UnknownOptions { .. }, .. })));
    }

    #[test]
    fn negative_depth_rejected() {
        let input = "animations:\n  - kind: fractal-cloud\n    depth: -1\n";
        assert!(SequenceConfig::from_yaml(input).is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "project: from-file\nanimations:\n  - kind: torus").unwrap();
        let config = SequenceConfig::load(file.path()).unwrap();
        assert_eq!(config.project, "from-file");
        assert_eq!(config.animations, vec![AnimationEntry::from(AnimationKind::Torus)]);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let result = SequenceConfig::load(&path);
        let Err(Error::ConfigFile { path: reported, source: ConfigFileError::Io(_) }) = result else {
            panic!("expected an io error");
        };
        assert_eq!(reported, path);
        assert_eq!(SequenceConfig::load_or_default(&path).unwrap(), SequenceConfig::default());
    }

    #[test]
    fn seed_and_filter() {
        let mut config = SequenceConfig::default();
        config.animations[0].options.seed = Some(1);
        config.apply_seed(9);
        assert_eq!(config.animations[0].options.seed, Some(1));
        assert!(config.animations[1..].iter().all(|entry| entry.options.seed == Some(9)));

        config.retain_kinds(&[AnimationKind::Mobius, AnimationKind::Room]);
        let kinds: Vec<_> = config.animations.iter().map(|entry| entry.kind).collect();
        assert_eq!(kinds, vec![AnimationKind::Room, AnimationKind::Mobius]);
    }

    #[test]
    fn builds_configured_animations() {
        let input = "animations:\n  - kind: sine-cosine\n    samples: 8\n  - kind: mobius\n";
        let animations = SequenceConfig::from_yaml(input).unwrap().build_animations().unwrap();
        let tags: Vec<_> = animations.iter().map(|animation| animation.tag().to_string()).collect();
        assert_eq!(tags, vec!["sine_cosine_group", "mobius_strip_plot"]);
    }
}
