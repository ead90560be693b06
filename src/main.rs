use anyhow::{bail, Context, Result};
use clap::Parser;
use framegen::{AnimationKind, FrameSequencer, JsonLinesSink, SequenceConfig};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Render procedural animations and stream their frames as JSON lines.
#[derive(Parser)]
#[command(name = "framegen")]
#[command(author, version, about)]
struct Cli {
    /// The sequence config to use, defaults to the one in the user's config directory
    #[arg(short, long, env = "FRAMEGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Write frames to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only play these animations, comma separated
    #[arg(long, value_delimiter = ',')]
    only: Vec<AnimationKind>,

    /// Seed every animation that doesn't set its own seed
    #[arg(long)]
    seed: Option<u64>,

    /// List the known animations and exit
    #[arg(long)]
    list: bool,

    /// Ask the sink to be verbose
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> Result<SequenceConfig> {
    let mut config = match &cli.config {
        Some(path) => SequenceConfig::load(path)?,
        None => match SequenceConfig::default_path() {
            Some(path) => SequenceConfig::load_or_default(&path)?,
            None => SequenceConfig::default(),
        },
    };
    if !cli.only.is_empty() {
        config.retain_kinds(&cli.only);
    }
    if let Some(seed) = cli.seed {
        config.apply_seed(seed);
    }
    config.verbose |= cli.verbose;
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    if cli.list {
        for kind in AnimationKind::iter() {
            println!("{kind}");
        }
        return Ok(());
    }

    let config = load_config(&cli)?;
    if config.animations.is_empty() {
        bail!("no animations selected");
    }
    let animations = config.build_animations().context("invalid animation config")?;

    let writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path).with_context(|| format!("creating {}", path.display()))?),
        None => Box::new(io::stdout().lock()),
    };
    let mut sequencer =
        FrameSequencer::new(config.project, config.verbose, JsonLinesSink::new(writer)).with_animations(animations);
    let report = sequencer.run().context("streaming frames")?;
    info!("rendered {} frames across {} animations", report.frames, report.animations);
    Ok(())
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout can carry frames
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into())))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    run(Cli::parse())
}
