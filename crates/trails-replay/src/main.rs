mod runner;
mod script;
mod synth;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use trails_core::{IdentityMode, TrackerConfig, INACTIVITY_TIMEOUT_MS, MAX_AGE_MS};

use runner::{FrameLine, Replay};
use synth::SynthParams;

#[derive(Debug, Parser)]
#[command(name = "trails-replay")]
#[command(about = "Replay touch frames through the trail tracker")]
struct Cli {
    #[command(flatten)]
    tracker: TrackerArgs,
    /// Print one JSON object per frame instead of a text line
    #[arg(long, global = true)]
    json: bool,
    /// Only print the final frame
    #[arg(long, global = true)]
    summary: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Replay a recorded JSON script
    Play(PlayArgs),
    /// Generate seeded random input and replay it
    Synth(SynthArgs),
}

#[derive(Debug, Args)]
struct PlayArgs {
    script: PathBuf,
}

#[derive(Debug, Args)]
struct SynthArgs {
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 600)]
    frames: usize,
    #[arg(long, default_value_t = 3)]
    fingers: usize,
    #[arg(long = "frame-ms", default_value_t = 16)]
    frame_ms: u64,
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    #[arg(long, default_value_t = 600.0)]
    height: f64,
    /// Write the generated script here as well
    #[arg(long)]
    save: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum IdentityArg {
    Persistent,
    Slot,
}

#[derive(Debug, Args)]
struct TrackerArgs {
    #[arg(long = "max-age-ms", global = true, default_value_t = MAX_AGE_MS)]
    max_age_ms: u64,
    #[arg(long = "timeout-ms", global = true, default_value_t = INACTIVITY_TIMEOUT_MS)]
    timeout_ms: u64,
    #[arg(long = "hue-step", global = true)]
    hue_step: Option<f32>,
    #[arg(long, global = true, value_enum, default_value = "persistent")]
    identity: IdentityArg,
}

impl TrackerArgs {
    fn config(&self) -> TrackerConfig {
        let mode = match self.identity {
            IdentityArg::Persistent => IdentityMode::Persistent,
            IdentityArg::Slot => IdentityMode::Slot,
        };
        let mut cfg = TrackerConfig::default()
            .with_max_age_ms(self.max_age_ms)
            .with_inactivity_timeout_ms(self.timeout_ms)
            .with_identity_mode(mode);
        if let Some(step) = self.hue_step {
            cfg = cfg.with_hue_step_degrees(step);
        }
        cfg
    }
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let frames = match &cli.command {
        Commands::Play(args) => script::load(&args.script)?,
        Commands::Synth(args) => {
            if args.width <= 0.0 || args.height <= 0.0 {
                bail!("synth area must be positive, got {}x{}", args.width, args.height);
            }
            let frames = synth::generate(&SynthParams {
                seed: args.seed,
                frames: args.frames,
                fingers: args.fingers,
                frame_ms: args.frame_ms,
                width: args.width,
                height: args.height,
            });
            if let Some(path) = &args.save {
                let json = serde_json::to_string_pretty(&frames)?;
                std::fs::write(path, json)
                    .with_context(|| format!("writing {}", path.display()))?;
                log::info!("[replay] saved {} frames to {}", frames.len(), path.display());
            }
            frames
        }
    };

    let config = cli.tracker.config();
    log::info!(
        "[replay] {} frames, max_age={}ms timeout={}ms identity={:?}",
        frames.len(),
        config.max_age_ms,
        config.inactivity_timeout_ms,
        config.identity_mode
    );
    let mut replay = Replay::new(config).context("invalid tracker settings")?;

    let mut last: Option<FrameLine> = None;
    for (i, frame) in frames.iter().enumerate() {
        let line = replay.step(i, frame);
        if !cli.summary {
            emit(&line, cli.json)?;
        }
        last = Some(line);
    }
    if cli.summary {
        if let Some(line) = &last {
            emit(line, cli.json)?;
        }
    }
    Ok(())
}

fn emit(line: &FrameLine, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(line)?);
    } else {
        println!("{}", line);
    }
    Ok(())
}
