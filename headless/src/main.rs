use anyhow::{Context, Result};
use clap::Parser;
use headless::{run, RightPlayer, RunOptions, Settings};
use std::path::PathBuf;

/// Headless Pong: play the opponent AI without a window and report the result.
///
/// Usage:
///   pong-headless --ticks 36000 --right ai
///   pong-headless --config tuning.toml --points 11 --replay match.bin
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// TOML file with optional [game] and [ai] tables
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Maximum number of ticks to simulate
    #[arg(long, default_value_t = 36_000)]
    ticks: u32,

    /// Stop once either side reaches this many points
    #[arg(long)]
    points: Option<u32>,

    /// Seconds per tick
    #[arg(long, default_value_t = game_core::Params::FIXED_DT)]
    dt: f32,

    #[arg(long, value_enum, default_value_t = RightPlayer::Follow)]
    right: RightPlayer,

    /// Write a postcard-encoded replay of every frame here
    #[arg(long)]
    replay: Option<PathBuf>,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let opts = RunOptions {
        seed: args.seed,
        ticks: args.ticks,
        points: args.points,
        dt: args.dt,
        right: args.right,
        record: args.replay.is_some(),
    };
    let result = run(&settings, &opts)?;
    let s = result.summary;

    println!(
        "ticks={} rallies={} score={}-{} bat_hits={} wall_hits={}",
        s.ticks, s.rallies, s.score_left, s.score_right, s.bat_hits, s.wall_hits
    );

    if let (Some(path), Some(replay)) = (&args.replay, &result.replay) {
        let bytes = replay
            .to_bytes()
            .context("failed to encode replay")?;
        std::fs::write(path, bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), frames = replay.frames.len(), "replay written");
    }

    Ok(())
}
