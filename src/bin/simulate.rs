//! Headless driver: runs the dashboard engine and prints one JSON snapshot per tick.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, TimeDelta, Utc};
use clap::Parser;

use nifty_pulse::{DashboardEngine, EngineOptions, TimeFrame};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run the dashboard engine without a window", long_about = None)]
struct Args {
    /// Number of one-second ticks to run
    #[arg(long, default_value_t = 10)]
    ticks: u64,

    #[arg(long, value_enum, default_value_t = TimeFrame::M1)]
    time_frame: TimeFrame,

    /// Advance while the market is closed
    #[arg(long, default_value_t = false)]
    demo: bool,

    /// Step a synthetic clock instead of sleeping
    #[arg(long, default_value_t = false)]
    fast: bool,

    /// Start time (RFC 3339). Defaults to now.
    #[arg(long)]
    start: Option<String>,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

fn init_log() {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };
    // stdout carries the JSON; logs go to stderr
    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("nifty_pulse"), my_code_level)
        .filter(Some("simulate"), my_code_level)
        .target(env_logger::Target::Stderr)
        .init();
}

fn parse_start(start: Option<&str>) -> Result<DateTime<Utc>> {
    match start {
        Some(s) => Ok(DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("invalid --start '{}', expected RFC 3339", s))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

/// `start` moved forward by `offset`, refusing to run past chrono's range.
fn clock_at(start: DateTime<Utc>, offset: TimeDelta) -> Result<DateTime<Utc>> {
    match start.checked_add_signed(offset) {
        Some(at) => Ok(at),
        None => bail!("simulated clock overflows {} + {}", start, offset),
    }
}

fn fast_offset(step: u64) -> Result<TimeDelta> {
    let secs = i64::try_from(step).with_context(|| format!("tick {} out of range", step))?;
    TimeDelta::try_seconds(secs).with_context(|| format!("tick {} exceeds the time range", step))
}

fn emit(engine: &DashboardEngine) -> Result<()> {
    let line = serde_json::to_string(&engine.snapshot()).context("serializing snapshot")?;
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", line).context("writing snapshot to stdout")?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_log();
    let args = Args::parse();
    let start = parse_start(args.start.as_deref())?;

    let mut engine = DashboardEngine::new(
        EngineOptions {
            demo: args.demo,
            time_frame: args.time_frame,
            seed: args.seed,
        },
        start,
    );

    log::info!(
        "simulate: {} ticks from {} ({}, demo {}, fast {})",
        args.ticks,
        start,
        args.time_frame,
        args.demo,
        args.fast
    );

    if args.fast {
        for i in 1..=args.ticks {
            let now = clock_at(start, fast_offset(i)?)?;
            engine.tick(now);
            emit(&engine)?;
        }
        return Ok(());
    }

    // Real time: the wall clock is offset so a custom --start still ticks once a second
    let origin = tokio::time::Instant::now();
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    for _ in 0..args.ticks {
        interval.tick().await;
        let elapsed = TimeDelta::from_std(origin.elapsed()).unwrap_or(TimeDelta::zero());
        engine.tick(clock_at(start, elapsed)?);
        emit(&engine)?;
    }
    Ok(())
}
