//! Mechanics demos entry point
//!
//! Headless host: builds the demos, replays a scripted pointer drag through
//! them and writes sampled frames to stdout as JSON lines.
//!
//! Usage: `mechanics-demos [SETTINGS] [--ticks N] [--verbose]`

use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use env_logger::{Builder, Env};
use glam::DVec2;
use log::LevelFilter;
use serde::Serialize;
use thiserror::Error;

use mechanics_demos::renderer::{DrawCommand, Frame};
use mechanics_demos::sim::PointerInput;
use mechanics_demos::{KernelError, Settings, SettingsError, demos};

/// Default run length: five seconds at the default tick rate
const DEFAULT_TICKS: u64 = 300;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings JSON file; defaults are used when omitted
    settings: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = DEFAULT_TICKS)]
    ticks: u64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("demo construction failed: {0}")]
    Kernel(#[from] KernelError),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode frame: {0}")]
    Encode(#[from] serde_json::Error),
}

/// One sampled frame of one demo
#[derive(Serialize)]
struct FrameRecord<'a> {
    demo: &'a str,
    tick: u64,
    commands: &'a [DrawCommand],
}

/// Scripted pointer: press on the arm's joint handle, drag it upward past the
/// top of the channel while swaying sideways, release on the last tick.
fn scripted_input(settings: &Settings, tick: u64, ticks: u64) -> PointerInput {
    let up = settings.y_axis.up();
    let t = tick as f64 / ticks.max(1) as f64;
    let rise = settings.arm.max_reach * (2.6 * t - 1.0);
    let sway = DVec2::X * 120.0 * (t * std::f64::consts::TAU).sin();
    let position = settings.viewport_center + up * rise + sway;

    let pressed = tick + 1 < ticks;
    PointerInput::from_button(position, pressed, tick > 0)
}

/// Install the logger; `RUST_LOG` still overrides the default level
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let mut builder = Builder::from_env(Env::default().default_filter_or(level.to_string()));
    // Only fails when a logger is already installed
    let _ = builder.try_init();
}

fn run(args: &Args) -> Result<(), RunError> {
    let settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => {
            log::info!("No settings file given, using defaults");
            Settings::default()
        }
    };
    let ticks = args.ticks;

    let mut demos = demos::build_all(&settings)?;
    log::info!(
        "Running {} demos for {} ticks at {} Hz",
        demos.len(),
        ticks,
        settings.tick_rate_hz
    );

    let sample_every = u64::from(settings.tick_rate_hz);
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut frame = Frame::default();

    for tick in 0..ticks {
        let input = scripted_input(&settings, tick, ticks);
        let sampled = tick % sample_every == 0 || tick + 1 == ticks;

        for demo in demos.iter_mut() {
            demo.tick(&input);
            if !sampled {
                continue;
            }

            frame.reset(tick);
            demo.draw(&mut frame);
            let record = FrameRecord {
                demo: demo.name(),
                tick,
                commands: &frame.commands,
            };
            serde_json::to_writer(&mut out, &record)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    log::info!("Simulated {:.2} s", ticks as f64 * settings.tick_interval());
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    log::info!("Mechanics demos (headless) starting...");

    if let Err(e) = run(&args) {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
