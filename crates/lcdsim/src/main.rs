//! # lcdsim
//!
//! Host-side monitor for serial character-LCD devices.
//!
//! ## Overview
//!
//! Replays a captured byte stream through the full pipeline and prints the
//! resulting panel emulation plus both command logs:
//! - lcdsim-core: Core types
//! - lcdsim-emulator: Protocol decoding and panel emulation
//! - lcdsim-session: Session state and routing
//!
//! The live serial transport feeds the same `Session::feed` entry point; the
//! replay driver differs only in where the chunks come from.

use anyhow::{bail, Context, Result};

use lcdsim_core::MonitorConfig;
use lcdsim_emulator::TrafficRecorder;
use lcdsim_session::Session;

mod render;

const USAGE: &str = "Usage: lcdsim [--config <config.yaml>] <capture.lcdcap>";

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut capture_path: Option<String> = None;
    let mut config_path: Option<String> = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                config_path = Some(
                    iter.next()
                        .with_context(|| format!("--config needs a path\n{USAGE}"))?
                        .clone(),
                );
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                return Ok(());
            }
            other => capture_path = Some(other.to_string()),
        }
    }

    let Some(capture_path) = capture_path else {
        bail!("missing capture file\n{USAGE}");
    };

    let config = match config_path {
        Some(path) => MonitorConfig::from_file(&path)
            .with_context(|| format!("loading config from {path}"))?,
        None => MonitorConfig::default(),
    };
    config.validate().context("validating configuration")?;

    tracing::info!("lcdsim v0.1.0 replaying {}", capture_path);

    let capture = TrafficRecorder::load_from_file(&capture_path)
        .with_context(|| format!("loading capture from {capture_path}"))?;

    // Prefer the geometry the capture was recorded against
    let mut dimensions = capture.dimensions();
    if dimensions.rows == 0 || dimensions.cols == 0 {
        dimensions = config.display.dimensions();
    }

    let mut session = Session::with_log_capacity(dimensions, config.log.max_entries);

    let mut chunks = 0usize;
    let mut commands = 0usize;
    for chunk in capture.rx_chunks() {
        commands += session.feed(chunk);
        chunks += 1;
    }

    tracing::info!(
        "Replay finished: {} chunks, {} commands, {:.2}s of traffic",
        chunks,
        commands,
        capture.duration()
    );

    let snapshot = session.snapshot();
    println!("{}", render::render_panel(&snapshot));
    println!();
    println!("{}", render::render_debug_log(&snapshot));
    println!();
    println!("{}", render::render_display_log(&snapshot));

    Ok(())
}
