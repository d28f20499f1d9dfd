//! `boardinput-replay` - replay a recorded input trace against a board widget.
//!
//! ```sh
//! boardinput-replay config.json trace.json [--no-size-observer]
//! RUST_LOG=boardinput=debug boardinput-replay config.json trace.json
//! ```

use anyhow::{Context, Result, bail};
use boardinput::constants::DEFAULT_LOG_FILTER;
use boardinput::replay::{Replay, load_trace};
use boardinput::InteractionConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut native_size_observation = true;
    let mut paths = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--no-size-observer" => native_size_observation = false,
            "-h" | "--help" => {
                println!("usage: boardinput-replay <config.json> <trace.json> [--no-size-observer]");
                return Ok(());
            }
            _ => paths.push(arg),
        }
    }
    let [config_path, trace_path] = paths.as_slice() else {
        bail!("expected <config.json> <trace.json>, got {} path(s)", paths.len());
    };

    let config = InteractionConfig::load(config_path)
        .with_context(|| format!("Failed to load config from {config_path}"))?;
    let steps = load_trace(trace_path).with_context(|| format!("Failed to load trace from {trace_path}"))?;
    tracing::info!(steps = steps.len(), ?config, "Replaying trace");

    let replay = Replay::new(config, native_size_observation);
    for outcome in replay.run(&steps).context("Replay failed")? {
        println!("{outcome}");
    }
    println!("final phase: {:?}", replay.widget().phase());
    Ok(())
}
