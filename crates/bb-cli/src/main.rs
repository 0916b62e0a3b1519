//! # Branch-Bench
//!
//! Entry point for the benchmark harness.
//!
//! ## Run Sequence
//!
//! 1. Parse flags (single- or double-dash long flags)
//! 2. Initialize logging from the environment
//! 3. Print the configuration summary
//! 4. Validate configuration
//! 5. Run the sequencer on a blocking thread. Ctrl-C cancels the
//!    proof-of-work search; a second Ctrl-C, or one in any other phase,
//!    exits with status 130
//! 6. Print the outcome

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

use bb_cli::{
    normalize_args, watch_interrupts, write_report, write_summary, Args, ConsoleNotifier,
    InterruptState, INTERRUPTED_EXIT_CODE,
};
use bb_telemetry::{init_logging, TelemetryConfig};
use bb_workloads::{CpuWorkloads, Sequencer};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse_from(normalize_args(std::env::args_os()));

    let mut telemetry = TelemetryConfig::from_env();
    if args.verbose {
        telemetry = telemetry.verbose();
    }
    init_logging(&telemetry).context("Failed to initialize logging")?;

    let config = args.to_config();
    let mut stdout = io::stdout();
    write_summary(&mut stdout, &config)?;
    stdout.flush()?;
    debug!(path = %config.output_path.display(), "Output file is reported only, nothing is written");

    let mut params = config.validate().context("Invalid configuration")?;

    let interrupts = InterruptState::new();
    params.limits = params.limits.with_cancel_flag(interrupts.cancel_flag());
    let watcher = interrupts.clone();
    tokio::spawn(async move {
        match watch_interrupts(&watcher, tokio::signal::ctrl_c).await {
            Ok(()) => std::process::exit(INTERRUPTED_EXIT_CODE),
            Err(e) => warn!("Failed to listen for Ctrl-C: {}", e),
        }
    });

    info!(
        dimension = params.dimension,
        threshold = params.threshold,
        difficulty = params.difficulty,
        max_primes = params.max_primes,
        "Starting sequence"
    );

    let outcome = tokio::task::spawn_blocking(move || {
        let notifier = interrupts.watch(ConsoleNotifier::stdout());
        let mut sequencer = Sequencer::new(CpuWorkloads::from_entropy(), notifier);
        sequencer.run(&params)
    })
    .await
    .context("Sequencer task panicked")?
    .context("Benchmark run failed")?;

    write_report(&mut stdout, &outcome, args.json)?;
    Ok(())
}
