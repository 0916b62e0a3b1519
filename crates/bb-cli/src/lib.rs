//! # Branch-Bench CLI
//!
//! Flag parsing and console output around the workload sequencer. The binary
//! in `main.rs` wires these together with logging and Ctrl-C handling.
//!
//! Flags accept the Go-style single dash (`-n 50 -umbral 2000`) as well
//! as the usual `--threshold 2000`; see [`normalize_args`].

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use bb_workloads::{BenchConfig, Branch, BranchNotifier, BranchOutcome, BranchWork};

pub mod interrupt;

pub use interrupt::{watch_interrupts, InterruptState, INTERRUPTED_EXIT_CODE};

/// Long flags that may be written with a single dash
const SINGLE_DASH_LONG_FLAGS: &[&str] = &[
    "threshold",
    "umbral",
    "output",
    "archivo",
    "difficulty",
    "block-data",
    "max-primes",
    "max-attempts",
    "json",
    "verbose",
];

/// Branch-Bench: matrix-trace driven workload selection
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "branch-bench", version)]
#[command(about = "Runs a proof-of-work search or a prime sieve depending on a matrix trace")]
pub struct Args {
    /// Matrix dimension
    #[arg(
        short = 'n',
        default_value_t = bb_workloads::DEFAULT_DIMENSION as i64,
        allow_negative_numbers = true
    )]
    pub dimension: i64,

    /// Threshold for the branch decision (trace > threshold runs branch A)
    #[arg(
        long,
        visible_alias = "umbral",
        default_value_t = bb_workloads::DEFAULT_THRESHOLD,
        allow_negative_numbers = true
    )]
    pub threshold: i64,

    /// Output file (reported only, never written)
    #[arg(long, visible_alias = "archivo", default_value = bb_workloads::DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Proof-of-work difficulty in leading zero hex digits
    #[arg(
        long,
        default_value_t = bb_workloads::DEFAULT_DIFFICULTY as i64,
        allow_negative_numbers = true
    )]
    pub difficulty: i64,

    /// Proof-of-work payload
    #[arg(long, default_value = bb_workloads::DEFAULT_BLOCK_DATA)]
    pub block_data: String,

    /// Exclusive upper bound for the prime sieve
    #[arg(
        long,
        default_value_t = bb_workloads::DEFAULT_MAX_PRIMES as i64,
        allow_negative_numbers = true
    )]
    pub max_primes: i64,

    /// Give up the proof-of-work search after this many hashes
    #[arg(long, allow_negative_numbers = true)]
    pub max_attempts: Option<i64>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Run configuration for these flags
    pub fn to_config(&self) -> BenchConfig {
        BenchConfig {
            dimension: self.dimension,
            threshold: self.threshold,
            output_path: self.output.clone(),
            difficulty: self.difficulty,
            block_data: self.block_data.clone(),
            max_primes: self.max_primes,
            max_attempts: self.max_attempts,
        }
    }
}

/// Rewrite single-dash long flags (`-umbral`, `-archivo=out.txt`) to their
/// double-dash form. Everything after a bare `--` is left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg: OsString| {
            if passthrough {
                return arg;
            }
            let rewritten = match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    None
                }
                Some(text) => text
                    .strip_prefix('-')
                    .filter(|rest| !rest.starts_with('-') && is_single_dash_long(rest))
                    .map(|_| OsString::from(format!("-{text}"))),
                None => None,
            };
            rewritten.unwrap_or(arg)
        })
        .collect()
}

fn is_single_dash_long(flag: &str) -> bool {
    let name = flag.split_once('=').map_or(flag, |(name, _)| name);
    SINGLE_DASH_LONG_FLAGS.contains(&name)
}

/// Print the configuration summary shown before any computation.
pub fn write_summary<W: Write>(out: &mut W, config: &BenchConfig) -> io::Result<()> {
    writeln!(out, "Simulation configuration:")?;
    writeln!(out, "Matrix dimension: {}", config.dimension)?;
    writeln!(out, "Threshold: {}", config.threshold)?;
    writeln!(out, "Output file: {}", config.output_path.display())?;
    Ok(())
}

/// Print the final outcome, as one text line or as JSON.
pub fn write_report<W: Write>(out: &mut W, outcome: &BranchOutcome, json: bool) -> io::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, outcome)?;
        writeln!(out)?;
        return Ok(());
    }

    let detail = match &outcome.work {
        BranchWork::ProofOfWork(proof) => {
            format!("nonce {} digest {}", proof.nonce, proof.digest)
        }
        BranchWork::Primes { count, largest } => match largest {
            Some(largest) => format!("{count} primes, largest {largest}"),
            None => "no primes".to_string(),
        },
    };
    writeln!(
        out,
        "Branch {} finished in {:?} (trace {}, threshold {}): {}",
        outcome.branch, outcome.elapsed, outcome.trace, outcome.threshold, detail
    )
}

/// Prints the branch notice to a writer (stdout in the binary)
pub struct ConsoleNotifier<W> {
    out: W,
}

impl ConsoleNotifier<io::Stdout> {
    /// Notifier writing to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleNotifier<W> {
    /// Notifier writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give the writer back
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> BranchNotifier for ConsoleNotifier<W> {
    fn branch_selected(&mut self, branch: Branch, trace: i64, threshold: i64) {
        tracing::info!(branch = %branch, trace, threshold, "Branch selected");
        let printed =
            writeln!(self.out, "Branch {} will run", branch).and_then(|_| self.out.flush());
        if let Err(e) = printed {
            tracing::warn!("Failed to print branch notice: {}", e);
        }
    }
}
