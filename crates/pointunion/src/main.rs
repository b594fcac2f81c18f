//! pointunion: group point-pair edges into connected components.
//!
//! Reads lines of the form `[x1,y1][x2,y2]` from standard input (or a
//! file), joins the two points of every line into one component, and
//! prints each component on its own line as `[x, y]` points separated by
//! spaces. Blank lines are skipped. The first malformed line aborts the
//! run with a message on stderr and a failure exit status.
//!
//! # Usage
//!
//! ```text
//! pointunion [OPTIONS] [INPUT] < edges.txt
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use pointunion_core::FindStrategy;

/// Group 2-D points into connected components.
///
/// Every input line names two points that belong together. The output
/// lists one component per line.
#[derive(Parser)]
#[command(name = "pointunion", version)]
struct Cli {
    /// Read edges from this file instead of standard input.
    input: Option<PathBuf>,

    /// Print components as JSON instead of text lines.
    #[arg(long)]
    json: bool,

    /// How unions walk to class representatives.
    #[arg(long, value_enum, default_value_t = CLI_DEFAULT_STRATEGY)]
    strategy: Strategy,

    /// Print load diagnostics on stderr.
    #[arg(long, short)]
    verbose: bool,
}

/// Root-finding strategy selection.
#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    /// Follow parent links without modifying them.
    ChainWalk,
    /// Shorten parent chains by halving while uniting.
    Halving,
}

/// Maps a [`FindStrategy`] to the local CLI [`Strategy`] enum.
const fn strategy_from_core(s: FindStrategy) -> Strategy {
    match s {
        FindStrategy::ChainWalk => Strategy::ChainWalk,
        FindStrategy::Halving => Strategy::Halving,
    }
}

/// The CLI default strategy, derived from [`FindStrategy::DEFAULT`] so
/// the two cannot silently diverge.
const CLI_DEFAULT_STRATEGY: Strategy = strategy_from_core(FindStrategy::DEFAULT);

impl From<Strategy> for FindStrategy {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::ChainWalk => Self::ChainWalk,
            Strategy::Halving => Self::Halving,
        }
    }
}

/// Read the whole input, from the named file or standard input.
///
/// Bytes are decoded per line during loading so an encoding error can
/// name its line.
fn read_input(path: Option<&PathBuf>) -> Result<Vec<u8>, String> {
    match path {
        Some(path) => {
            std::fs::read(path).map_err(|e| format!("error: reading {}: {e}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| format!("error: reading stdin: {e}"))?;
            Ok(buf)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let input = match read_input(cli.input.as_ref()) {
        Ok(input) => input,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let mut loaded = match pointunion_core::load_bytes(&input, cli.strategy.into()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let components = loaded.engine.components();
    let elapsed = start.elapsed();

    if cli.verbose {
        loaded.diagnostics.measure_depth(&loaded.engine);
        eprintln!("{}", loaded.diagnostics.report());
        eprintln!("Total duration: {:.3}ms", elapsed.as_secs_f64() * 1000.0);
    }

    if cli.json {
        match pointunion_export::to_json(&components) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: serializing components: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", pointunion_export::to_text(&components));
    }

    ExitCode::SUCCESS
}
