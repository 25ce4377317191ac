//! Spawnscore -- ranks spawn points for scenario files.
//!
//! Usage:
//!   spawnscore [OPTIONS] [SCENARIO...]
//!
//! Reads each scenario (JSON, `-` or no path for stdin), scores it, and
//! prints one JSON report per scenario to stdout. Logging goes to stderr and
//! is controlled by `RUST_LOG`.
//!
//! Options:
//!   --weights FILE  Weights used by scenarios that carry none
//!   --top N         Only print the best N cells of each scenario
//!   --pretty        Pretty-print the JSON reports

use std::env;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use spawnscore::scenario::{evaluate_batch, Scenario, ScenarioError};
use spawnscore::SpawnWeights;

struct Options {
    weights: Option<String>,
    top: Option<usize>,
    pretty: bool,
    scenarios: Vec<String>,
}

fn print_usage() {
    eprintln!("Usage: spawnscore [--weights FILE] [--top N] [--pretty] [SCENARIO...]");
    eprintln!();
    eprintln!("Scores each scenario file (or stdin for '-' / no path) and prints");
    eprintln!("the ranked spawn cells as JSON, best first.");
}

/// Parses command-line arguments. `Ok(None)` means help was requested.
fn parse_args(args: &[String]) -> Result<Option<Options>, String> {
    let mut options = Options {
        weights: None,
        top: None,
        pretty: false,
        scenarios: Vec::new(),
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--weights" => {
                i += 1;
                let path = args.get(i).ok_or("--weights needs a file path")?;
                options.weights = Some(path.clone());
            }
            "--top" => {
                i += 1;
                let value = args.get(i).ok_or("--top needs a number")?;
                let n = value
                    .parse()
                    .map_err(|_| format!("invalid --top value: '{}'", value))?;
                options.top = Some(n);
            }
            "--pretty" => options.pretty = true,
            "--help" | "-h" => return Ok(None),
            other if other.starts_with("--") => {
                return Err(format!("unknown argument: {}", other));
            }
            path => options.scenarios.push(path.to_string()),
        }
        i += 1;
    }

    if options.scenarios.is_empty() {
        options.scenarios.push("-".to_string());
    }
    Ok(Some(options))
}

fn load_scenario(path: &str) -> Result<Scenario, ScenarioError> {
    if path == "-" {
        Scenario::read_from(io::stdin().lock())
    } else {
        Scenario::load(Path::new(path))
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("{}", message);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let fallback = match &options.weights {
        Some(path) => match SpawnWeights::load(Path::new(path)) {
            Ok(weights) => weights,
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => SpawnWeights::default(),
    };

    let mut prepared = Vec::with_capacity(options.scenarios.len());
    for path in &options.scenarios {
        match load_scenario(path).and_then(|s| s.prepare(&fallback)) {
            Ok(scenario) => prepared.push(scenario),
            Err(e) => {
                error!(scenario = %path, "{}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    let reports = evaluate_batch(prepared);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for (path, mut report) in options.scenarios.iter().zip(reports) {
        info!(
            scenario = %path,
            matched = report.matched_players,
            unmatched = report.unmatched_players,
            candidates = report.ranked.len(),
            "scored"
        );
        if let Some(n) = options.top {
            report.truncate(n);
        }
        let written = if options.pretty {
            serde_json::to_writer_pretty(&mut out, &report)
        } else {
            serde_json::to_writer(&mut out, &report)
        };
        if let Err(e) = written.map_err(io::Error::from).and_then(|_| writeln!(out)) {
            error!("failed to write report: {}", e);
            return ExitCode::FAILURE;
        }
    }
    if let Err(e) = out.flush() {
        error!("failed to flush output: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
