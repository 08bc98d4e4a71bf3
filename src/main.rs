//! Moddelta CLI - extract a minimal mod delta from two asset trees
//!
//! Usage: moddelta [OPTIONS]
//!
//! Reads a baseline extraction and a modified extraction, copies only
//! changed/new files into the output tree, and consolidates per-category
//! config fragments for the surviving assets.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use moddelta::{Config, DeltaEngine, TreeLayout};

/// Moddelta - delta asset tree extraction and config consolidation
#[derive(Parser, Debug)]
#[command(name = "moddelta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Baseline (unmodified) extraction root
    #[arg(long, default_value = "export-baseline")]
    baseline: PathBuf,

    /// Modified extraction root
    #[arg(long, default_value = "export-modified")]
    modified: PathBuf,

    /// Output tree for the delta
    #[arg(short, long, default_value = "delta-output")]
    output: PathBuf,

    /// Path to the configuration file
    #[arg(short, long, default_value = "moddelta.toml")]
    config: PathBuf,

    /// Delete the baseline tree after the run
    #[arg(long)]
    delete_baseline: bool,

    /// Delete the modified tree after the run
    #[arg(long)]
    delete_modified: bool,

    /// Emit the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("fatal: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load_or_default(&cli.config)?;
    if cli.delete_baseline {
        config.cleanup.delete_baseline = true;
    }
    if cli.delete_modified {
        config.cleanup.delete_modified = true;
    }

    let layout = TreeLayout {
        baseline_root: cli.baseline.clone(),
        modified_root: cli.modified.clone(),
        output_root: cli.output.clone(),
    };

    let summary = DeltaEngine::new(config, layout).run()?;

    if cli.json {
        let line = serde_json::json!({
            "event": "delta",
            "summary": summary,
        });
        println!("{}", serde_json::to_string(&line)?);
    } else {
        println!(
            "Summary: {} new, {} changed, {} unchanged, {} always-copy, {} failed",
            summary.new, summary.changed, summary.unchanged, summary.always_copy, summary.failed
        );
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
