//! joost - tooling around the Joos scanner.
//!
//! Converts BNF grammars to `.cfg` tables, materializes scraped test
//! programs into fixture trees and batch-checks source files with the
//! scanner.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::traits::{Command, CommandResult};
use commands::{CfgArgs, CfgCommand, CheckArgs, CheckCommand, FixturesArgs, FixturesCommand};
use config::Config;
use error::{JoostError, Result};
use tracing::{debug, warn};

/// Joost - tooling around the Joos scanner
#[derive(Parser, Debug)]
#[command(name = "joost")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tooling around the Joos scanner", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "JOOST_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "JOOST_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "JOOST_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the joost CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a BNF grammar to the LALR(1) `.cfg` format
    Cfg(CfgOpts),

    /// Write scraped test programs into a fixture tree
    ///
    /// Reads a JSON array of {category, featureName, supported, contents}
    /// records and writes each program under ROOT/valid or ROOT/bad.
    Fixtures(FixturesOpts),

    /// Scan source files and report lexical faults
    Check(CheckOpts),
}

/// Arguments for the cfg subcommand.
#[derive(Parser, Debug)]
struct CfgOpts {
    /// Grammar file
    grammar: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Start symbol (default: from config)
    #[arg(short, long)]
    start: Option<String>,
}

/// Arguments for the fixtures subcommand.
#[derive(Parser, Debug)]
struct FixturesOpts {
    /// Root directory of the fixture tree
    root: PathBuf,

    /// JSON input file (default: stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckOpts {
    /// Files or directories to check
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Number of parallel jobs (default: from config)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    jobs: Option<u32>,
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.no_color)?;
    let config = load_config(cli.config.as_deref())?;
    execute_command(cli.command, cli.verbose, config)
}

/// Install a stderr subscriber; `debug` when verbose, `info` otherwise.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| JoostError::Config(format!("Failed to initialize logging: {}", e)))
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Cfg(opts) => {
            let args = CfgArgs {
                grammar: opts.grammar,
                output: opts.output,
                start: opts.start,
            };
            let result = CfgCommand::new(args, config.cfg).execute()?;
            log_result(CfgCommand::name(), &result);
        }
        Commands::Fixtures(opts) => {
            let args = FixturesArgs {
                root: opts.root,
                input: opts.input,
            };
            let result = FixturesCommand::new(args, config.fixtures).execute()?;
            for path in &result.data {
                debug!(path = %path.display(), "wrote fixture");
            }
            log_result(FixturesCommand::name(), &result);
        }
        Commands::Check(opts) => {
            let args = CheckArgs {
                paths: opts.paths,
                jobs: opts.jobs.map(|jobs| jobs as usize),
                verbose,
            };
            let result = CheckCommand::new(args, config.check).execute()?;
            for report in &result.data {
                debug!(path = %report.path.display(), "passed");
            }
            log_result(CheckCommand::name(), &result);
        }
    }
    Ok(())
}

fn log_result<T>(command: &str, result: &CommandResult<T>) {
    for warning in &result.warnings {
        warn!(command, "{}", warning);
    }
    debug!(
        command,
        success = result.success,
        processed = result.items_processed,
        elapsed_ms = result.execution_time_ms,
        "command finished"
    );
}
