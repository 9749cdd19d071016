//! joosc - scan a Joos source file into lexemes.

use std::path::PathBuf;

use clap::Parser;
use joosc_drv::{Config, DriverError, EmitType, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Scan a Joos source file and list its lexemes
///
/// Exits with 42 if the file contains any lexical error.
#[derive(Parser, Debug)]
#[command(name = "joosc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan a Joos source file into lexemes", long_about = None)]
struct Cli {
    /// Source file to scan
    file: PathBuf,

    /// Listing format
    #[arg(long, value_enum, default_value_t = EmitType::Text)]
    emit: EmitType,

    /// Enable verbose output
    #[arg(short, long, env = "JOOSC_VERBOSE")]
    verbose: bool,

    /// Do not list lexemes on success
    #[arg(short, long)]
    quiet: bool,

    /// Disable color output
    #[arg(long, env = "JOOSC_NO_COLOR")]
    no_color: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            input_file: self.file,
            emit: self.emit,
            quiet: self.quiet,
        }
    }
}

fn main() {
    match try_main() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

fn try_main() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.no_color)?;
    joosc_drv::run(cli.into_config())
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
        .map_err(|e| DriverError::Logging(e.to_string()))
}
