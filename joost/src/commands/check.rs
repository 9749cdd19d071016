//! Check command implementation.
//!
//! Scans many source files on a worker pool and reports, per file, whether
//! the scanner accepted it.

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use joosc_lex::{faults, scan, LexError};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::commands::common::{collect_sources, error_messages};
use crate::commands::traits::{Command, CommandResult};
use crate::config::CheckConfig;
use crate::error::{JoostError, Result};

/// Outcome of checking one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// No lexical faults.
    Ok,
    /// The faults found, in source order.
    Faults(Vec<LexError>),
    /// The file could not be read.
    Unreadable(String),
}

/// Per-file result of a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Checked file.
    pub path: PathBuf,
    /// What the scanner made of it.
    pub verdict: Verdict,
}

impl FileReport {
    /// Whether the file passed.
    pub fn passed(&self) -> bool {
        matches!(self.verdict, Verdict::Ok)
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verdict {
            Verdict::Ok => write!(f, "{}: ok", self.path.display()),
            Verdict::Faults(errors) => {
                write!(f, "{}: FAIL ({} faults)", self.path.display(), errors.len())
            }
            Verdict::Unreadable(reason) => {
                write!(f, "{}: FAIL (unreadable: {})", self.path.display(), reason)
            }
        }
    }
}

/// Scan one file.
pub fn check_file(path: &Path) -> FileReport {
    let verdict = match std::fs::read_to_string(path) {
        Ok(source) => {
            let errors: Vec<LexError> = faults(&scan(&source)).collect();
            debug!(file = %path.display(), faults = errors.len(), "checked file");
            if errors.is_empty() {
                Verdict::Ok
            } else {
                Verdict::Faults(errors)
            }
        }
        Err(e) => Verdict::Unreadable(e.to_string()),
    };
    FileReport {
        path: path.to_path_buf(),
        verdict,
    }
}

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files and directories to check.
    pub paths: Vec<PathBuf>,
    /// Worker count override.
    pub jobs: Option<usize>,
    /// List every fault under its file.
    pub verbose: bool,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: CheckConfig,
}

impl CheckCommand {
    /// Worker threads to use.
    pub fn jobs(&self) -> usize {
        self.args.jobs.unwrap_or(self.config.jobs).max(1)
    }

    /// Check every file, in path order.
    pub fn check_all(&self) -> Result<Vec<FileReport>> {
        let files = collect_sources(&self.args.paths, &self.config.extension)?;
        if files.is_empty() {
            warn!("no .{} files found", self.config.extension);
            return Ok(Vec::new());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs())
            .build()
            .map_err(|e| JoostError::Validation(format!("{}: {}", error_messages::THREAD_POOL, e)))?;
        debug!(files = files.len(), jobs = self.jobs(), "checking files");

        Ok(pool.install(|| {
            files
                .par_iter()
                .map(|path| check_file(path))
                .collect::<Vec<_>>()
        }))
    }

    /// Check and write one line per file to `out`.
    ///
    /// Fails with [`JoostError::CheckFailed`] if any file did not pass.
    pub fn run(&self, out: &mut impl Write) -> Result<CommandResult<Vec<FileReport>>> {
        let start_time = Instant::now();
        let reports = self.check_all()?;

        for report in &reports {
            writeln!(out, "{}", report)?;
            if !self.args.verbose {
                continue;
            }
            if let Verdict::Faults(errors) = &report.verdict {
                for error in errors {
                    writeln!(out, "  {} [{}]", error, error.fault.code())?;
                }
            }
        }
        out.flush()?;

        let total = reports.len();
        let failed = reports.iter().filter(|r| !r.passed()).count();
        info!(total, failed, "check finished");

        if failed > 0 {
            return Err(JoostError::CheckFailed { failed, total });
        }
        Ok(CommandResult::success(reports)
            .with_items_processed(total)
            .with_execution_time_ms(start_time.elapsed().as_millis() as u64))
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Config = CheckConfig;
    type Output = CommandResult<Vec<FileReport>>;

    fn new(args: Self::Args, config: Self::Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdout = io::stdout();
        self.run(&mut stdout.lock())
    }

    fn name() -> &'static str {
        "check"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use joosc_lex::LexFault;
    use tempfile::TempDir;

    fn setup_sources() -> TempDir {
        let dir = TempDir::new().unwrap();
        let pkg = dir.path().join("pkg");
        std::fs::create_dir_all(&pkg).unwrap();
        std::fs::write(dir.path().join("Good.java"), "public class Good { int x = 5; }").unwrap();
        std::fs::write(pkg.join("Bad.java"), "int x = 5@;\nchar c = 'ab';").unwrap();
        std::fs::write(pkg.join("README.md"), "@@@").unwrap();
        dir
    }

    fn command(dir: &TempDir, verbose: bool) -> CheckCommand {
        let args = CheckArgs {
            paths: vec![dir.path().to_path_buf()],
            jobs: Some(2),
            verbose,
        };
        CheckCommand::new(args, CheckConfig::default())
    }

    #[test]
    fn test_check_file_ok() {
        let dir = setup_sources();
        let report = check_file(&dir.path().join("Good.java"));
        assert!(report.passed());
        assert!(report.to_string().ends_with("Good.java: ok"));
    }

    #[test]
    fn test_check_file_faults() {
        let dir = setup_sources();
        let report = check_file(&dir.path().join("pkg/Bad.java"));
        let Verdict::Faults(errors) = &report.verdict else {
            panic!("expected faults, got {:?}", report.verdict);
        };
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].fault, LexFault::UnrecognizedCharacter('@'));
        assert_eq!(errors[1].fault, LexFault::OverlongCharacterLiteral { chars: 2 });
        assert!(report.to_string().ends_with("Bad.java: FAIL (2 faults)"));
    }

    #[test]
    fn test_check_file_unreadable() {
        let report = check_file(Path::new("/no/such/File.java"));
        assert!(!report.passed());
        assert!(report.to_string().contains("FAIL (unreadable"));
    }

    #[test]
    fn test_check_all_in_path_order() {
        let dir = setup_sources();
        let reports = command(&dir, false).check_all().unwrap();
        let names: Vec<_> = reports
            .iter()
            .map(|r| r.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["Good.java", "Bad.java"]);
    }

    #[test]
    fn test_run_reports_failure() {
        let dir = setup_sources();
        let mut out = Vec::new();
        let err = command(&dir, true).run(&mut out).unwrap_err();
        assert!(matches!(err, JoostError::CheckFailed { failed: 1, total: 2 }));

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with("Good.java: ok"));
        assert!(lines[1].ends_with("Bad.java: FAIL (2 faults)"));
        assert_eq!(lines[2], "  unrecognized character '@' at 1:10 [E1001]");
        assert_eq!(lines[3], "  character literal holds 2 characters at 2:10 [E1006]");
    }

    #[test]
    fn test_run_success() {
        let dir = setup_sources();
        let good = dir.path().join("Good.java");
        let args = CheckArgs {
            paths: vec![good],
            jobs: None,
            verbose: false,
        };
        let command = CheckCommand::new(args, CheckConfig::default());
        let mut out = Vec::new();
        let result = command.run(&mut out).unwrap();
        assert!(result.success);
        assert_eq!(result.items_processed, 1);
        assert_eq!(result.data.len(), 1);
    }

    #[test]
    fn test_run_empty_directory() {
        let dir = TempDir::new().unwrap();
        let mut out = Vec::new();
        let result = command(&dir, false).run(&mut out).unwrap();
        assert_eq!(result.items_processed, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_jobs() {
        let args = CheckArgs {
            jobs: Some(0),
            ..CheckArgs::default()
        };
        assert_eq!(CheckCommand::new(args, CheckConfig::default()).jobs(), 1);

        let config = CheckConfig {
            jobs: 6,
            extension: "java".to_string(),
        };
        assert_eq!(CheckCommand::new(CheckArgs::default(), config).jobs(), 6);
        assert_eq!(CheckCommand::name(), "check");
    }
}
