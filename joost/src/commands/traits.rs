//! Command trait and common types for the joost CLI.

use crate::error::Result;

/// Standard command trait that all joost commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Config` - The `joost.toml` table this command reads
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The configuration table for this command.
    type Config;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance.
    fn new(args: Self::Args, config: Self::Config) -> Self;

    /// Execute the command against the process's stdout.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Command execution result with metadata.
#[derive(Debug, Clone)]
pub struct CommandResult<T = ()> {
    /// Whether the command succeeded.
    pub success: bool,

    /// The command output data.
    pub data: T,

    /// Number of items processed (productions, fixtures, files).
    pub items_processed: usize,

    /// Execution time in milliseconds.
    pub execution_time_ms: u64,

    /// Warning messages collected during execution.
    pub warnings: Vec<String>,
}

impl<T> CommandResult<T> {
    /// Create a new successful command result.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            items_processed: 0,
            execution_time_ms: 0,
            warnings: Vec::new(),
        }
    }

    /// Set the number of items processed.
    pub fn with_items_processed(mut self, count: usize) -> Self {
        self.items_processed = count;
        self
    }

    /// Set the execution time.
    pub fn with_execution_time_ms(mut self, time_ms: u64) -> Self {
        self.execution_time_ms = time_ms;
        self
    }

    /// Add a warning message.
    pub fn with_warning(mut self, warning: String) -> Self {
        self.warnings.push(warning);
        self
    }
}
