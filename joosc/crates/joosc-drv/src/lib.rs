//! joosc-drv - Scanner driver
//!
//! Reads one Joos source file, scans it and either lists the lexemes or
//! reports every lexical fault. Any fault makes the run fail with
//! [`LEXICAL_FAILURE_EXIT_CODE`].

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use joosc_lex::{has_malformed, report, Lexeme, SemanticValue};
use joosc_util::{FileId, Handler, SourceMap};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Process exit code when the source contains any malformed lexeme.
pub const LEXICAL_FAILURE_EXIT_CODE: i32 = 42;

/// Output format of the lexeme listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum EmitType {
    /// One lexeme per line: `line:column<TAB>KIND(value)`.
    #[default]
    Text,
    /// A JSON array of lexeme records.
    Json,
}

/// Configuration for one driver run.
#[derive(Debug, Clone)]
pub struct Config {
    /// File to scan.
    pub input_file: PathBuf,
    /// Listing format on success.
    pub emit: EmitType,
    /// Suppress the listing on success.
    pub quiet: bool,
}

impl Config {
    /// Default configuration for `input_file`.
    pub fn new(input_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            emit: EmitType::default(),
            quiet: false,
        }
    }
}

/// Errors that stop the driver before a verdict on the source.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The input file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// Writing the listing or diagnostics failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    /// The JSON listing could not be produced.
    #[error("failed to serialize lexemes: {0}")]
    Json(#[from] serde_json::Error),

    /// The tracing subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

/// Driver result type.
pub type Result<T> = std::result::Result<T, DriverError>;

/// A scan of one source file.
pub struct Session {
    /// Run configuration.
    pub config: Config,
    /// Holds the scanned file for diagnostic rendering.
    pub sources: SourceMap,
    /// Collected diagnostics.
    pub diagnostics: Handler,
    file_id: FileId,
    source: Arc<str>,
}

impl Session {
    /// Read the configured input file.
    ///
    /// Each invalid UTF-8 sequence becomes one U+FFFD, which the scanner
    /// reports as an unrecognized character.
    pub fn new(config: Config) -> Result<Self> {
        let bytes = fs::read(&config.input_file).map_err(|source| DriverError::Io {
            path: config.input_file.clone(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes).into_owned();
        Ok(Self::from_source(config, content))
    }

    /// Build a session over in-memory source text.
    pub fn from_source(config: Config, content: impl Into<Arc<str>>) -> Self {
        let source: Arc<str> = content.into();
        let mut sources = SourceMap::new();
        let file_id = sources.add_file(config.input_file.display().to_string(), source.clone());
        Self {
            config,
            sources,
            diagnostics: Handler::new(),
            file_id,
            source,
        }
    }

    /// The source text being scanned.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Scan the source, write the listing to `out` or the diagnostics to
    /// `err`, and return the process exit code.
    pub fn run(&self, out: &mut impl Write, err: &mut impl Write) -> Result<i32> {
        let lexemes = joosc_lex::scan(&self.source);
        debug!(
            file = %self.config.input_file.display(),
            lexemes = lexemes.len(),
            "scanned file"
        );

        if has_malformed(&lexemes) {
            let count = report::emit_diagnostics(&lexemes, &self.diagnostics);
            self.write_diagnostics(err)?;
            writeln!(
                err,
                "error: aborting due to {} lexical error{}",
                count,
                if count == 1 { "" } else { "s" }
            )?;
            return Ok(LEXICAL_FAILURE_EXIT_CODE);
        }

        if !self.config.quiet {
            self.write_lexemes(&lexemes, out)?;
        }
        Ok(0)
    }

    fn write_diagnostics(&self, err: &mut impl Write) -> Result<()> {
        for diag in self.diagnostics.take_diagnostics() {
            writeln!(err, "{}", diag.header())?;
            if let Some(location) = self.sources.format_span(diag.span.in_file(self.file_id)) {
                writeln!(err, "{}", location)?;
            }
            for help in &diag.helps {
                writeln!(err, "  = help: {}", help)?;
            }
        }
        Ok(())
    }

    fn write_lexemes(&self, lexemes: &[Lexeme], out: &mut impl Write) -> Result<()> {
        match self.config.emit {
            EmitType::Text => {
                for lexeme in lexemes {
                    writeln!(out, "{}", lexeme)?;
                }
            }
            EmitType::Json => {
                let records: Vec<_> = lexemes
                    .iter()
                    .map(|lexeme| LexemeRecord::new(lexeme, &self.source))
                    .collect();
                serde_json::to_writer_pretty(&mut *out, &records)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

/// Serialized form of a lexeme in the JSON listing.
#[derive(Debug, Serialize)]
pub struct LexemeRecord<'a> {
    /// Token class name, e.g. `ASSIGN` or `IDENTIFIER`.
    pub kind: &'static str,
    /// Source text of the lexeme.
    pub text: &'a str,
    /// Semantic value, absent for operators and separators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<RecordValue<'a>>,
    /// Start line (1-based).
    pub line: u32,
    /// Start column (1-based).
    pub column: u32,
    /// Start byte offset.
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// Characters consumed.
    pub length: usize,
}

/// Semantic value of a [`LexemeRecord`].
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RecordValue<'a> {
    /// Text payload.
    Text(&'a str),
    /// Integer payload.
    Number(u64),
    /// Character payload.
    Char(char),
}

impl<'a> LexemeRecord<'a> {
    /// Describe `lexeme`, which was scanned from `source`.
    pub fn new(lexeme: &'a Lexeme, source: &'a str) -> Self {
        let value = lexeme.semantic_value().map(|value| match value {
            SemanticValue::Text(text) => RecordValue::Text(text),
            SemanticValue::Number(n) => RecordValue::Number(n),
            SemanticValue::Char(c) => RecordValue::Char(c),
        });
        Self {
            kind: lexeme.kind.name(),
            text: source.get(lexeme.span.start..lexeme.span.end).unwrap_or(""),
            value,
            line: lexeme.span.line,
            column: lexeme.span.column,
            start: lexeme.span.start,
            end: lexeme.span.end,
            length: lexeme.consumed_length,
        }
    }
}

/// Scan the configured file against the process's stdout and stderr.
pub fn run(config: Config) -> Result<i32> {
    let session = Session::new(config)?;
    let stdout = io::stdout();
    let stderr = io::stderr();
    session.run(&mut stdout.lock(), &mut stderr.lock())
}
