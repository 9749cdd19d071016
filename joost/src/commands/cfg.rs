//! Cfg command implementation.
//!
//! Converts a line-oriented BNF grammar into the `.cfg` input of an LALR(1)
//! table generator:
//!
//! ```text
//! <terminal count>
//! <terminals, sorted>
//! <nonterminal count>
//! <nonterminals, in definition order>
//! <start symbol>
//! <production count>
//! <productions, "LHS RHS...">
//! ```
//!
//! Grammar syntax:
//!
//! ```text
//! # comment
//! ClassBody:
//!   { ClassBodyDeclarations? }
//! AssignmentOperator: one of
//!   = +=
//! TOKENS=Literal:
//!   ignored body
//! ```

use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

use crate::commands::common::write_output;
use crate::commands::traits::{Command, CommandResult};
use crate::config::CfgConfig;
use crate::error::{GrammarError, JoostError, Result};

/// One alternative of a rule: its right-hand-side symbols.
pub type Alternative = Vec<String>;

/// A parsed grammar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grammar {
    productions: IndexMap<String, Vec<Alternative>>,
    rhs: FxHashSet<String>,
    skipped: Vec<usize>,
}

/// What continuation lines currently belong to.
enum Section {
    Start,
    Rule { name: String, one_of: bool },
    Tokens,
}

/// Returns the symbol without its `?` if it is optional.
fn optional_base(symbol: &str) -> Option<&str> {
    symbol.strip_suffix('?').filter(|base| !base.is_empty())
}

fn strip_optional(symbol: &str) -> &str {
    optional_base(symbol).unwrap_or(symbol)
}

impl Grammar {
    /// Parse grammar text.
    ///
    /// Lines that are neither blank, comment, alternative nor rule header
    /// are logged and skipped; their line numbers are kept in
    /// [`Grammar::skipped_lines`].
    pub fn parse(text: &str) -> std::result::Result<Self, GrammarError> {
        let mut grammar = Grammar::default();
        let mut section = Section::Start;

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim_end();

            if line.is_empty() || line.trim_start_matches(' ').starts_with('#') {
                continue;
            }

            if let Some(body) = line.strip_prefix("  ") {
                match &section {
                    Section::Start => {
                        return Err(GrammarError::OrphanAlternative { line: line_no })
                    }
                    Section::Tokens => {}
                    Section::Rule { name, one_of } => {
                        grammar.add_alternative(name, body, *one_of);
                    }
                }
                continue;
            }

            section = match Self::parse_header(line, line_no)? {
                Some(next) => next,
                None => {
                    warn!(line = line_no, "skipping bad grammar line: {}", line);
                    grammar.skipped.push(line_no);
                    // Alternatives after a bad line belong to no rule.
                    Section::Tokens
                }
            };
            if let Section::Rule { name, .. } = &section {
                if grammar.productions.insert(name.clone(), Vec::new()).is_some() {
                    warn!(line = line_no, rule = %name, "rule redefined, earlier alternatives dropped");
                }
            }
        }

        Ok(grammar)
    }

    fn parse_header(line: &str, line_no: usize) -> std::result::Result<Option<Section>, GrammarError> {
        let (name, one_of) = match line.strip_suffix(": one of") {
            Some(name) => (name, true),
            None => match line.strip_suffix(':') {
                Some(name) => (name, false),
                None => return Ok(None),
            },
        };

        if let Some(token_class) = name.strip_prefix("TOKENS=") {
            debug!(line = line_no, class = token_class, "skipping token class");
            return Ok(Some(Section::Tokens));
        }
        if name.trim().is_empty() {
            return Err(GrammarError::EmptyRuleName { line: line_no });
        }
        Ok(Some(Section::Rule {
            name: name.to_string(),
            one_of,
        }))
    }

    fn add_alternative(&mut self, name: &str, body: &str, one_of: bool) {
        let symbols: Vec<String> = body.split_whitespace().map(str::to_string).collect();
        for symbol in &symbols {
            self.rhs.insert(strip_optional(symbol).to_string());
        }

        let Some(alternatives) = self.productions.get_mut(name) else {
            return;
        };
        if one_of {
            alternatives.extend(symbols.into_iter().map(|symbol| vec![symbol]));
        } else {
            alternatives.push(symbols);
        }
    }

    /// Rewrite every alternative holding `X?` into one with `X` and one
    /// without it, until no optional symbol is left.
    ///
    /// The first alternative with an optional is expanded on its first
    /// optional symbol; both variants go to the end of the rule, the
    /// variant with the symbol first.
    pub fn expand_optionals(&mut self) {
        for alternatives in self.productions.values_mut() {
            while let Some((alt, pos)) = alternatives.iter().enumerate().find_map(|(i, alt)| {
                alt.iter()
                    .position(|symbol| optional_base(symbol).is_some())
                    .map(|pos| (i, pos))
            }) {
                let mut without = alternatives.remove(alt);
                let mut with = without.clone();
                with[pos] = strip_optional(&with[pos]).to_string();
                without.remove(pos);
                alternatives.push(with);
                alternatives.push(without);
            }
        }
    }

    /// Symbols used on a right-hand side but never defined, sorted.
    pub fn terminals(&self) -> Vec<&str> {
        let mut terminals: Vec<&str> = self
            .rhs
            .iter()
            .filter(|symbol| !self.productions.contains_key(symbol.as_str()))
            .map(String::as_str)
            .collect();
        terminals.sort_unstable();
        terminals
    }

    /// Defined rule names, in definition order.
    pub fn nonterminals(&self) -> impl Iterator<Item = &str> {
        self.productions.keys().map(String::as_str)
    }

    /// Every `(lhs, rhs)` pair, grouped by rule in definition order.
    pub fn productions(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.productions.iter().flat_map(|(lhs, alternatives)| {
            alternatives
                .iter()
                .map(move |alt| (lhs.as_str(), alt.as_slice()))
        })
    }

    /// Line numbers skipped as malformed.
    pub fn skipped_lines(&self) -> &[usize] {
        &self.skipped
    }

    /// Render the `.cfg` text.
    pub fn to_cfg(&self, start_symbol: &str) -> String {
        self.cfg_output(start_symbol).to_string()
    }

    /// Displayable `.cfg` rendering with the given start symbol.
    pub fn cfg_output<'a>(&'a self, start_symbol: &'a str) -> CfgOutput<'a> {
        CfgOutput {
            grammar: self,
            start_symbol,
        }
    }
}

/// A grammar rendered in the `.cfg` format.
pub struct CfgOutput<'a> {
    grammar: &'a Grammar,
    start_symbol: &'a str,
}

impl fmt::Display for CfgOutput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grammar = self.grammar;

        let terminals = grammar.terminals();
        writeln!(f, "{}", terminals.len())?;
        for terminal in terminals {
            writeln!(f, "{}", terminal)?;
        }

        writeln!(f, "{}", grammar.productions.len())?;
        for nonterminal in grammar.nonterminals() {
            writeln!(f, "{}", nonterminal)?;
        }

        writeln!(f, "{}", self.start_symbol)?;

        writeln!(f, "{}", grammar.productions().count())?;
        for (lhs, rhs) in grammar.productions() {
            if rhs.is_empty() {
                writeln!(f, "{}", lhs)?;
            } else {
                writeln!(f, "{} {}", lhs, rhs.join(" "))?;
            }
        }
        Ok(())
    }
}

/// Arguments for the cfg command.
#[derive(Debug, Clone, Default)]
pub struct CfgArgs {
    /// Grammar file.
    pub grammar: PathBuf,
    /// Output file; stdout when absent.
    pub output: Option<PathBuf>,
    /// Start symbol override.
    pub start: Option<String>,
}

/// Cfg command handler.
pub struct CfgCommand {
    args: CfgArgs,
    config: CfgConfig,
}

impl CfgCommand {
    /// The start symbol, from the command line or the configuration.
    pub fn start_symbol(&self) -> &str {
        self.args
            .start
            .as_deref()
            .unwrap_or(&self.config.start_symbol)
    }

    /// Convert the grammar file and return the `.cfg` text.
    pub fn convert(&self) -> Result<(String, Grammar)> {
        let text = std::fs::read_to_string(&self.args.grammar)
            .map_err(|e| JoostError::file(&self.args.grammar, e))?;
        let mut grammar = Grammar::parse(&text)?;
        grammar.expand_optionals();

        let start = self.start_symbol();
        if !grammar.productions.contains_key(start) {
            warn!(start, "start symbol is not defined by the grammar");
        }
        Ok((grammar.to_cfg(start), grammar))
    }

    /// Execute the command.
    pub fn run(&self) -> Result<CommandResult> {
        let start_time = Instant::now();
        let (cfg, grammar) = self.convert()?;
        write_output(self.args.output.as_deref(), &cfg)?;

        let productions = grammar.productions().count();
        info!(
            grammar = %self.args.grammar.display(),
            terminals = grammar.terminals().len(),
            nonterminals = grammar.productions.len(),
            productions,
            "converted grammar"
        );

        let mut result = CommandResult::success(())
            .with_items_processed(productions)
            .with_execution_time_ms(start_time.elapsed().as_millis() as u64);
        for line in grammar.skipped_lines() {
            result = result.with_warning(format!("skipped bad line {}", line));
        }
        Ok(result)
    }
}

impl Command for CfgCommand {
    type Args = CfgArgs;
    type Config = CfgConfig;
    type Output = CommandResult;

    fn new(args: Self::Args, config: Self::Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "cfg"
    }
}
