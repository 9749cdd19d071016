//! Fixtures command implementation.
//!
//! Materializes scraped test programs into a directory tree:
//! `ROOT/{valid|bad}/<category>/<feature>.java`, where a program goes under
//! `valid` when the language supports its feature.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::commands::common::{ensure_single_component, pathify, read_input};
use crate::commands::traits::{Command, CommandResult};
use crate::config::FixturesConfig;
use crate::error::{JoostError, Result};

/// One scraped test program. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FixtureRecord {
    /// Feature group, e.g. `Arrays`.
    pub category: String,
    /// Feature under test.
    pub feature_name: String,
    /// `"Y"` if the language supports the feature.
    pub supported: String,
    /// Program text.
    pub contents: String,
}

impl FixtureRecord {
    /// Whether this program belongs under the valid directory.
    pub fn is_valid(&self) -> bool {
        self.supported == "Y"
    }

    /// Path of this fixture relative to the fixture root.
    pub fn relative_path(&self, config: &FixturesConfig) -> Result<PathBuf> {
        let verdict = if self.is_valid() {
            &config.valid_dir
        } else {
            &config.bad_dir
        };
        let category = pathify(&self.category);
        let file_name = format!("{}.{}", pathify(&self.feature_name), config.extension);

        ensure_single_component(&category)?;
        ensure_single_component(&file_name)?;
        Ok(Path::new(verdict).join(category).join(file_name))
    }
}

/// Parse a JSON array of fixture records.
pub fn parse_records(json: &str) -> Result<Vec<FixtureRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Write every record under `root`, creating directories as needed.
///
/// Returns the written paths in record order. Later records overwrite
/// earlier ones that map to the same path.
pub fn materialize(
    records: &[FixtureRecord],
    root: &Path,
    config: &FixturesConfig,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(records.len());
    for record in records {
        let path = root.join(record.relative_path(config)?);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| JoostError::file(parent, e))?;
        }
        std::fs::write(&path, &record.contents).map_err(|e| JoostError::file(&path, e))?;
        written.push(path);
    }
    Ok(written)
}

/// Arguments for the fixtures command.
#[derive(Debug, Clone, Default)]
pub struct FixturesArgs {
    /// Root directory for the fixture tree.
    pub root: PathBuf,
    /// JSON input file; stdin when absent.
    pub input: Option<PathBuf>,
}

/// Fixtures command handler.
pub struct FixturesCommand {
    args: FixturesArgs,
    config: FixturesConfig,
}

impl FixturesCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<CommandResult<Vec<PathBuf>>> {
        match &self.args.input {
            Some(path) => info!("reading fixtures from {}", path.display()),
            None => info!("reading fixtures from stdin"),
        }
        let json = read_input(self.args.input.as_deref())?;
        let records = parse_records(&json)?;
        let written = materialize(&records, &self.args.root, &self.config)?;

        let valid = records.iter().filter(|r| r.is_valid()).count();
        info!(
            root = %self.args.root.display(),
            valid,
            bad = records.len() - valid,
            "wrote {} fixture(s)",
            written.len()
        );
        let count = written.len();
        Ok(CommandResult::success(written).with_items_processed(count))
    }
}

impl Command for FixturesCommand {
    type Args = FixturesArgs;
    type Config = FixturesConfig;
    type Output = CommandResult<Vec<PathBuf>>;

    fn new(args: Self::Args, config: Self::Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "fixtures"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SCRAPED: &str = r#"[
        {
            "category": "Arrays",
            "featureName": "Array Length",
            "supported": "Y",
            "contents": "public class A {}",
            "sourceURL": "https://example.invalid/arrays"
        },
        {
            "category": "Static Fields / Methods",
            "featureName": "Static Init",
            "supported": "N",
            "contents": "public class B { static {} }"
        }
    ]"#;

    fn record(category: &str, feature: &str, supported: &str) -> FixtureRecord {
        FixtureRecord {
            category: category.to_string(),
            feature_name: feature.to_string(),
            supported: supported.to_string(),
            contents: String::new(),
        }
    }

    #[test]
    fn test_parse_records_ignores_extra_fields() {
        let records = parse_records(SCRAPED).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].feature_name, "Array Length");
        assert!(records[0].is_valid());
        assert!(!records[1].is_valid());
    }

    #[test]
    fn test_parse_records_rejects_malformed_json() {
        assert!(matches!(parse_records("[{"), Err(JoostError::Json(_))));
        assert!(matches!(
            parse_records(r#"[{"category": "A"}]"#),
            Err(JoostError::Json(_))
        ));
    }

    #[test]
    fn test_relative_path() {
        let config = FixturesConfig::default();
        assert_eq!(
            record("Arrays", "Array Length", "Y").relative_path(&config).unwrap(),
            PathBuf::from("valid/arrays/array_length.java")
        );
        assert_eq!(
            record("Static Fields / Methods", "Static Init", "N")
                .relative_path(&config)
                .unwrap(),
            PathBuf::from("bad/static_fields_-_methods/static_init.java")
        );
        // Only an exact "Y" counts as supported.
        assert_eq!(
            record("A", "B", "y").relative_path(&config).unwrap(),
            PathBuf::from("bad/a/b.java")
        );
    }

    #[test]
    fn test_relative_path_with_config() {
        let config = FixturesConfig {
            valid_dir: "pass".to_string(),
            bad_dir: "fail".to_string(),
            extension: "joos".to_string(),
        };
        assert_eq!(
            record("Casts", "Int To Char", "Y").relative_path(&config).unwrap(),
            PathBuf::from("pass/casts/int_to_char.joos")
        );
    }

    #[test]
    fn test_relative_path_rejects_traversal() {
        let config = FixturesConfig::default();
        assert!(record("..", "x", "Y").relative_path(&config).is_err());
        assert!(record("", "x", "Y").relative_path(&config).is_err());
    }

    #[test]
    fn test_materialize() {
        let dir = TempDir::new().unwrap();
        let records = parse_records(SCRAPED).unwrap();
        let written = materialize(&records, dir.path(), &FixturesConfig::default()).unwrap();

        let valid = dir.path().join("valid/arrays/array_length.java");
        let bad = dir.path().join("bad/static_fields_-_methods/static_init.java");
        assert_eq!(written, vec![valid.clone(), bad.clone()]);
        assert_eq!(std::fs::read_to_string(valid).unwrap(), "public class A {}");
        assert_eq!(
            std::fs::read_to_string(bad).unwrap(),
            "public class B { static {} }"
        );
    }

    #[test]
    fn test_fixtures_command_from_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("tests.json");
        std::fs::write(&input, SCRAPED).unwrap();

        let args = FixturesArgs {
            root: dir.path().join("fixtures"),
            input: Some(input),
        };
        let result = FixturesCommand::new(args, FixturesConfig::default()).execute().unwrap();
        assert!(result.success);
        assert_eq!(result.items_processed, 2);
        assert!(dir.path().join("fixtures/valid/arrays/array_length.java").is_file());
        assert_eq!(FixturesCommand::name(), "fixtures");
    }
}
