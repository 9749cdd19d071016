//! Shared helpers for joost commands.

use std::io::{self, Read, Write};
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{JoostError, Result};

// ============================================================================
// Path Utilities
// ============================================================================

/// Turn a free-form name into a single path component.
///
/// Lowercases, replaces spaces with `_` and slashes with `-`.
pub fn pathify(name: &str) -> String {
    name.to_lowercase().replace(' ', "_").replace('/', "-")
}

/// Check that `name` is a plain directory or file name.
///
/// Rejects empty names, `.`, `..` and anything that would not stay a
/// single normal component under its parent.
pub fn ensure_single_component(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(JoostError::Validation(format!(
            "{}: {:?}",
            error_messages::INVALID_PATH_COMPONENT,
            name
        ))),
    }
}

/// Expand files and directories into the sorted list of files to process.
///
/// Files named explicitly are kept whatever their extension; directories
/// are walked recursively for files ending in `.{extension}`.
pub fn collect_sources(paths: &[PathBuf], extension: &str) -> Result<Vec<PathBuf>> {
    if paths.is_empty() {
        return Err(JoostError::Validation(
            error_messages::NO_INPUT_FILES.to_string(),
        ));
    }

    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk_dir(path, extension, &mut files)?;
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(JoostError::Validation(format!(
                "{}: {}",
                error_messages::INPUT_PATH_NOT_EXIST,
                path.display()
            )));
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Collect files ending in `.{extension}` below `dir`.
///
/// Symlinks are not followed, so a link back to an ancestor cannot loop.
fn walk_dir(dir: &Path, extension: &str, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            JoostError::file(path, e.into())
        })?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == extension)
        {
            files.push(entry.into_path());
        }
    }
    Ok(())
}

// ============================================================================
// Input and Output
// ============================================================================

/// Read all of `path`, or of stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| JoostError::file(path, e)),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Write `content` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| JoostError::file(parent, e))?;
            }
            std::fs::write(path, content).map_err(|e| JoostError::file(path, e))
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(content.as_bytes())?;
            out.flush()?;
            Ok(())
        }
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message prefixes.
pub mod error_messages {
    /// No input paths were given.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// An input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist";

    /// A derived name is not a usable path component.
    pub const INVALID_PATH_COMPONENT: &str = "Invalid path component";

    /// The worker pool could not be started.
    pub const THREAD_POOL: &str = "Cannot start worker threads";
}
