//! Python source file discovery.
//!
//! Enumerates candidate `.py` files under a root while excluding build
//! caches, virtualenvs, and version-control metadata. Output is sorted so
//! every run visits files in the same order.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::core::errors::{NameshiftError, Result};

/// Directory artifacts that must never be descended into or rewritten.
fn default_exclude_patterns() -> Vec<String> {
    [
        "**/__pycache__/**",
        "**/.git/**",
        "**/.hg/**",
        "**/.svn/**",
        "**/.tox/**",
        "**/.venv/**",
        "**/venv/**",
        "**/.eggs/**",
        "**/*.egg-info/**",
        "**/build/**",
        "**/dist/**",
        "**/node_modules/**",
    ]
    .iter()
    .map(|p| (*p).to_string())
    .collect()
}

fn compile_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(false)
            .build()
            .map_err(|err| {
                NameshiftError::config(format!("invalid glob pattern '{pattern}': {err}"))
            })?;
        builder.add(glob);
    }

    builder
        .build()
        .map_err(|err| NameshiftError::config(format!("failed to build glob set: {err}")))
}

fn is_python_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("py"))
}

/// Discover Python source files under `root`.
///
/// `root` may also be a single `.py` file, in which case it is returned
/// as-is. Excluded directories (`__pycache__`, VCS metadata, virtualenvs,
/// `build`/`dist`) are filtered both during the walk and by glob match, so
/// files inside them are never produced.
pub fn discover_python_files(root: &Path) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        if is_python_file(root) {
            return Ok(vec![root.to_path_buf()]);
        }
        return Err(NameshiftError::validation(format!(
            "not a Python source file: {}",
            root.display()
        )));
    }

    if !root.is_dir() {
        return Err(NameshiftError::validation(format!(
            "path does not exist: {}",
            root.display()
        )));
    }

    let exclude = compile_globset(&default_exclude_patterns())?;

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(false)
        .build();

    let mut unique = HashSet::new();
    let mut collected = Vec::new();

    for entry in walker {
        let dir_entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("failed to walk directory: {err}");
                continue;
            }
        };

        let is_file = dir_entry.file_type().is_some_and(|ft| ft.is_file());
        if !is_file {
            continue;
        }

        let path = dir_entry.path();
        if !is_python_file(path) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if exclude.is_match(relative) || exclude.is_match(path) {
            debug!("excluded from discovery: {}", path.display());
            continue;
        }

        if unique.insert(path.to_path_buf()) {
            collected.push(path.to_path_buf());
        }
    }

    collected.sort();
    debug!("discovered {} Python files under {}", collected.len(), root.display());
    Ok(collected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discovers_nested_python_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.py"), "x = 1\n").unwrap();
        fs::create_dir_all(temp.path().join("pkg/sub")).unwrap();
        fs::write(temp.path().join("pkg/sub/b.py"), "y = 2\n").unwrap();
        fs::write(temp.path().join("pkg/readme.md"), "not python").unwrap();

        let files = discover_python_files(temp.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| is_python_file(f)));
    }

    #[test]
    fn test_excludes_artifact_directories() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("keep.py"), "x = 1\n").unwrap();
        for dir in ["__pycache__", ".git", "build", ".venv"] {
            fs::create_dir_all(temp.path().join(dir)).unwrap();
            fs::write(temp.path().join(dir).join("skip.py"), "someVar = 1\n").unwrap();
        }

        let files = discover_python_files(temp.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.py"));
    }

    #[test]
    fn test_single_file_root() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("only.py");
        fs::write(&file, "x = 1\n").unwrap();

        let files = discover_python_files(&file).unwrap();
        assert_eq!(files, vec![file]);

        let other = temp.path().join("notes.txt");
        fs::write(&other, "hi").unwrap();
        assert!(discover_python_files(&other).is_err());
    }

    #[test]
    fn test_missing_root_is_an_error() {
        assert!(discover_python_files(Path::new("/no/such/dir")).is_err());
    }

    #[test]
    fn test_output_is_sorted() {
        let temp = TempDir::new().unwrap();
        for name in ["zeta.py", "alpha.py", "mid.py"] {
            fs::write(temp.path().join(name), "x = 1\n").unwrap();
        }

        let files = discover_python_files(temp.path()).unwrap();
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }
}
