//! End-to-end conversion pipeline and aggregate reporting.
//!
//! Files are processed independently and strictly one at a time; no state
//! crosses file boundaries except the append-only aggregate report. Every
//! per-file failure degrades to "this file unchanged" and the walk
//! continues; only invalid preferences abort a run, and that happens
//! before any file is touched.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::core::config::NamingPreferences;
use crate::core::discovery::discover_python_files;
use crate::core::errors::Result;
use crate::core::policy::NamingPolicy;
use crate::core::rewrite::RewriteEngine;

/// Aggregate results of a directory conversion run.
///
/// Consumed by the caller for display only; the map merge is
/// last-write-wins across files.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ConversionReport {
    /// Number of files whose content changed
    pub files_processed: usize,
    /// Total distinct names converted across all changed files
    pub total_conversions: usize,
    /// Number of files skipped because rewriting would break their syntax
    pub files_skipped_syntax: usize,
    /// Sample old -> new mapping accumulated across the run
    pub conversions: BTreeMap<String, String>,
}

impl ConversionReport {
    /// Fold one file's outcome into the aggregate.
    fn absorb(&mut self, outcome: crate::core::rewrite::FileOutcome) {
        if outcome.skipped_syntax_break {
            self.files_skipped_syntax += 1;
            return;
        }
        if outcome.changed {
            self.files_processed += 1;
            self.total_conversions += outcome.conversions;
            self.conversions.extend(outcome.renames);
        }
    }
}

/// Drives discovery, policy, and rewriting over a directory tree.
pub struct ConversionPipeline {
    engine: RewriteEngine,
}

impl ConversionPipeline {
    /// Create a pipeline from immutable preferences.
    pub fn new(preferences: NamingPreferences) -> Result<Self> {
        Ok(Self {
            engine: RewriteEngine::new(NamingPolicy::new(preferences))?,
        })
    }

    /// Report what would change without writing any file.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.engine = self.engine.with_dry_run(dry_run);
        self
    }

    /// Convert every Python file under `root` (or a single file).
    ///
    /// Unreadable and unparseable files contribute zero conversions and the
    /// walk continues past them.
    pub fn convert_directory(&mut self, root: impl AsRef<Path>) -> Result<ConversionReport> {
        let root = root.as_ref();
        let files = discover_python_files(root)?;
        info!("converting {} Python files under {}", files.len(), root.display());

        let mut report = ConversionReport::default();

        for path in &files {
            match self.engine.rewrite_file(path) {
                Ok(outcome) => report.absorb(outcome),
                Err(e) => {
                    // Per-file I/O and validation failures are not fatal
                    warn!("skipped {}: {e}", path.display());
                }
            }
        }

        info!(
            "conversion complete: {} names in {} files ({} skipped for syntax)",
            report.total_conversions, report.files_processed, report.files_skipped_syntax
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_convert_directory_aggregates() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("one.py"), "def doWork():\n    pass\n").unwrap();
        fs::write(temp.path().join("two.py"), "def makeThing():\n    pass\n").unwrap();
        fs::write(temp.path().join("clean.py"), "def already_fine():\n    pass\n").unwrap();

        let prefs = NamingPreferences::preset("python_standard").unwrap();
        let mut pipeline = ConversionPipeline::new(prefs).unwrap();
        let report = pipeline.convert_directory(temp.path()).unwrap();

        assert_eq!(report.files_processed, 2);
        assert_eq!(report.total_conversions, 2);
        assert_eq!(report.conversions.get("doWork").map(String::as_str), Some("do_work"));
        assert_eq!(
            report.conversions.get("makeThing").map(String::as_str),
            Some("make_thing")
        );
    }

    #[test]
    fn test_unreadable_entries_do_not_abort_run() {
        let temp = TempDir::new().unwrap();
        // A binary blob with a .py extension is rejected by the reader
        fs::write(temp.path().join("blob.py"), b"\x00\x01\x02\x00\x00\x00\x00").unwrap();
        fs::write(temp.path().join("ok.py"), "def doWork():\n    pass\n").unwrap();

        let prefs = NamingPreferences::preset("python_standard").unwrap();
        let mut pipeline = ConversionPipeline::new(prefs).unwrap();
        let report = pipeline.convert_directory(temp.path()).unwrap();

        assert_eq!(report.files_processed, 1);
        assert_eq!(report.total_conversions, 1);
    }
}
