//! Collision-safe file rewriting with the re-parse guard.
//!
//! The engine builds a per-file conversion plan, splices the replacements
//! at identifier token spans taken from the parse tree, and re-parses the
//! result. A rewrite is committed only when the rewritten text still
//! parses; otherwise every change for that file is discarded. This
//! apply-then-verify discipline is the load-bearing correctness property
//! of the whole system: a file is never left less parseable than before
//! the run.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::errors::{NameshiftError, Result};
use crate::core::file_utils::FileReader;
use crate::core::policy::NamingPolicy;
use crate::core::style;
use crate::lang::python::PythonAdapter;

/// Per-file mapping from original names to their target-style forms.
///
/// Entries are ordered by descending name length so no entry's name can be
/// corrupted as a substring of a longer one, and the order is deterministic
/// for reproducible reports. Discarded after each file's rewrite attempt.
#[derive(Debug, Default)]
pub struct ConversionPlan {
    entries: Vec<(String, String)>,
}

impl ConversionPlan {
    /// Number of planned renames.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the plan contains no renames.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The replacement for an original name, if planned.
    pub fn replacement(&self, old: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(from, _)| from == old)
            .map(|(_, to)| to.as_str())
    }

    /// All original names in the plan.
    pub fn names(&self) -> HashSet<String> {
        self.entries.iter().map(|(from, _)| from.clone()).collect()
    }

    /// The plan as an old -> new map.
    pub fn as_map(&self) -> BTreeMap<String, String> {
        self.entries.iter().cloned().collect()
    }

    /// Entries in application order (descending name length).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(from, to)| (from.as_str(), to.as_str()))
    }

    fn insert(&mut self, old: String, new: String) {
        self.entries.push((old, new));
    }

    fn finalize(&mut self) {
        self.entries
            .sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    }
}

/// Result of rewriting a single source text.
#[derive(Debug, PartialEq, Eq)]
pub enum SourceRewrite {
    /// Nothing to convert, or the file did not parse to begin with
    Unchanged,
    /// Conversions applied and the result still parses
    Rewritten {
        /// The rewritten source text
        content: String,
        /// The old -> new names that were applied
        renames: BTreeMap<String, String>,
    },
    /// Applying the plan produced text that no longer parses; all changes
    /// for the file were discarded
    WouldBreakSyntax,
}

/// Outcome of a single file's rewrite attempt.
#[derive(Debug)]
pub struct FileOutcome {
    /// Number of distinct names converted in this file
    pub conversions: usize,
    /// The old -> new names applied (empty when nothing changed)
    pub renames: BTreeMap<String, String>,
    /// The rewrite was discarded because it would break syntax
    pub skipped_syntax_break: bool,
    /// The file content changed (and was written, unless dry-run)
    pub changed: bool,
}

impl FileOutcome {
    fn unchanged() -> Self {
        Self {
            conversions: 0,
            renames: BTreeMap::new(),
            skipped_syntax_break: false,
            changed: false,
        }
    }
}

/// Rewrites one file at a time under a fixed policy.
pub struct RewriteEngine {
    adapter: PythonAdapter,
    policy: NamingPolicy,
    dry_run: bool,
}

impl RewriteEngine {
    /// Create a rewrite engine for the given policy.
    pub fn new(policy: NamingPolicy) -> Result<Self> {
        Ok(Self {
            adapter: PythonAdapter::new()?,
            policy,
            dry_run: false,
        })
    }

    /// Report what would change without writing any file.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The policy this engine applies.
    pub fn policy(&self) -> &NamingPolicy {
        &self.policy
    }

    /// Build the conversion plan for a source text.
    ///
    /// Names are deduplicated in source order, so a name's first-seen kind
    /// governs its target style for the whole file.
    pub fn build_plan(&mut self, source: &str) -> ConversionPlan {
        let occurrences = self.adapter.extract_identifiers(source);

        let mut plan = ConversionPlan::default();
        let mut seen: HashSet<&str> = HashSet::new();

        for occurrence in &occurrences {
            if !seen.insert(&occurrence.name) {
                continue;
            }

            if !self.policy.needs_conversion(&occurrence.name, occurrence.kind) {
                continue;
            }

            let target = self.policy.target_style(occurrence.kind);
            let converted = style::convert_to_style(&occurrence.name, target);
            if !converted.is_empty() && converted != occurrence.name {
                plan.insert(occurrence.name.clone(), converted);
            }
        }

        plan.finalize();
        plan
    }

    /// Rewrite a source text in memory, enforcing the re-parse guard.
    pub fn rewrite_source(&mut self, source: &str) -> Result<SourceRewrite> {
        let plan = self.build_plan(source);
        if plan.is_empty() {
            return Ok(SourceRewrite::Unchanged);
        }

        let content = self.apply_plan(source, &plan)?;
        if content == source {
            return Ok(SourceRewrite::Unchanged);
        }

        if !self.adapter.source_parses(&content) {
            return Ok(SourceRewrite::WouldBreakSyntax);
        }

        Ok(SourceRewrite::Rewritten {
            content,
            renames: plan.as_map(),
        })
    }

    /// Rewrite a file in place.
    ///
    /// On re-parse failure the file is left byte-for-byte identical to its
    /// pre-run content and the outcome reports zero conversions.
    pub fn rewrite_file(&mut self, path: &Path) -> Result<FileOutcome> {
        let source = FileReader::read_to_string(path)?;

        match self.rewrite_source(&source)? {
            SourceRewrite::Unchanged => Ok(FileOutcome::unchanged()),
            SourceRewrite::WouldBreakSyntax => {
                warn!(
                    "skipped {} - conversion would break syntax",
                    path.display()
                );
                Ok(FileOutcome {
                    skipped_syntax_break: true,
                    ..FileOutcome::unchanged()
                })
            }
            SourceRewrite::Rewritten { content, renames } => {
                if self.dry_run {
                    debug!(
                        "dry-run: would convert {} names in {}",
                        renames.len(),
                        path.display()
                    );
                } else {
                    write_atomic(path, &content)?;
                    debug!("converted {} names in {}", renames.len(), path.display());
                }

                Ok(FileOutcome {
                    conversions: renames.len(),
                    renames,
                    skipped_syntax_break: false,
                    changed: true,
                })
            }
        }
    }

    /// Splice plan replacements into the source at identifier token spans.
    ///
    /// Spans come from the parse tree, so matches inside string and comment
    /// literals are impossible by construction; spans are applied
    /// back-to-front so earlier byte offsets stay valid.
    fn apply_plan(&mut self, source: &str, plan: &ConversionPlan) -> Result<String> {
        let names = plan.names();
        let spans = self.adapter.identifier_spans(source, &names)?;

        let mut content = source.to_string();
        for (range, name) in spans.into_iter().rev() {
            let replacement = plan.replacement(&name).ok_or_else(|| {
                NameshiftError::internal(format!("span for unplanned name '{name}'"))
            })?;
            content.replace_range(range, replacement);
        }

        Ok(content)
    }
}

/// Whole-file overwrite via a sibling temp file and rename, closing the
/// partial-write window on crash.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| NameshiftError::validation(format!("invalid path: {}", path.display())))?;

    let tmp = path.with_file_name(format!(".{file_name}.nameshift-tmp"));

    fs::write(&tmp, content)
        .map_err(|e| NameshiftError::io(format!("failed to write {}", tmp.display()), e))?;

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(NameshiftError::io(
            format!("failed to replace {}", path.display()),
            e,
        ));
    }

    Ok(())
}
