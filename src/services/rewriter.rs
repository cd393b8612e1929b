use crate::domain::constants::VERSION_PARAM_PATTERN;
use crate::domain::models::{BumpReport, FileError, FileOutcome, RewriteError};
use crate::services::{fsio, walk};
use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::path::Path;

/// Rewrites every `?v=<digits>` query parameter to one fixed version.
pub struct VersionRewriter {
    pattern: Regex,
    version: String,
    replacement: String,
}

impl VersionRewriter {
    pub fn new(version: &str) -> anyhow::Result<Self> {
        Ok(Self {
            pattern: Regex::new(VERSION_PARAM_PATTERN)?,
            version: version.to_string(),
            replacement: format!("?v={}", version),
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Substitutes all matches and returns the new text with the match count.
    ///
    /// A match already equal to the target still counts.
    pub fn rewrite_text<'t>(&self, text: &'t str) -> (Cow<'t, str>, usize) {
        let count = self.pattern.find_iter(text).count();
        if count == 0 {
            return (Cow::Borrowed(text), 0);
        }
        let out = self
            .pattern
            .replace_all(text, NoExpand(self.replacement.as_str()));
        (out, count)
    }

    /// Read-modify-write for one file. Nothing is written when no match is found.
    pub fn rewrite_file(&self, path: &Path) -> Result<usize, RewriteError> {
        let content = std::fs::read_to_string(path).map_err(RewriteError::Read)?;
        let (updated, count) = self.rewrite_text(&content);
        if count == 0 {
            return Ok(0);
        }
        fsio::write_atomic(path, &updated).map_err(RewriteError::Write)?;
        Ok(count)
    }
}

/// Walks `root` and rewrites each `.html` file in turn.
///
/// `on_outcome` sees every visited file as soon as it is processed. Per-file
/// failures and walk errors land in the report; they never stop the run.
pub fn bump_tree(
    root: &Path,
    rewriter: &VersionRewriter,
    mut on_outcome: impl FnMut(&FileOutcome),
) -> BumpReport {
    let mut report = BumpReport::new(
        root.display().to_string(),
        rewriter.version().to_string(),
    );
    for entry in walk::html_files(root) {
        let path = match entry {
            Ok(p) => p,
            Err(err) => {
                let path = err
                    .path()
                    .unwrap_or(root)
                    .display()
                    .to_string();
                tracing::warn!(path = %path, error = %err, "skipping unreadable directory entry");
                report.scan_errors.push(FileError {
                    path,
                    error: err.to_string(),
                });
                continue;
            }
        };
        let result = rewriter.rewrite_file(&path);
        match &result {
            Ok(0) => tracing::debug!(path = %path.display(), "no version parameters"),
            Ok(n) => tracing::info!(path = %path.display(), replacements = n, "rewrote file"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "file skipped"),
        }
        let outcome = FileOutcome { path, result };
        report.record(&outcome);
        on_outcome(&outcome);
    }
    report
}
