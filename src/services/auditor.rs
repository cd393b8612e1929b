use crate::domain::constants::{MODERN_STYLE_MARKER, REFERENCE_PAGES};
use crate::domain::models::{AuditReport, FileError, PageRecord, PageStatus, Subtree};
use crate::services::walk;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum AuditError {
    #[error("site root not found or not a directory: {0}")]
    RootNotFound(PathBuf),
}

/// Classification order matters: the marker wins over the reference list.
pub fn classify(path: &Path, content: &str) -> PageStatus {
    if content.contains(MODERN_STYLE_MARKER) {
        return PageStatus::AlreadyUpdated;
    }
    let text = path.to_string_lossy().replace('\\', "/");
    if REFERENCE_PAGES.iter().any(|r| text.ends_with(*r)) {
        return PageStatus::Reference;
    }
    PageStatus::NeedsUpdate
}

fn relative_display(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Scans `admin/` and `shop/` under `root` and classifies every index page.
///
/// Read-only. Unreadable pages are recorded under `errors` and are never
/// candidates.
pub fn audit_site(root: &Path) -> anyhow::Result<AuditReport> {
    if !root.is_dir() {
        return Err(AuditError::RootNotFound(root.to_path_buf()).into());
    }

    let mut report = AuditReport {
        root: root.display().to_string(),
        ..AuditReport::default()
    };

    for subtree in Subtree::all() {
        let subtree_root = root.join(subtree.dir_name());
        if !subtree_root.is_dir() {
            tracing::info!(subtree = %subtree, "subtree missing, nothing to audit");
            continue;
        }
        for entry in walk::subtree_index_pages(&subtree_root, subtree.dir_name()) {
            let page = match entry {
                Ok(p) => p,
                Err(err) => {
                    let path = err
                        .path()
                        .map(|p| relative_display(root, p))
                        .unwrap_or_else(|| subtree.dir_name().to_string());
                    tracing::warn!(path = %path, error = %err, "skipping unreadable directory entry");
                    report.errors.push(FileError {
                        path,
                        error: err.to_string(),
                    });
                    continue;
                }
            };
            let rel = relative_display(root, &page);
            let content = match std::fs::read_to_string(&page) {
                Ok(c) => c,
                Err(err) => {
                    tracing::warn!(path = %rel, error = %err, "page unreadable");
                    report.errors.push(FileError {
                        path: rel,
                        error: err.to_string(),
                    });
                    continue;
                }
            };
            let status = classify(&page, &content);
            tracing::debug!(path = %rel, ?status, "classified page");
            if status.is_candidate() {
                match subtree {
                    Subtree::Admin => report.admin.push(rel.clone()),
                    Subtree::Shop => report.shop.push(rel.clone()),
                }
            }
            report.pages.push(PageRecord {
                subtree,
                path: rel,
                status,
            });
        }
    }

    report.total = report.admin.len() + report.shop.len();
    Ok(report)
}
