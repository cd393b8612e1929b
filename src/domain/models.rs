use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Subtree {
    Admin,
    Shop,
}

impl Subtree {
    pub fn dir_name(self) -> &'static str {
        match self {
            Subtree::Admin => "admin",
            Subtree::Shop => "shop",
        }
    }

    pub fn all() -> [Subtree; 2] {
        [Subtree::Admin, Subtree::Shop]
    }
}

impl fmt::Display for Subtree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PageStatus {
    AlreadyUpdated,
    Reference,
    NeedsUpdate,
}

impl PageStatus {
    pub fn is_candidate(self) -> bool {
        matches!(self, PageStatus::NeedsUpdate)
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct PageRecord {
    pub subtree: Subtree,
    /// Path relative to the audited site root.
    pub path: String,
    pub status: PageStatus,
}

#[derive(Debug, Serialize, Clone)]
pub struct FileError {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize, Default)]
pub struct AuditReport {
    pub root: String,
    pub pages: Vec<PageRecord>,
    pub admin: Vec<String>,
    pub shop: Vec<String>,
    pub errors: Vec<FileError>,
    pub total: usize,
}

impl AuditReport {
    pub fn candidates(&self, subtree: Subtree) -> &[String] {
        match subtree {
            Subtree::Admin => &self.admin,
            Subtree::Shop => &self.shop,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum RewriteError {
    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),
    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),
}

/// Result of processing one `.html` file during a version bump.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<usize, RewriteError>,
}

#[derive(Debug, Serialize, Clone)]
pub struct UpdatedFile {
    pub path: String,
    pub replacements: usize,
}

#[derive(Debug, Serialize, Default)]
pub struct BumpReport {
    pub root: String,
    pub version: String,
    pub files: Vec<UpdatedFile>,
    /// Files that could not be read or written; counted as zero replacements.
    pub errors: Vec<FileError>,
    /// Directory entries the walk could not enter.
    pub scan_errors: Vec<FileError>,
    pub files_updated: usize,
    pub total_replacements: usize,
}

impl BumpReport {
    pub fn new(root: String, version: String) -> Self {
        Self {
            root,
            version,
            ..Self::default()
        }
    }

    /// Folds one file's outcome into the running totals.
    pub fn record(&mut self, outcome: &FileOutcome) {
        let path = outcome.path.display().to_string();
        match &outcome.result {
            Ok(0) => {}
            Ok(n) => {
                self.files_updated += 1;
                self.total_replacements += n;
                self.files.push(UpdatedFile {
                    path,
                    replacements: *n,
                });
            }
            Err(e) => self.errors.push(FileError {
                path,
                error: e.to_string(),
            }),
        }
    }
}
