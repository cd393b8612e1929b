use crate::domain::constants::{HTML_EXTENSION, INDEX_PAGE, PRUNED_DIRS};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

fn is_pruned(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| PRUNED_DIRS.contains(&name))
            .unwrap_or(false)
}

fn is_html(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry
            .file_name()
            .to_string_lossy()
            .ends_with(HTML_EXTENSION)
}

/// Regular `.html` files under `root` in file-name order.
///
/// Pruned directories are filtered before descent, so nothing below them is
/// ever visited. Walk errors (unreadable directories, a missing root) are
/// yielded to the caller instead of ending the walk.
pub fn html_files(root: &Path) -> impl Iterator<Item = walkdir::Result<PathBuf>> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_pruned(e))
        .filter_map(|entry| match entry {
            Ok(e) if is_html(&e) => Some(Ok(e.into_path())),
            Ok(_) => None,
            Err(err) => Some(Err(err)),
        })
}

/// `index.html` pages at least one directory below `subtree_root`.
///
/// Pages whose parent directory carries the subtree's own name are skipped.
pub fn subtree_index_pages(
    subtree_root: &Path,
    subtree_name: &str,
) -> impl Iterator<Item = walkdir::Result<PathBuf>> {
    let subtree_name = subtree_name.to_string();
    WalkDir::new(subtree_root)
        .min_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(e) if e.file_type().is_file() && e.file_name() == INDEX_PAGE => {
                let parent_is_subtree = e
                    .path()
                    .parent()
                    .and_then(|p| p.file_name())
                    .map(|n| n == subtree_name.as_str())
                    .unwrap_or(false);
                (!parent_is_subtree).then(|| Ok(e.into_path()))
            }
            Ok(_) => None,
            Err(err) => Some(Err(err)),
        })
}
