use std::io::Write as _;
use std::path::{Path, PathBuf};

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("file");
    path.with_file_name(format!(".{}.tmp.{}", name, std::process::id()))
}

/// Replaces `path` with `contents` via a sibling temp file and a rename.
///
/// Readers see either the old file or the new one, never a truncated mix.
/// The original file's permissions carry over. A target the caller could not
/// write in place is refused before anything is staged.
pub fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let permissions = std::fs::metadata(path)?.permissions();
    if permissions.readonly() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            format!("{} is read-only", path.display()),
        ));
    }
    std::fs::OpenOptions::new().write(true).open(path)?;
    let tmp = temp_sibling(path);
    let result = (|| {
        let mut f = std::fs::File::create(&tmp)?;
        f.write_all(contents.as_bytes())?;
        f.sync_all()?;
        std::fs::set_permissions(&tmp, permissions)?;
        std::fs::rename(&tmp, path)
    })();
    if result.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }
    result
}
