use crate::domain::models::FileOutcome;
use crate::services::output::{print_json, rule};
use crate::services::rewriter::{bump_tree, VersionRewriter};
use std::path::{Path, PathBuf};

/// Directory holding the running executable; the default scan root.
fn executable_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    match exe.parent() {
        Some(dir) => Ok(dir.to_path_buf()),
        None => anyhow::bail!("cannot resolve directory of {}", exe.display()),
    }
}

fn progress_line(outcome: &FileOutcome) -> Option<String> {
    match &outcome.result {
        Ok(0) => None,
        Ok(n) => Some(format!(
            "✓ {}: {} version(s) updated",
            outcome.path.display(),
            n
        )),
        Err(e) => Some(format!(
            "Error processing {}: {}",
            outcome.path.display(),
            e
        )),
    }
}

pub fn handle_bump(json: bool, version: &str, root: Option<&Path>) -> anyhow::Result<()> {
    let root = match root {
        Some(r) => r.to_path_buf(),
        None => executable_dir()?,
    };
    let rewriter = VersionRewriter::new(version)?;

    if json {
        let report = bump_tree(&root, &rewriter, |_| {});
        return print_json(&report);
    }

    println!("Updating all version parameters to v={}...", rewriter.version());
    println!("Scanning directory: {}", root.display());
    println!("{}", rule('-'));

    let report = bump_tree(&root, &rewriter, |outcome| {
        if let Some(line) = progress_line(outcome) {
            println!("{}", line);
        }
    });

    for e in &report.scan_errors {
        println!("Error scanning {}: {}", e.path, e.error);
    }

    println!("{}", rule('-'));
    println!("✓ Complete!");
    println!("  Files updated: {}", report.files_updated);
    println!("  Total replacements: {}", report.total_replacements);
    println!("  New version: v={}", report.version);
    Ok(())
}
