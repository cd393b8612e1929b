use crate::domain::models::{AuditReport, PageStatus, Subtree};
use crate::services::auditor::audit_site;
use crate::services::output::{print_json, rule};
use std::path::Path;

pub fn handle_audit(json: bool, root: &Path) -> anyhow::Result<()> {
    let report = audit_site(root)?;
    tracing::info!(
        root = %report.root,
        pages = report.pages.len(),
        candidates = report.total,
        "audit finished"
    );
    if json {
        return print_json(&report);
    }
    print_text(&report);
    Ok(())
}

fn print_text(report: &AuditReport) {
    println!("\n{}", rule('='));
    println!("ANALYZING PAGES");
    println!("{}", rule('='));

    for subtree in Subtree::all() {
        println!("\n{} PAGES:", subtree.dir_name().to_uppercase());
        for page in report.pages.iter().filter(|p| p.subtree == subtree) {
            match page.status {
                PageStatus::AlreadyUpdated => println!("✓ {} already updated", page.path),
                PageStatus::Reference => {
                    println!("⊗ {} is a reference page, skipping", page.path)
                }
                PageStatus::NeedsUpdate => {
                    println!("⚠ {} needs updating (has old styles)", page.path)
                }
            }
        }
    }

    if !report.errors.is_empty() {
        println!("\nUNREADABLE:");
        for e in &report.errors {
            println!("✗ {}: {}", e.path, e.error);
        }
    }

    println!("\n{}", rule('='));
    println!("SUMMARY");
    println!("{}", rule('='));
    println!("\nAdmin pages that need updating: {}", report.admin.len());
    println!("Shop pages that need updating: {}", report.shop.len());
    println!("\nTotal pages to update: {}", report.total);

    for subtree in Subtree::all() {
        let candidates = report.candidates(subtree);
        if candidates.is_empty() {
            continue;
        }
        let label = match subtree {
            Subtree::Admin => "Admin",
            Subtree::Shop => "Shop",
        };
        println!("\n{} pages:", label);
        for path in candidates {
            println!("  - {}", path);
        }
    }

    println!("\n{}", rule('='));
    println!("\nNOTE: This script identifies pages that need updating.");
    println!("Each page should be manually updated to maintain its functionality");
    println!("while applying the new Tailwind CSS design style.");
    println!("{}", rule('='));
}
