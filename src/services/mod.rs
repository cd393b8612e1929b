//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `auditor.rs` — index page discovery and stylesheet classification (read-only).
//! - `rewriter.rs` — `?v=N` substitution per file and across a tree.
//! - `walk.rs` — directory traversal with pruning and page discovery.
//! - `fsio.rs` — atomic in-place file replacement.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Per-file failures are values in the report, not early returns.
//! - Side effects stay in `rewriter.rs` and `fsio.rs`.
//! - Keep command handlers thin; delegate to services.

pub mod auditor;
pub mod fsio;
pub mod output;
pub mod rewriter;
pub mod walk;
