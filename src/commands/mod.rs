//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `audit.rs` — `sitekeep audit`: stylesheet audit report.
//! - `bump.rs` — `sitekeep bump`: version parameter rewrite with progress lines.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod audit;
pub mod bump;

pub use audit::handle_audit;
pub use bump::handle_bump;
