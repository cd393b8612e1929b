//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — page classification, per-file outcomes, report structs.
//! - `constants.rs` — fixed markers, reference pages, pruned directories, defaults.
//!
//! ## Rule of thumb
//! Domain types are data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Report structs are the `--json` output schema. Keep them in sync with
//! `docs/contracts/*.schema.json`.

pub mod constants;
pub mod models;
