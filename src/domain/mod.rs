//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — cleanup reports, text-tool reports, JSON envelopes.
//! - `constants.rs` — stable defaults (scan dirs, stale threshold, prompt prefix).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/process side effects.
//!
//! ## Output contract
//! `CleanupOutcome` serializes to the `success`/`results` layout pinned by
//! `docs/contracts/{action-report,cleanup-summary}.schema.json`, not the
//! `ok`/`data` envelope the text tools use. Field changes go through those
//! schemas.

pub mod constants;
pub mod models;
