//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `reclaimer.rs` — runs cleanup actions and aggregates their reports.
//! - `gpu.rs` — GPU capability detection + cache release.
//! - `heap.rs` — allocator trim pass.
//! - `sweep.rs` — stale image/temp file deletion.
//! - `model_reset.rs` — pluggable model unload hook.
//! - `text_edit.rs` — strip-word and prompt annotation rewrites.
//! - `config.rs` — `cleanup.toml` loading.
//! - `output.rs` — JSON/text output helpers.

pub mod config;
pub mod gpu;
pub mod heap;
pub mod model_reset;
pub mod output;
pub mod reclaimer;
pub mod sweep;
pub mod text_edit;
