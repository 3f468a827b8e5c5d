//! Command handler layer.
//!
//! ## Files
//! - `cleanup.rs` — `podkit-cleanup` orchestration and status lines.
//! - `text.rs` — `podkit-strip-word` / `podkit-add-text`.
//!
//! ## Principles
//! - Binaries parse args and call in here.
//! - Delegate business logic to `services/*`.
//! - Keep output wording and JSON shape stable.

pub mod cleanup;
pub mod text;

pub use cleanup::{handle_cleanup, report_fatal};
pub use text::{handle_add_text, handle_strip_word};
