pub mod cli;
pub mod commands;
pub mod domain;
pub mod error;
pub mod logging;
pub mod services;

pub use error::{FailureKind, ToolError};
