use crate::cli::{AddTextCli, StripWordCli};
use crate::error::ToolError;
use crate::services::output::{print_error, print_one};
use crate::services::text_edit::{add_text_to_prompts, strip_word};

/// Failures are printed, never turned into a non-zero exit status.
pub fn handle_strip_word(cli: &StripWordCli) -> anyhow::Result<()> {
    match strip_word(&cli.file, &cli.word) {
        Ok(report) => print_one(cli.json, report, |r| {
            format!(
                "All instances of \"{}\" have been removed from {}.",
                r.word, r.path
            )
        }),
        Err(e) => {
            tracing::debug!(error = ?e, "strip-word failed");
            print_error(cli.json, &e, |e| match e {
                ToolError::MissingFile { path } => {
                    format!("Error: The file '{}' was not found.", path.display())
                }
                other => format!("An error occurred: {}", other),
            })
        }
    }
}

pub fn handle_add_text(cli: &AddTextCli) -> anyhow::Result<()> {
    match add_text_to_prompts(&cli.file, &cli.text_to_add) {
        Ok(report) => print_one(cli.json, report, |r| {
            format!("Successfully modified file: {}", r.path)
        }),
        Err(e) => {
            tracing::debug!(error = ?e, "add-text failed");
            print_error(cli.json, &e, |e| match e {
                ToolError::MissingFile { path } => {
                    format!("Error: File not found at {}", path.display())
                }
                other => format!("An error occurred: {}", other),
            })
        }
    }
}
