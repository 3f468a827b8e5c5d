use crate::domain::models::{ErrorBody, JsonErr, JsonOut};
use crate::error::ToolError;
use serde::Serialize;

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Failure counterpart of [`print_one`]. Text mode writes to stderr.
pub fn print_error(json: bool, err: &ToolError, line: impl Fn(&ToolError) -> String) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonErr {
                ok: false,
                error: ErrorBody {
                    code: err.code().to_string(),
                    message: err.to_string(),
                },
            })?
        );
    } else {
        eprintln!("{}", line(err));
    }
    Ok(())
}

/// Pretty JSON document without the `ok`/`data` envelope.
pub fn print_document<T: Serialize>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}
