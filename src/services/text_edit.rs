//! In-place rewrites of prompt files.
//!
//! Both helpers read the whole file, transform it in memory and write it back
//! over the same path. The write is not atomic.

use crate::domain::constants::PROMPT_PREFIX;
use crate::domain::models::{AnnotateReport, StripReport};
use crate::error::ToolError;
use std::path::Path;

/// One left-to-right pass over non-overlapping matches. Text spliced together
/// by a removal is left alone (`"aabb"` minus `"ab"` is `"ab"`).
pub fn strip_text(content: &str, word: &str) -> (String, usize) {
    if word.is_empty() {
        return (content.to_string(), 0);
    }
    let removed = content.matches(word).count();
    (content.replace(word, ""), removed)
}

pub fn strip_word(path: &Path, word: &str) -> Result<StripReport, ToolError> {
    let content = std::fs::read_to_string(path).map_err(|e| ToolError::io(path, e))?;
    let (updated, removed) = strip_text(&content, word);
    std::fs::write(path, updated).map_err(|e| ToolError::io(path, e))?;
    tracing::debug!(path = %path.display(), removed, "stripped word");
    Ok(StripReport {
        path: path.to_string_lossy().to_string(),
        word: word.to_string(),
        removed,
    })
}

/// Returns the rewritten text, the number of annotated lines and the total
/// line count. Lines that do not start with the prompt prefix are copied
/// byte for byte, terminator included.
pub fn annotate_text(content: &str, suffix: &str) -> (String, usize, usize) {
    let mut out = String::with_capacity(content.len());
    let mut annotated = 0;
    let mut total = 0;
    for line in content.split_inclusive('\n') {
        total += 1;
        let trimmed = line.trim();
        if trimmed.starts_with(PROMPT_PREFIX) {
            out.push_str(trimmed);
            out.push(' ');
            out.push_str(suffix);
            out.push('\n');
            annotated += 1;
        } else {
            out.push_str(line);
        }
    }
    (out, annotated, total)
}

pub fn add_text_to_prompts(path: &Path, suffix: &str) -> Result<AnnotateReport, ToolError> {
    let content = std::fs::read_to_string(path).map_err(|e| ToolError::io(path, e))?;
    let (updated, annotated_lines, total_lines) = annotate_text(&content, suffix);
    std::fs::write(path, updated).map_err(|e| ToolError::io(path, e))?;
    tracing::debug!(path = %path.display(), annotated_lines, "annotated prompts");
    Ok(AnnotateReport {
        path: path.to_string_lossy().to_string(),
        suffix: suffix.to_string(),
        annotated_lines,
        total_lines,
    })
}

#[cfg(test)]
mod tests {
    use super::{add_text_to_prompts, annotate_text, strip_text, strip_word};
    use crate::error::FailureKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn strip_keeps_surrounding_spaces() {
        let (out, removed) = strip_text("a ropregnant cat ropregnant dog", "ropregnant");
        assert_eq!(out, "a  cat  dog");
        assert_eq!(removed, 2);
    }

    #[test]
    fn strip_is_case_sensitive_and_ignores_word_boundaries() {
        let (out, removed) = strip_text("Cat cat concat", "cat");
        assert_eq!(out, "Cat  con");
        assert_eq!(removed, 2);
    }

    #[test]
    fn strip_is_a_single_pass() {
        let (out, removed) = strip_text("aabb", "ab");
        assert_eq!(out, "ab");
        assert_eq!(removed, 1);

        let (out, removed) = strip_text("xaabbx", "ab");
        assert_eq!(out, "xabx");
        assert_eq!(removed, 1);
    }

    #[test]
    fn strip_handles_deeply_nested_input() {
        let n = 20_000;
        let input = format!("{}{}", "a".repeat(n), "b".repeat(n));
        let (out, removed) = strip_text(&input, "ab");
        assert_eq!(removed, 1);
        assert_eq!(out.len(), 2 * n - 2);
    }

    #[test]
    fn strip_with_empty_word_is_identity() {
        let (out, removed) = strip_text("unchanged", "");
        assert_eq!(out, "unchanged");
        assert_eq!(removed, 0);
    }

    #[test]
    fn annotate_trims_matching_lines() {
        let (out, annotated, total) = annotate_text("  prompt: a cat\n", "high quality");
        assert_eq!(out, "prompt: a cat high quality\n");
        assert_eq!(annotated, 1);
        assert_eq!(total, 1);
    }

    #[test]
    fn annotate_passes_other_lines_through() {
        let input = "name: Ada  \r\n\n  prompts are fun\nnegative: prompt\nprompt: last";
        let (out, annotated, total) = annotate_text(input, "8k");
        assert_eq!(
            out,
            "name: Ada  \r\n\nprompts are fun 8k\nnegative: prompt\nprompt: last 8k\n"
        );
        assert_eq!(annotated, 2);
        assert_eq!(total, 5);
    }

    #[test]
    fn file_helpers_report_missing_files() {
        let tmp = TempDir::new().expect("temp dir");
        let missing = tmp.path().join("characters.txt");

        let err = strip_word(&missing, "x").unwrap_err();
        assert_eq!(err.kind(), FailureKind::MissingFile);
        let err = add_text_to_prompts(&missing, "x").unwrap_err();
        assert_eq!(err.kind(), FailureKind::MissingFile);
        assert!(!missing.exists());
    }

    #[test]
    fn file_helpers_rewrite_in_place() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("characters.txt");
        fs::write(&path, "prompt: a ropregnant cat\nseed: 1\n").expect("write fixture");

        let stripped = strip_word(&path, "ropregnant ").expect("strip");
        assert_eq!(stripped.removed, 1);
        let annotated = add_text_to_prompts(&path, "masterpiece").expect("annotate");
        assert_eq!(annotated.annotated_lines, 1);
        assert_eq!(annotated.total_lines, 2);

        assert_eq!(
            fs::read_to_string(&path).expect("read back"),
            "prompt: a cat masterpiece\nseed: 1\n"
        );
    }

    #[test]
    fn invalid_utf8_is_a_generic_failure() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("binary.txt");
        fs::write(&path, [0xff, 0xfe, 0x00]).expect("write bytes");
        let err = strip_word(&path, "x").unwrap_err();
        assert_eq!(err.kind(), FailureKind::Other);
        assert_eq!(fs::read(&path).expect("read back"), vec![0xff, 0xfe, 0x00]);
    }
}
