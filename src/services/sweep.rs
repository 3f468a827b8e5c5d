use crate::domain::models::{FilesConfig, SweepStats};
use std::ffi::OsStr;
use std::path::Path;
use std::time::{Duration, SystemTime};
use walkdir::WalkDir;

/// Delete stale image/temp files under every configured directory.
///
/// Missing directories are skipped silently. Per-file failures are collected
/// into `errors` and never stop the sweep.
pub fn sweep_stale_files(config: &FilesConfig, now: SystemTime) -> SweepStats {
    let cutoff = now
        .checked_sub(Duration::from_secs(config.stale_after_secs))
        .unwrap_or(SystemTime::UNIX_EPOCH);
    let mut stats = SweepStats::default();

    for dir in &config.scan_dirs {
        match std::fs::metadata(dir) {
            Ok(m) if m.is_dir() => {}
            Ok(_) => continue,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(dir = %dir.display(), "scan dir missing, skipping");
                continue;
            }
            Err(e) => {
                stats
                    .errors
                    .push(format!("Failed to scan {}: {}", dir.display(), e));
                continue;
            }
        }

        for entry in WalkDir::new(dir).follow_links(false) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) if e.depth() == 0 || e.path() == Some(dir.as_path()) => {
                    stats
                        .errors
                        .push(format!("Failed to scan {}: {}", dir.display(), e));
                    break;
                }
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() || !matches_extension(entry.path(), &config.extensions)
            {
                continue;
            }
            match remove_if_stale(entry.path(), cutoff) {
                Ok(true) => {
                    tracing::debug!(path = %entry.path().display(), "deleted stale file");
                    stats.cleaned_files += 1;
                }
                Ok(false) => {}
                Err(e) => stats.errors.push(format!(
                    "Failed to delete {}: {}",
                    entry.file_name().to_string_lossy(),
                    e
                )),
            }
        }
    }

    tracing::info!(cleaned = stats.cleaned_files, "Cleaned temporary files");
    if !stats.errors.is_empty() {
        tracing::warn!(count = stats.errors.len(), "cleanup errors occurred");
    }
    stats
}

/// Suffix match on the lowercased file name, so a bare `.png` counts too.
fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(OsStr::to_str) else {
        return false;
    };
    let name = name.to_ascii_lowercase();
    extensions.iter().any(|e| {
        let ext = e.trim_start_matches('.').to_ascii_lowercase();
        !ext.is_empty() && name.ends_with(&format!(".{}", ext))
    })
}

fn remove_if_stale(path: &Path, cutoff: SystemTime) -> std::io::Result<bool> {
    let modified = match std::fs::metadata(path).and_then(|m| m.modified()) {
        Ok(t) => t,
        // gone already (overlapping scan dirs or a concurrent writer)
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if modified >= cutoff {
        return Ok(false);
    }
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
