use crate::domain::models::CleanupConfig;
use anyhow::Context;
use std::path::{Path, PathBuf};

pub fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/podkit/cleanup.toml"))
}

/// An explicit path must exist; the default path is optional.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<CleanupConfig> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => {
                tracing::debug!("no cleanup config found, using defaults");
                return Ok(CleanupConfig::default());
            }
        },
    };
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: CleanupConfig = toml::from_str(&raw)
        .with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded cleanup config");
    Ok(config)
}
