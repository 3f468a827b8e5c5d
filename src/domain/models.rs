use crate::domain::constants::{
    DEFAULT_NVIDIA_SMI, DEFAULT_SCAN_DIRS, STALE_AFTER_SECS, SWEEP_EXTENSIONS,
};
use crate::error::{FailureKind, ToolError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct GpuStats {
    pub backend: String,
    pub device_count: usize,
    pub memory_allocated_mb: f64,
    pub memory_reserved_mb: f64,
}

/// `collected_objects` keeps the field name existing callers parse; it holds
/// the number of heap bytes handed back to the OS by the trim pass.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct HeapStats {
    pub collected_objects: u64,
    pub heap_before_bytes: u64,
    pub heap_after_bytes: u64,
}

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct SweepStats {
    pub cleaned_files: usize,
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ResetNote {
    pub message: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Failure {
    pub error: String,
    pub kind: FailureKind,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ActionDetail {
    Gpu(GpuStats),
    Memory(HeapStats),
    Files(SweepStats),
    Models(ResetNote),
    Failed(Failure),
}

impl From<GpuStats> for ActionDetail {
    fn from(v: GpuStats) -> Self {
        ActionDetail::Gpu(v)
    }
}

impl From<HeapStats> for ActionDetail {
    fn from(v: HeapStats) -> Self {
        ActionDetail::Memory(v)
    }
}

impl From<SweepStats> for ActionDetail {
    fn from(v: SweepStats) -> Self {
        ActionDetail::Files(v)
    }
}

impl From<ResetNote> for ActionDetail {
    fn from(v: ResetNote) -> Self {
        ActionDetail::Models(v)
    }
}

/// Outcome of one cleanup action. Serialized flat: `{"success": .., <detail fields>}`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ActionReport {
    pub success: bool,
    #[serde(flatten)]
    pub detail: ActionDetail,
}

impl ActionReport {
    pub fn from_result<T: Into<ActionDetail>>(result: Result<T, ToolError>) -> Self {
        match result {
            Ok(detail) => ActionReport {
                success: true,
                detail: detail.into(),
            },
            Err(e) => ActionReport {
                success: false,
                detail: ActionDetail::Failed(Failure {
                    error: e.to_string(),
                    kind: e.kind(),
                }),
            },
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.detail {
            ActionDetail::Failed(f) => Some(&f.error),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CleanupResults {
    pub gpu_cleanup: ActionReport,
    pub memory_cleanup: ActionReport,
    pub temp_file_cleanup: ActionReport,
    pub model_reset: ActionReport,
}

impl CleanupResults {
    pub fn iter(&self) -> impl Iterator<Item = &ActionReport> {
        [
            &self.gpu_cleanup,
            &self.memory_cleanup,
            &self.temp_file_cleanup,
            &self.model_reset,
        ]
        .into_iter()
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CleanupSummary {
    pub success: bool,
    pub results: CleanupResults,
}

impl CleanupSummary {
    pub fn new(results: CleanupResults) -> Self {
        let success = results.iter().all(|r| r.success);
        CleanupSummary { success, results }
    }
}

/// What `podkit-cleanup` prints: one action's report, or the aggregate for `--mode all`.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum CleanupOutcome {
    Single(ActionReport),
    All(CleanupSummary),
}

impl CleanupOutcome {
    pub fn success(&self) -> bool {
        match self {
            CleanupOutcome::Single(r) => r.success,
            CleanupOutcome::All(s) => s.success,
        }
    }

    pub fn reports(&self) -> Vec<&ActionReport> {
        match self {
            CleanupOutcome::Single(r) => vec![r],
            CleanupOutcome::All(s) => s.results.iter().collect(),
        }
    }
}

#[derive(Serialize)]
pub struct FatalReport {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StripReport {
    pub path: String,
    pub word: String,
    pub removed: usize,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AnnotateReport {
    pub path: String,
    pub suffix: String,
    pub annotated_lines: usize,
    pub total_lines: usize,
}

#[derive(Debug, Deserialize, Default)]
pub struct CleanupConfig {
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub gpu: GpuConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FilesConfig {
    pub scan_dirs: Vec<PathBuf>,
    pub extensions: Vec<String>,
    pub stale_after_secs: u64,
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            scan_dirs: DEFAULT_SCAN_DIRS.iter().map(PathBuf::from).collect(),
            extensions: SWEEP_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            stale_after_secs: STALE_AFTER_SECS,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GpuConfig {
    pub backend: GpuBackend,
    pub nvidia_smi: String,
}

impl Default for GpuConfig {
    fn default() -> Self {
        GpuConfig {
            backend: GpuBackend::Auto,
            nvidia_smi: DEFAULT_NVIDIA_SMI.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GpuBackend {
    Auto,
    None,
}
