use crate::cli::CleanupMode;
use crate::domain::models::{
    ActionReport, CleanupOutcome, CleanupResults, CleanupSummary, FilesConfig,
};
use crate::services::gpu::{clear_gpu_memory, GpuCapability};
use crate::services::heap::reclaim_heap;
use crate::services::model_reset::{ModelReset, NoopReset};
use crate::services::sweep::sweep_stale_files;
use std::time::SystemTime;

/// Runs the cleanup actions. Every action is self-contained: a failure lands
/// in its own report and never stops the ones after it.
pub struct Reclaimer {
    gpu: GpuCapability,
    files: FilesConfig,
    models: Box<dyn ModelReset>,
}

impl Reclaimer {
    pub fn new(gpu: GpuCapability, files: FilesConfig) -> Self {
        Reclaimer {
            gpu,
            files,
            models: Box::new(NoopReset),
        }
    }

    pub fn with_model_reset(mut self, models: Box<dyn ModelReset>) -> Self {
        self.models = models;
        self
    }

    pub fn gpu(&self) -> ActionReport {
        ActionReport::from_result(clear_gpu_memory(&self.gpu))
    }

    pub fn memory(&self) -> ActionReport {
        ActionReport::from_result(reclaim_heap())
    }

    pub fn files(&self) -> ActionReport {
        ActionReport::from_result(Ok(sweep_stale_files(&self.files, SystemTime::now())))
    }

    pub fn models(&self) -> ActionReport {
        ActionReport::from_result(self.models.reset())
    }

    pub fn all(&self) -> CleanupSummary {
        CleanupSummary::new(CleanupResults {
            gpu_cleanup: self.gpu(),
            memory_cleanup: self.memory(),
            temp_file_cleanup: self.files(),
            model_reset: self.models(),
        })
    }

    pub fn run(&self, mode: CleanupMode) -> CleanupOutcome {
        match mode {
            CleanupMode::Gpu => CleanupOutcome::Single(self.gpu()),
            CleanupMode::Memory => CleanupOutcome::Single(self.memory()),
            CleanupMode::Files => CleanupOutcome::Single(self.files()),
            CleanupMode::Models => CleanupOutcome::Single(self.models()),
            CleanupMode::All => CleanupOutcome::All(self.all()),
        }
    }
}
