use crate::cli::{CleanupCli, CleanupMode};
use crate::domain::models::{ActionDetail, CleanupOutcome, FatalReport};
use crate::services::config::load_config;
use crate::services::gpu::GpuCapability;
use crate::services::output::print_document;
use crate::services::reclaimer::Reclaimer;

pub fn handle_cleanup(cli: &CleanupCli) -> anyhow::Result<CleanupOutcome> {
    let config = load_config(cli.config.as_deref())?;

    let gpu = if matches!(cli.mode, CleanupMode::Gpu | CleanupMode::All) {
        GpuCapability::detect(&config.gpu)
    } else {
        GpuCapability::Unavailable {
            reason: "GPU cleanup not requested".to_string(),
        }
    };
    if let GpuCapability::Unavailable { reason } = &gpu {
        tracing::debug!(%reason, "GPU cleanup will be skipped");
    }

    let outcome = Reclaimer::new(gpu, config.files).run(cli.mode);

    if cli.json {
        print_document(&outcome)?;
    } else {
        for line in status_lines(&outcome) {
            println!("{}", line);
        }
    }
    Ok(outcome)
}

pub fn status_lines(outcome: &CleanupOutcome) -> Vec<String> {
    let mut lines = Vec::new();
    for report in outcome.reports() {
        match &report.detail {
            ActionDetail::Gpu(g) => lines.push(format!(
                "GPU memory cleared. Allocated: {:.1}MB, Reserved: {:.1}MB",
                g.memory_allocated_mb, g.memory_reserved_mb
            )),
            ActionDetail::Memory(h) => lines.push(format!(
                "Heap reclamation completed. Released {} heap bytes",
                h.collected_objects
            )),
            ActionDetail::Files(f) => {
                lines.push(format!("Cleaned {} temporary files", f.cleaned_files));
                if !f.errors.is_empty() {
                    lines.push(format!("{} cleanup errors occurred", f.errors.len()));
                }
            }
            ActionDetail::Models(m) => lines.push(m.message.clone()),
            ActionDetail::Failed(_) => {}
        }
    }

    if outcome.success() {
        lines.push("Cleanup completed successfully".to_string());
    } else {
        lines.push("Cleanup encountered errors".to_string());
        for report in outcome.reports() {
            if let Some(err) = report.error() {
                lines.push(format!("Error: {}", err));
            }
        }
    }
    lines
}

/// Last-resort reporting for failures outside the individual actions.
pub fn report_fatal(json: bool, err: &anyhow::Error) {
    tracing::error!(error = ?err, "cleanup failed");
    let message = format!("Cleanup script failed: {:?}", err);
    if json {
        let doc = FatalReport {
            success: false,
            error: message,
        };
        match serde_json::to_string(&doc) {
            Ok(s) => println!("{}", s),
            Err(_) => println!("{{\"success\": false}}"),
        }
    } else {
        println!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::status_lines;
    use crate::domain::models::{
        ActionReport, CleanupOutcome, CleanupResults, CleanupSummary, HeapStats, ResetNote,
        SweepStats,
    };
    use crate::error::ToolError;

    #[test]
    fn failed_actions_are_listed_after_the_verdict() {
        let summary = CleanupSummary::new(CleanupResults {
            gpu_cleanup: ActionReport::from_result::<ResetNote>(Err(ToolError::unavailable(
                "GPU runtime not available: nvidia-smi not found",
            ))),
            memory_cleanup: ActionReport::from_result(Ok(HeapStats {
                collected_objects: 4096,
                heap_before_bytes: 8192,
                heap_after_bytes: 4096,
            })),
            temp_file_cleanup: ActionReport::from_result(Ok(SweepStats {
                cleaned_files: 3,
                errors: vec!["Failed to delete a.png: denied".to_string()],
            })),
            model_reset: ActionReport::from_result(Ok(ResetNote {
                message: "Model reset attempted".to_string(),
            })),
        });

        let lines = status_lines(&CleanupOutcome::All(summary));
        assert_eq!(
            lines,
            vec![
                "Heap reclamation completed. Released 4096 heap bytes",
                "Cleaned 3 temporary files",
                "1 cleanup errors occurred",
                "Model reset attempted",
                "Cleanup encountered errors",
                "Error: GPU runtime not available: nvidia-smi not found",
            ]
        );
    }
}
