//! GPU capability detection and cache release.
//!
//! The capability is resolved once at startup and handed to the reclaimer, so
//! the cleanup path never looks for a runtime on its own.

use crate::domain::models::{GpuBackend, GpuConfig, GpuStats};
use crate::error::ToolError;
use std::process::Command;

const NVIDIA_SMI_MEMORY_QUERY: &[&str] = &[
    "--query-gpu=memory.used,memory.reserved",
    "--format=csv,noheader,nounits",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceMemory {
    pub allocated_mb: f64,
    pub reserved_mb: f64,
}

pub trait GpuRuntime {
    fn name(&self) -> &str;
    /// Drop cached-but-unused allocations owned by this process.
    fn empty_cache(&self) -> Result<(), ToolError>;
    /// Block until queued device work has completed.
    fn synchronize(&self) -> Result<(), ToolError>;
    fn memory(&self) -> Result<Vec<DeviceMemory>, ToolError>;
}

pub enum GpuCapability {
    Available(Box<dyn GpuRuntime>),
    Unavailable { reason: String },
}

impl GpuCapability {
    pub fn detect(config: &GpuConfig) -> Self {
        match config.backend {
            GpuBackend::None => GpuCapability::Unavailable {
                reason: "GPU runtime not available: disabled by configuration".to_string(),
            },
            GpuBackend::Auto => match NvidiaSmi::locate(&config.nvidia_smi) {
                Ok(rt) => GpuCapability::Available(Box::new(rt)),
                Err(reason) => GpuCapability::Unavailable { reason },
            },
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, GpuCapability::Available(_))
    }
}

/// Driver-level view through `nvidia-smi`.
///
/// podkit links no CUDA allocator, so there is never an in-process cache to
/// drop or a local stream to wait on; memory figures are device-wide.
pub struct NvidiaSmi {
    program: String,
}

impl NvidiaSmi {
    pub fn locate(program: &str) -> Result<Self, String> {
        let out = Command::new(program).arg("--list-gpus").output();
        match out {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(format!(
                "GPU runtime not available: {} not found",
                program
            )),
            Err(e) => Err(format!("GPU runtime not available: {}", e)),
            Ok(o) if !o.status.success() => Err("CUDA not available".to_string()),
            Ok(o) => {
                if String::from_utf8_lossy(&o.stdout).trim().is_empty() {
                    Err("CUDA not available".to_string())
                } else {
                    Ok(NvidiaSmi {
                        program: program.to_string(),
                    })
                }
            }
        }
    }
}

impl GpuRuntime for NvidiaSmi {
    fn name(&self) -> &str {
        "nvidia-smi"
    }

    fn empty_cache(&self) -> Result<(), ToolError> {
        Ok(())
    }

    fn synchronize(&self) -> Result<(), ToolError> {
        Ok(())
    }

    fn memory(&self) -> Result<Vec<DeviceMemory>, ToolError> {
        let out = Command::new(&self.program)
            .args(NVIDIA_SMI_MEMORY_QUERY)
            .output()
            .map_err(|e| ToolError::Other(format!("{}: {}", self.program, e)))?;
        if !out.status.success() {
            return Err(ToolError::Other(format!(
                "{} exited with {}: {}",
                self.program,
                out.status,
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }
        parse_memory_csv(&String::from_utf8_lossy(&out.stdout))
    }
}

pub fn parse_memory_csv(raw: &str) -> Result<Vec<DeviceMemory>, ToolError> {
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|line| -> Result<DeviceMemory, ToolError> {
            let mut cols = line.split(',').map(str::trim);
            let mut next = || -> Result<f64, ToolError> {
                cols.next()
                    .and_then(|c| c.parse::<f64>().ok())
                    .ok_or_else(|| ToolError::Other(format!("unexpected nvidia-smi row: {line}")))
            };
            Ok(DeviceMemory {
                allocated_mb: next()?,
                reserved_mb: next()?,
            })
        })
        .collect()
}

pub fn clear_gpu_memory(capability: &GpuCapability) -> Result<GpuStats, ToolError> {
    let runtime = match capability {
        GpuCapability::Available(rt) => rt,
        GpuCapability::Unavailable { reason } => {
            return Err(ToolError::unavailable(reason.as_str()))
        }
    };

    tracing::info!(backend = runtime.name(), "Clearing CUDA cache...");
    runtime.empty_cache()?;
    runtime.synchronize()?;

    let devices = runtime.memory()?;
    if devices.is_empty() {
        return Err(ToolError::unavailable("CUDA not available"));
    }
    let stats = GpuStats {
        backend: runtime.name().to_string(),
        device_count: devices.len(),
        memory_allocated_mb: devices.iter().map(|d| d.allocated_mb).sum(),
        memory_reserved_mb: devices.iter().map(|d| d.reserved_mb).sum(),
    };
    tracing::info!(
        allocated_mb = stats.memory_allocated_mb,
        reserved_mb = stats.memory_reserved_mb,
        "GPU memory cleared"
    );
    Ok(stats)
}
