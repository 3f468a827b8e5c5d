use crate::domain::models::HeapStats;
use crate::error::ToolError;

/// Hand free heap pages back to the OS and report how much the heap shrank.
pub fn reclaim_heap() -> Result<HeapStats, ToolError> {
    tracing::info!("Running heap reclamation...");
    let (before, after) = trim()?;
    let stats = HeapStats {
        collected_objects: before.saturating_sub(after),
        heap_before_bytes: before,
        heap_after_bytes: after,
    };
    tracing::info!(
        collected = stats.collected_objects,
        "Heap reclamation completed"
    );
    Ok(stats)
}

#[cfg(all(target_os = "linux", target_env = "gnu"))]
fn trim() -> Result<(u64, u64), ToolError> {
    fn held(info: &libc::mallinfo2) -> u64 {
        (info.arena + info.hblkhd) as u64
    }
    // SAFETY: glibc allocator introspection with no pointer arguments.
    let before = unsafe { libc::mallinfo2() };
    // SAFETY: as above; a zero pad trims everything above the heap top.
    unsafe { libc::malloc_trim(0) };
    // SAFETY: as above.
    let after = unsafe { libc::mallinfo2() };
    Ok((held(&before), held(&after)))
}

#[cfg(not(all(target_os = "linux", target_env = "gnu")))]
fn trim() -> Result<(u64, u64), ToolError> {
    tracing::debug!("allocator has no trim facility on this target");
    Ok((0, 0))
}
