use crate::domain::constants::MODEL_RESET_MESSAGE;
use crate::domain::models::ResetNote;
use crate::error::ToolError;

/// Hook for unloading whatever checkpoints the generation server keeps resident.
pub trait ModelReset {
    fn reset(&self) -> Result<ResetNote, ToolError>;
}

/// Default reset: touches nothing and always succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReset;

impl ModelReset for NoopReset {
    fn reset(&self) -> Result<ResetNote, ToolError> {
        tracing::info!("Attempting model reset...");
        Ok(ResetNote {
            message: MODEL_RESET_MESSAGE.to_string(),
        })
    }
}
