//! Finish tool — the structured way for the model to declare completion.

use async_trait::async_trait;
use taskwright_core::context::RunContext;
use taskwright_core::error::ToolError;
use taskwright_core::tool::{Tool, ToolParams, ToolResult};
use tracing::info;

pub struct FinishTool;

#[async_trait]
impl Tool for FinishTool {
    fn name(&self) -> &str {
        "finish"
    }

    fn description(&self) -> &str {
        "Declare the task complete. Call this once the task is done; it takes no parameters."
    }

    async fn execute(
        &self,
        ctx: &RunContext,
        _params: &ToolParams,
    ) -> Result<ToolResult, ToolError> {
        info!(turns_used = ctx.turns_used, "Task declared complete");
        Ok(ToolResult::finished("Task marked as complete."))
    }
}
