//! File read tool — read file contents relative to the run workspace.

use async_trait::async_trait;
use taskwright_core::context::RunContext;
use taskwright_core::error::ToolError;
use taskwright_core::tool::{Tool, ToolParams, ToolResult};

pub struct ReadFileTool;

#[async_trait]
impl Tool for ReadFileTool {
    fn name(&self) -> &str {
        "read_file"
    }

    fn description(&self) -> &str {
        "Read the contents of a file. The path is resolved relative to the \
         working directory unless it is absolute."
    }

    async fn execute(
        &self,
        ctx: &RunContext,
        params: &ToolParams,
    ) -> Result<ToolResult, ToolError> {
        let path = params
            .get("path")
            .ok_or_else(|| ToolError::InvalidParams("missing 'path' parameter".into()))?;

        let resolved = ctx.resolve(path);

        match tokio::fs::read_to_string(&resolved).await {
            Ok(content) => Ok(ToolResult::text(content)),
            Err(e) => Ok(ToolResult::text(format!(
                "Failed to read file '{}': {e}",
                resolved.display()
            ))),
        }
    }
}
