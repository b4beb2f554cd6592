//! File write tool — write or create files relative to the run workspace.

use async_trait::async_trait;
use taskwright_core::context::RunContext;
use taskwright_core::error::ToolError;
use taskwright_core::tool::{Tool, ToolParams, ToolResult};

pub struct WriteFileTool;

#[async_trait]
impl Tool for WriteFileTool {
    fn name(&self) -> &str {
        "write_file"
    }

    fn description(&self) -> &str {
        "Write content to a file, creating parent directories as needed. \
         Creates the file if it doesn't exist, overwrites if it does."
    }

    async fn execute(
        &self,
        ctx: &RunContext,
        params: &ToolParams,
    ) -> Result<ToolResult, ToolError> {
        let path = params
            .get("path")
            .ok_or_else(|| ToolError::InvalidParams("missing 'path' parameter".into()))?;

        let content = params
            .get("content")
            .ok_or_else(|| ToolError::InvalidParams("missing 'content' parameter".into()))?;

        let resolved = ctx.resolve(path);

        // Ensure parent directory exists
        if let Some(parent) = resolved.parent()
            && let Err(e) = tokio::fs::create_dir_all(parent).await
        {
            return Ok(ToolResult::text(format!(
                "Failed to create directory '{}': {e}",
                parent.display()
            )));
        }

        match tokio::fs::write(&resolved, content).await {
            Ok(()) => Ok(ToolResult::text(format!(
                "Wrote {} bytes to {}",
                content.len(),
                resolved.display()
            ))),
            Err(e) => Ok(ToolResult::text(format!(
                "Failed to write file '{}': {e}",
                resolved.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(dir: &std::path::Path) -> RunContext {
        RunContext::new(dir, 50)
    }

    fn params(pairs: &[(&str, &str)]) -> ToolParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn write_and_verify() {
        let dir = tempfile::tempdir().unwrap();
        let result = WriteFileTool
            .execute(
                &ctx(dir.path()),
                &params(&[("path", "output.txt"), ("content", "Hello from test!")]),
            )
            .await
            .unwrap();

        assert!(result.output.contains("16 bytes"));
        assert!(!result.finished);

        let content = std::fs::read_to_string(dir.path().join("output.txt")).unwrap();
        assert_eq!(content, "Hello from test!");
    }

    #[tokio::test]
    async fn write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let result = WriteFileTool
            .execute(
                &ctx(dir.path()),
                &params(&[("path", "sub/dir/out.txt"), ("content", "hello")]),
            )
            .await
            .unwrap();

        assert!(result.output.contains("5 bytes"));
        let content = std::fs::read_to_string(dir.path().join("sub/dir/out.txt")).unwrap();
        assert_eq!(content, "hello");
    }

    #[tokio::test]
    async fn overwrite_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("overwrite.txt"), "old content").unwrap();

        WriteFileTool
            .execute(
                &ctx(dir.path()),
                &params(&[("path", "overwrite.txt"), ("content", "new content")]),
            )
            .await
            .unwrap();

        let content = std::fs::read_to_string(dir.path().join("overwrite.txt")).unwrap();
        assert_eq!(content, "new content");
    }

    #[tokio::test]
    async fn parent_segment_escapes_workspace() {
        // Pins the documented non-containment behavior: a `..` path writes
        // outside the workspace rather than being rejected.
        let outer = tempfile::tempdir().unwrap();
        let workspace = outer.path().join("workspace");
        std::fs::create_dir_all(&workspace).unwrap();

        let result = WriteFileTool
            .execute(
                &ctx(&workspace),
                &params(&[("path", "../outside.txt"), ("content", "escaped")]),
            )
            .await
            .unwrap();

        assert!(!result.finished);
        let content = std::fs::read_to_string(outer.path().join("outside.txt")).unwrap();
        assert_eq!(content, "escaped");
    }

    #[tokio::test]
    async fn missing_content_parameter() {
        let dir = tempfile::tempdir().unwrap();
        let result = WriteFileTool
            .execute(&ctx(dir.path()), &params(&[("path", "x.txt")]))
            .await;
        assert!(matches!(result, Err(ToolError::InvalidParams(_))));
    }
}
