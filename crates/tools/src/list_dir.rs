//! Directory listing tool.

use async_trait::async_trait;
use taskwright_core::context::RunContext;
use taskwright_core::error::ToolError;
use taskwright_core::tool::{Tool, ToolParams, ToolResult};

pub struct ListDirTool;

#[async_trait]
impl Tool for ListDirTool {
    fn name(&self) -> &str {
        "list_dir"
    }

    fn description(&self) -> &str {
        "List the entries of a directory, one per line, tagged [dir] or [file]. \
         The 'path' parameter is optional and defaults to the working directory."
    }

    async fn execute(
        &self,
        ctx: &RunContext,
        params: &ToolParams,
    ) -> Result<ToolResult, ToolError> {
        let path = params.get("path").map(String::as_str).unwrap_or(".");
        let resolved = ctx.resolve(path);

        let mut read_dir = match tokio::fs::read_dir(&resolved).await {
            Ok(rd) => rd,
            Err(e) => {
                return Ok(ToolResult::text(format!(
                    "Failed to list directory '{}': {e}",
                    resolved.display()
                )));
            }
        };

        let mut lines = Vec::new();
        loop {
            match read_dir.next_entry().await {
                Ok(Some(entry)) => {
                    let name = entry.file_name().to_string_lossy().to_string();
                    let tag = match entry.file_type().await {
                        Ok(ft) if ft.is_dir() => "[dir] ",
                        _ => "[file]",
                    };
                    lines.push(format!("{tag} {name}"));
                }
                Ok(None) => break,
                Err(e) => {
                    return Ok(ToolResult::text(format!(
                        "Failed to list directory '{}': {e}",
                        resolved.display()
                    )));
                }
            }
        }

        if lines.is_empty() {
            return Ok(ToolResult::text("(empty directory)"));
        }

        // Sort for deterministic output
        lines.sort();
        Ok(ToolResult::text(lines.join("\n")))
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
    async fn lists_files_and_dirs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let result = ListDirTool
            .execute(&ctx(dir.path()), &params(&[]))
            .await
            .unwrap();

        let lines: Vec<&str> = result.output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().any(|l| l.starts_with("[file]") && l.contains("a.txt")));
        assert!(lines.iter().any(|l| l.starts_with("[dir]") && l.contains("sub")));
    }

    #[tokio::test]
    async fn defaults_to_workspace_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("root.txt"), "x").unwrap();

        let result = ListDirTool
            .execute(&ctx(dir.path()), &params(&[]))
            .await
            .unwrap();
        assert!(result.output.contains("root.txt"));
    }

    #[tokio::test]
    async fn lists_subdirectory_by_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested/inner.txt"), "x").unwrap();

        let result = ListDirTool
            .execute(&ctx(dir.path()), &params(&[("path", "nested")]))
            .await
            .unwrap();
        assert!(result.output.contains("inner.txt"));
    }

    #[tokio::test]
    async fn empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = ListDirTool
            .execute(&ctx(dir.path()), &params(&[]))
            .await
            .unwrap();
        assert_eq!(result.output, "(empty directory)");
    }

    #[tokio::test]
    async fn nonexistent_directory_reports_in_band() {
        let dir = tempfile::tempdir().unwrap();
        let result = ListDirTool
            .execute(&ctx(dir.path()), &params(&[("path", "no_such_dir")]))
            .await
            .unwrap();
        assert!(result.output.contains("Failed to list directory"));
        assert!(!result.finished);
    }
}
