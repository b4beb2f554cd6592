//! Shell command tool — execute system commands in the run workspace.

use async_trait::async_trait;
use taskwright_core::context::RunContext;
use taskwright_core::error::ToolError;
use taskwright_core::tool::{Tool, ToolParams, ToolResult};
use tokio::process::Command;
use tracing::{debug, warn};

/// Execute shell commands with the workspace as the current directory.
///
/// Failures (non-zero exit, spawn errors) are reported as result text so the
/// model can read the error and iterate — they never abort the run.
pub struct RunCommandTool;

#[async_trait]
impl Tool for RunCommandTool {
    fn name(&self) -> &str {
        "run_command"
    }

    fn description(&self) -> &str {
        "Execute a shell command in the working directory and return stdout/stderr. \
         Use this for running programs, compiling code, installing packages, etc."
    }

    async fn execute(
        &self,
        ctx: &RunContext,
        params: &ToolParams,
    ) -> Result<ToolResult, ToolError> {
        let command = params
            .get("command")
            .ok_or_else(|| ToolError::InvalidParams("missing 'command' parameter".into()))?;

        debug!(command = %command, workspace = %ctx.workspace.display(), "Executing shell command");

        let output = if cfg!(target_os = "windows") {
            Command::new("cmd")
                .args(["/C", command])
                .current_dir(&ctx.workspace)
                .output()
                .await
        } else {
            Command::new("sh")
                .args(["-c", command])
                .current_dir(&ctx.workspace)
                .output()
                .await
        };

        let result_text = match output {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout).to_string();
                let stderr = String::from_utf8_lossy(&output.stderr).to_string();

                if output.status.success() {
                    if stderr.is_empty() {
                        stdout
                    } else {
                        format!("{stdout}\n[stderr]: {stderr}")
                    }
                } else {
                    let code = output.status.code().unwrap_or(-1);
                    warn!(command = %command, exit_code = code, "Command failed");
                    format!("[exit code: {code}]\n{stdout}\n{stderr}")
                }
            }
            Err(e) => format!("Failed to execute command: {e}"),
        };

        let trimmed = result_text.trim();
        if trimmed.is_empty() {
            Ok(ToolResult::text("(no output)"))
        } else {
            Ok(ToolResult::text(trimmed))
        }
    }
}
