//! System and task prompt construction.

use std::path::Path;
use taskwright_core::tool::ToolRegistry;

/// Build the system prompt with tool descriptions and the call grammar.
pub fn build_system_prompt(tools: &ToolRegistry) -> String {
    let tool_descriptions = tools
        .catalog()
        .iter()
        .map(|(name, description)| format!("- **{name}**: {description}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are taskwright, an autonomous task executor. You are given a task and a working directory, and you complete the task by calling tools.

<tools>
{tool_descriptions}
</tools>

<tool_call_format>
To call a tool, include exactly one invocation block in your reply:

<tool_call>
<tool>write_file</tool>
<arg name="path">src/main.rs</arg>
<arg name="content">fn main() {{}}</arg>
</tool_call>

The block must contain one <tool> field naming the tool, and one <arg> field per parameter. Argument values are taken verbatim, so multi-line file content goes directly between the markers.
</tool_call_format>

## Rules and Guidelines

1. **One tool call per reply** — the result is returned to you in the next message.

2. **Relative paths** — file paths are resolved against the working directory; prefer relative paths.

3. **Iterate on errors** — if a command fails or produces errors, analyze the output and try to fix the issue. Don't give up after one attempt.

4. **Verify your work** — run the code you wrote before declaring the task complete.

5. **Stay focused** — only make changes directly related to the task.

6. **Call finish** — when the task is done and verified, call the finish tool."#
    )
}

/// Build the initial `user` message carrying the workspace and task text.
pub fn build_task_prompt(workspace: &Path, task: &str) -> String {
    format!(
        "Working directory: {}\n\nTask:\n{}",
        workspace.display(),
        task
    )
}
