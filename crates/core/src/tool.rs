//! Tool trait — the abstraction over agent capabilities.
//!
//! Tools are what give the agent the ability to act in the world: run shell
//! commands, read and write files, list directories, and declare the task
//! finished. Every execution is scoped to the run's working directory via
//! [`RunContext`], threaded explicitly through each call so the registry
//! stays reentrant and testable in isolation.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::context::RunContext;
use crate::error::ToolError;

/// Named string parameters extracted from a tool-call block.
pub type ToolParams = HashMap<String, String>;

/// A request to execute a tool, as parsed from model output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCall {
    /// Name of the tool to execute
    pub name: String,

    /// Parameter values, keyed by parameter name
    pub params: ToolParams,
}

impl ToolCall {
    /// Look up a parameter by name.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// The result of a tool execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResult {
    /// The output text fed back into the conversation
    pub output: String,

    /// Whether the tool signalled task completion
    pub finished: bool,
}

impl ToolResult {
    /// An ordinary result: output is fed back, the loop continues.
    pub fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            finished: false,
        }
    }

    /// A terminal result: the loop stops after this dispatch.
    pub fn finished(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            finished: true,
        }
    }
}

/// The core Tool trait.
///
/// Each tool (run_command, read_file, write_file, list_dir, finish)
/// implements this trait. Tools are registered in the ToolRegistry and
/// dispatched by the turn loop.
///
/// Runtime failures (a command that exits non-zero, a file that does not
/// exist) are NOT errors: they are reported as ordinary [`ToolResult`]
/// output so the model can react. `Err` is reserved for malformed calls,
/// and the registry folds it back into result text anyway.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The unique name of this tool (e.g., "run_command", "read_file").
    fn name(&self) -> &str;

    /// A description of what this tool does (shown to the model).
    fn description(&self) -> &str;

    /// Execute the tool against the run's working directory.
    async fn execute(
        &self,
        ctx: &RunContext,
        params: &ToolParams,
    ) -> std::result::Result<ToolResult, ToolError>;
}

/// A registry of available tools.
///
/// The turn loop uses this to:
/// 1. Enumerate tools for the system prompt
/// 2. Look up and execute tools when the model requests them
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool. Replaces any existing tool with the same name.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        let name = tool.name().to_string();
        self.tools.insert(name, tool);
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    /// All registered tool names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// `(name, description)` pairs for every tool, sorted by name.
    pub fn catalog(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .tools
            .values()
            .map(|t| (t.name(), t.description()))
            .collect();
        entries.sort_unstable_by_key(|(name, _)| *name);
        entries
    }

    /// Dispatch a tool call. Never fails: an unknown tool name or a
    /// malformed call is surfaced as result text for the model, not as an
    /// error for the loop.
    pub async fn dispatch(&self, ctx: &RunContext, call: &ToolCall) -> ToolResult {
        let Some(tool) = self.tools.get(&call.name) else {
            return ToolResult::text(format!(
                "unknown tool '{}' — available tools: {}",
                call.name,
                self.names().join(", ")
            ));
        };

        match tool.execute(ctx, &call.params).await {
            Ok(result) => result,
            Err(e) => ToolResult::text(format!("Error: {e}")),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A simple test tool for unit tests.
    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }
        fn description(&self) -> &str {
            "Echoes back the input"
        }
        async fn execute(
            &self,
            _ctx: &RunContext,
            params: &ToolParams,
        ) -> std::result::Result<ToolResult, ToolError> {
            let text = params
                .get("text")
                .ok_or_else(|| ToolError::InvalidParams("missing 'text' parameter".into()))?;
            Ok(ToolResult::text(text.clone()))
        }
    }

    fn ctx() -> RunContext {
        RunContext::new("/tmp", 50)
    }

    fn call(name: &str, params: &[(&str, &str)]) -> ToolCall {
        ToolCall {
            name: name.into(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn registry_register_and_lookup() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(EchoTool));
        assert!(registry.get("echo").is_some());
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn registry_catalog() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(EchoTool));
        let catalog = registry.catalog();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].0, "echo");
    }

    #[tokio::test]
    async fn registry_dispatch_tool() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(EchoTool));

        let result = registry
            .dispatch(&ctx(), &call("echo", &[("text", "hello world")]))
            .await;
        assert_eq!(result.output, "hello world");
        assert!(!result.finished);
    }

    #[tokio::test]
    async fn registry_dispatch_unknown_tool() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(EchoTool));

        let result = registry.dispatch(&ctx(), &call("nonexistent", &[])).await;
        assert!(result.output.contains("unknown tool 'nonexistent'"));
        assert!(result.output.contains("echo"));
        assert!(!result.finished);
    }

    #[tokio::test]
    async fn registry_dispatch_folds_tool_errors_in_band() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(EchoTool));

        // No 'text' parameter — the tool returns Err, dispatch folds it.
        let result = registry.dispatch(&ctx(), &call("echo", &[])).await;
        assert!(result.output.starts_with("Error:"));
        assert!(result.output.contains("text"));
        assert!(!result.finished);
    }
}
