//! Built-in tool implementations for taskwright.
//!
//! Tools give the agent the ability to act inside its run workspace:
//! run shell commands, read and write files, list directories, and declare
//! the task finished.
//!
//! All path-taking tools resolve their `path` parameter through
//! [`RunContext::resolve`](taskwright_core::RunContext::resolve), which does
//! not enforce containment — see that method for the trade-off.

pub mod finish;
pub mod list_dir;
pub mod read_file;
pub mod run_command;
pub mod write_file;

use taskwright_core::tool::ToolRegistry;

/// Create the default tool registry with all built-in tools.
pub fn default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(run_command::RunCommandTool));
    registry.register(Box::new(read_file::ReadFileTool));
    registry.register(Box::new(write_file::WriteFileTool));
    registry.register(Box::new(list_dir::ListDirTool));
    registry.register(Box::new(finish::FinishTool));
    registry
}
