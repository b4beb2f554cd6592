//! Run context — the per-run state every tool dispatch is scoped to.
//!
//! One [`RunContext`] exists per invocation of the turn loop. It owns the
//! transcript for the run's lifetime and fixes the working directory that
//! all relative file and command operations resolve against.

use std::path::{Path, PathBuf};

use crate::message::Transcript;

/// Per-run execution context.
#[derive(Debug)]
pub struct RunContext {
    /// The fixed working directory for this run.
    pub workspace: PathBuf,

    /// Maximum number of request/parse cycles.
    pub turn_budget: u32,

    /// Turns consumed so far.
    pub turns_used: u32,

    /// The run's message log.
    pub transcript: Transcript,
}

impl RunContext {
    /// Create a context for a fresh run.
    pub fn new(workspace: impl Into<PathBuf>, turn_budget: u32) -> Self {
        Self {
            workspace: workspace.into(),
            turn_budget,
            turns_used: 0,
            transcript: Transcript::new(),
        }
    }

    /// Consume one turn. Returns false once the budget is exhausted.
    pub fn next_turn(&mut self) -> bool {
        if self.turns_used >= self.turn_budget {
            return false;
        }
        self.turns_used += 1;
        true
    }

    /// Resolve a tool-supplied path against the workspace.
    ///
    /// Absolute paths pass through unchanged and relative paths are joined
    /// onto the workspace. Containment is NOT enforced: an absolute path or
    /// a `..` segment can address locations outside the workspace. Callers
    /// that need a sandbox must impose one themselves.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.workspace.join(candidate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_join_workspace() {
        let ctx = RunContext::new("/work/run_1", 50);
        assert_eq!(
            ctx.resolve("src/main.rs"),
            PathBuf::from("/work/run_1/src/main.rs")
        );
    }

    #[test]
    fn absolute_paths_pass_through() {
        let ctx = RunContext::new("/work/run_1", 50);
        assert_eq!(ctx.resolve("/etc/hosts"), PathBuf::from("/etc/hosts"));
    }

    #[test]
    fn parent_segments_escape_workspace() {
        // Non-containment is the documented behavior: `..` is not rejected
        // and is preserved verbatim in the resolved path.
        let ctx = RunContext::new("/work/run_1", 50);
        assert_eq!(
            ctx.resolve("../outside.txt"),
            PathBuf::from("/work/run_1/../outside.txt")
        );
    }

    #[test]
    fn turn_budget_counts_down() {
        let mut ctx = RunContext::new("/work", 2);
        assert!(ctx.next_turn());
        assert!(ctx.next_turn());
        assert!(!ctx.next_turn());
        assert_eq!(ctx.turns_used, 2);
    }
}
