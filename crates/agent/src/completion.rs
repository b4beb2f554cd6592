//! Completion heuristic — fallback classifier for call-free responses.
//!
//! Applied only when the parser finds no tool-call block. A crude,
//! order-insensitive substring match against a small fixed phrase set: it
//! exists to keep the loop from stalling forever when the model answers in
//! prose, not to understand the answer. False positives are possible (any
//! output containing "done" matches) and accepted.

/// Phrases that count as a completion signal, matched case-insensitively.
const COMPLETION_PHRASES: [&str; 3] = ["task complete", "finished", "done"];

/// The instruction injected as the next `user` turn when a response has
/// neither a tool call nor a completion phrase.
pub const CORRECTIVE_INSTRUCTION: &str =
    "Use one of the available tools, or call finish when the task is complete.";

/// Does this call-free response read as a completion signal?
pub fn is_completion(text: &str) -> bool {
    let lowered = text.to_lowercase();
    COMPLETION_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_completion_phrases() {
        assert!(is_completion("The task is done."));
        assert!(is_completion("I have finished the implementation."));
        assert!(is_completion("Task complete! All tests pass."));
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(is_completion("DONE"));
        assert!(is_completion("Task Complete"));
        assert!(is_completion("FINISHED."));
    }

    #[test]
    fn ignores_ordinary_prose() {
        assert!(!is_completion("Let me look at the files first."));
        assert!(!is_completion("I will now write the main module."));
    }

    #[test]
    fn substring_match_is_crude() {
        // Known limitation: the match is substring-based, so words that
        // merely contain a phrase also count.
        assert!(is_completion("The plan was abandoned."));
    }
}
