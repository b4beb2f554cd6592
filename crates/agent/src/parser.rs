//! Tool-call parser — recovers structured invocations from model text.
//!
//! The model has no native function-call channel, so tool intent is carried
//! inside the response text as a tag block:
//!
//! ```text
//! <tool_call>
//! <tool>write_file</tool>
//! <arg name="path">src/main.rs</arg>
//! <arg name="content">fn main() {}</arg>
//! </tool_call>
//! ```
//!
//! Parsing is best-effort, single-pass regex matching rather than a full
//! grammar: the FIRST well-formed block wins and any text outside it is
//! ignored. A malformed or absent block, or a block without a `<tool>`
//! field, yields `None` — never an error.
//!
//! Argument values are taken verbatim between the markers, embedded
//! newlines included. There is no escaping mechanism, so a value must not
//! contain the literal `</arg>` sequence.

use regex::Regex;
use std::sync::LazyLock;
use taskwright_core::tool::{ToolCall, ToolParams};

static BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<tool_call>(.*?)</tool_call>").unwrap());

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<tool>(.*?)</tool>").unwrap());

static ARG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)<arg name="([^"]+)">(.*?)</arg>"#).unwrap());

/// Extract the first well-formed tool-call block from a model response.
pub fn parse_tool_call(response: &str) -> Option<ToolCall> {
    let block = BLOCK_RE.captures(response)?.get(1)?.as_str();

    let name = NAME_RE.captures(block)?.get(1)?.as_str().trim().to_string();
    if name.is_empty() {
        return None;
    }

    let mut params = ToolParams::new();
    for cap in ARG_RE.captures_iter(block) {
        // Keys are expected to be unique; on a duplicate the last wins.
        params.insert(cap[1].to_string(), cap[2].to_string());
    }

    Some(ToolCall { name, params })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_call() {
        let text = "<tool_call>\n<tool>finish</tool>\n</tool_call>";
        let call = parse_tool_call(text).unwrap();
        assert_eq!(call.name, "finish");
        assert!(call.params.is_empty());
    }

    #[test]
    fn parse_call_with_params() {
        let text = concat!(
            "<tool_call>\n",
            "<tool>run_command</tool>\n",
            "<arg name=\"command\">cargo test</arg>\n",
            "</tool_call>",
        );
        let call = parse_tool_call(text).unwrap();
        assert_eq!(call.name, "run_command");
        assert_eq!(call.param("command"), Some("cargo test"));
    }

    #[test]
    fn multiline_values_taken_verbatim() {
        let text = concat!(
            "<tool_call>\n",
            "<tool>write_file</tool>\n",
            "<arg name=\"path\">src/main.rs</arg>\n",
            "<arg name=\"content\">fn main() {\n    println!(\"hi\");\n}</arg>\n",
            "</tool_call>",
        );
        let call = parse_tool_call(text).unwrap();
        assert_eq!(
            call.param("content"),
            Some("fn main() {\n    println!(\"hi\");\n}")
        );
    }

    #[test]
    fn surrounding_prose_is_ignored() {
        let text = concat!(
            "Let me inspect the directory first.\n\n",
            "<tool_call>\n<tool>list_dir</tool>\n</tool_call>\n\n",
            "I'll look at the files next.",
        );
        let call = parse_tool_call(text).unwrap();
        assert_eq!(call.name, "list_dir");
    }

    #[test]
    fn first_block_wins() {
        let text = concat!(
            "<tool_call>\n<tool>list_dir</tool>\n</tool_call>\n",
            "<tool_call>\n<tool>finish</tool>\n</tool_call>",
        );
        let call = parse_tool_call(text).unwrap();
        assert_eq!(call.name, "list_dir");
    }

    #[test]
    fn plain_prose_yields_none() {
        assert!(parse_tool_call("The task is done, nothing left to do.").is_none());
    }

    #[test]
    fn unclosed_block_yields_none() {
        let text = "<tool_call>\n<tool>finish</tool>\n";
        assert!(parse_tool_call(text).is_none());
    }

    #[test]
    fn block_without_name_yields_none() {
        let text = "<tool_call>\n<arg name=\"path\">x.txt</arg>\n</tool_call>";
        assert!(parse_tool_call(text).is_none());
    }

    #[test]
    fn empty_name_yields_none() {
        let text = "<tool_call>\n<tool>  </tool>\n</tool_call>";
        assert!(parse_tool_call(text).is_none());
    }

    #[test]
    fn duplicate_key_last_wins() {
        let text = concat!(
            "<tool_call>\n<tool>read_file</tool>\n",
            "<arg name=\"path\">a.txt</arg>\n",
            "<arg name=\"path\">b.txt</arg>\n",
            "</tool_call>",
        );
        let call = parse_tool_call(text).unwrap();
        assert_eq!(call.param("path"), Some("b.txt"));
    }

    #[test]
    fn name_whitespace_trimmed() {
        let text = "<tool_call>\n<tool>\nfinish\n</tool>\n</tool_call>";
        let call = parse_tool_call(text).unwrap();
        assert_eq!(call.name, "finish");
    }
}
