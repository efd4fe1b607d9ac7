// lesson-lint/src/placeholders.rs

use regex::Regex;
use std::sync::LazyLock;

// Non-greedy: "{a} and {b}" yields "a" and "b", not "a} and {b".
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{(.*?)\}").unwrap());

/// Variable names referenced as `{name}` in a chatbot message, left to right,
/// duplicates kept. The text between the braces is returned verbatim.
pub fn placeholders(message: &str) -> Vec<&str> {
    PLACEHOLDER
        .captures_iter(message)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}
