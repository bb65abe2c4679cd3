use regex::Regex;
use std::sync::LazyLock;

static FENCE_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*``` {0,3}(\w*)").unwrap());
static FENCE_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*```\s*$").unwrap());

/// Backtick code fence delimiters.
pub struct CodeFence;

impl CodeFence {
    /// Language tag of an opening fence line; empty when the fence has none.
    pub fn open(line: &str) -> Option<String> {
        FENCE_OPEN_RE
            .captures(line)
            .map(|caps| caps[1].to_string())
    }

    pub fn closes(line: &str) -> bool {
        FENCE_CLOSE_RE.is_match(line)
    }
}
