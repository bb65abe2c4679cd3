use regex::Regex;
use std::sync::LazyLock;

static RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-{3,}|_{3,}|\*{3,})\s*$").unwrap());

/// Horizontal rule: three or more of the same `-`, `_` or `*` alone on a line.
pub struct Rule;

impl Rule {
    pub fn matches(line: &str) -> bool {
        RULE_RE.is_match(line)
    }
}
