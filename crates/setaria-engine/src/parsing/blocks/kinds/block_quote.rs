use regex::Regex;
use std::sync::LazyLock;

static QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]*>\s*(.*?)\s*$").unwrap());

/// `>`-prefixed quote lines.
pub struct BlockQuote;

impl BlockQuote {
    /// The quoted text with prefix and surrounding whitespace removed.
    ///
    /// A bare `>` yields an empty string, which separates paragraphs inside
    /// the quote.
    pub fn strip(line: &str) -> Option<&str> {
        QUOTE_RE
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}
