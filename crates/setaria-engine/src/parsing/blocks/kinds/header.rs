use regex::Regex;
use std::sync::LazyLock;

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6}) {1,3}(\S.*?)\s*$").unwrap());

/// A `#`-prefixed header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub level: u8,
    pub text: String,
}

impl Header {
    pub fn parse(line: &str) -> Option<Self> {
        let caps = HEADER_RE.captures(line)?;
        Some(Self {
            level: caps[1].len() as u8,
            text: caps[2].to_string(),
        })
    }
}
