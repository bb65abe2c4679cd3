use serde::{Deserialize, Serialize};

/// A parsed note, ready to be indexed and served.
///
/// `body` is the final HTML of the note; every other field comes from the
/// filename or from metadata lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    /// `YYYY-MM-DD` taken from the filename.
    pub date: String,
    pub author: String,
    pub weather: String,
    pub tags: Vec<String>,
    pub slug: String,
    pub body: String,
}

impl Document {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
