//! Metadata lines embedded in the note body.
//!
//! The first line of a note is always its title. `Weather:`, `Auth:` and
//! `Tags:` pseudo-headers may appear on any later line and are checked before
//! any block syntax.

use regex::Regex;
use std::sync::LazyLock;

static WEATHER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Weather: {1,3}(\S[\S ]*)").unwrap());
static AUTH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Auth: {1,3}(\S[\S ]*)").unwrap());
static TAGS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Tags: {1,3}(\S[\S ]*)").unwrap());
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+").unwrap());

/// A recognised metadata line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontMatterLine {
    Weather(String),
    Author(String),
    Tags(Vec<String>),
}

impl FrontMatterLine {
    /// Checks `Weather`, `Auth` and `Tags` in that order; first match wins.
    pub fn parse(line: &str) -> Option<Self> {
        if let Some(caps) = WEATHER_RE.captures(line) {
            return Some(Self::Weather(caps[1].trim_end().to_string()));
        }
        if let Some(caps) = AUTH_RE.captures(line) {
            return Some(Self::Author(caps[1].trim_end().to_string()));
        }
        if let Some(caps) = TAGS_RE.captures(line) {
            let tags = WORD_RE
                .find_iter(&caps[1])
                .map(|m| m.as_str().to_string())
                .collect();
            return Some(Self::Tags(tags));
        }
        None
    }
}

/// Metadata gathered over one parse. Later lines overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub author: String,
    pub weather: String,
    pub tags: Vec<String>,
}

impl FrontMatter {
    pub fn set_title(&mut self, line: &str) {
        self.title = line.trim().to_string();
    }

    pub fn apply(&mut self, line: FrontMatterLine) {
        match line {
            FrontMatterLine::Weather(weather) => self.weather = weather,
            FrontMatterLine::Author(author) => self.author = author,
            FrontMatterLine::Tags(tags) => self.tags = tags,
        }
    }
}
