use super::kinds::{BlockQuote, Bullet, CodeFence, Header, Rule};

/// Structural meaning of a single line, decided without looking at
/// surrounding lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    Header(Header),
    Rule,
    FenceOpen { lang: String },
    Quote,
    Bullet(Bullet),
    Blank,
    Text,
}

/// Classifies lines for the block tree builder.
///
/// Front-matter lines are recognised by the builder before this runs.
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier {
    pub indent_width: usize,
}

impl LineClassifier {
    /// First match wins: header, rule, fence, quote, bullet, blank, text.
    pub fn classify(&self, line: &str) -> LineClass {
        if let Some(header) = Header::parse(line) {
            return LineClass::Header(header);
        }
        if Rule::matches(line) {
            return LineClass::Rule;
        }
        if let Some(lang) = CodeFence::open(line) {
            return LineClass::FenceOpen { lang };
        }
        if BlockQuote::strip(line).is_some() {
            return LineClass::Quote;
        }
        if let Some(bullet) = Bullet::parse(line, self.indent_width) {
            return LineClass::Bullet(bullet);
        }
        if is_blank(line) {
            return LineClass::Blank;
        }
        LineClass::Text
    }
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
