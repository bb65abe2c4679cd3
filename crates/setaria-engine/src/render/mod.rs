//! # Rendering
//!
//! Every block node and inline segment is turned into HTML through one
//! named template per element. The element set is closed: [`Element`]
//! enumerates them, so a renderer is a total function over that enum rather
//! than a lookup by arbitrary string.
//!
//! - **`Element`**: the data handed to a template, one variant per element
//! - **`ElementRenderer`**: the rendering capability injected into a parse
//! - **`templates`**: `Templates`, the minijinja-backed stock renderer

pub mod templates;

use std::path::PathBuf;

pub use templates::Templates;

/// Literal fragment emitted for a horizontal rule.
pub const RULE_HTML: &str = "<hr>";

/// One renderable element together with the data its template receives.
///
/// Block variants carry the already-rendered HTML fragments of their
/// children (`items`); inline variants carry the raw text captured from the
/// source line, which templates are expected to escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element<'a> {
    Note { items: &'a [String] },
    Header { level: u8, items: &'a [String] },
    Paragraph { items: &'a [String] },
    BlockQuote { items: &'a [String] },
    OrderedList { items: &'a [String] },
    UnorderedList { items: &'a [String] },
    PreCode { lang: &'a str, code: &'a str },
    Code { code: &'a str },
    Strong { text: &'a str },
    Link { text: &'a str, url: &'a str },
    Image { alt: &'a str, src: &'a str },
}

impl Element<'_> {
    /// Template names of every element, in declaration order.
    pub const NAMES: [&'static str; 11] = [
        "Note",
        "Header",
        "P",
        "BlockQuote",
        "Ol",
        "Ul",
        "PreCode",
        "Code",
        "Strong",
        "Link",
        "Img",
    ];

    /// The template name this element is rendered with.
    pub fn name(&self) -> &'static str {
        match self {
            Element::Note { .. } => "Note",
            Element::Header { .. } => "Header",
            Element::Paragraph { .. } => "P",
            Element::BlockQuote { .. } => "BlockQuote",
            Element::OrderedList { .. } => "Ol",
            Element::UnorderedList { .. } => "Ul",
            Element::PreCode { .. } => "PreCode",
            Element::Code { .. } => "Code",
            Element::Strong { .. } => "Strong",
            Element::Link { .. } => "Link",
            Element::Image { .. } => "Img",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("No template registered for element `{element}`")]
    MissingTemplate { element: &'static str },
    #[error("`{name}` is not a known element name")]
    UnknownElement { name: &'static str },
    #[error("Failed to render element `{element}`: {source}")]
    Template {
        element: &'static str,
        #[source]
        source: minijinja::Error,
    },
    #[error("Failed to read template {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The rendering capability a parse consumes.
///
/// Implementations are read-only after construction and shared between
/// concurrently parsed notes, hence the `Send + Sync` bound.
pub trait ElementRenderer: Send + Sync {
    fn render(&self, element: &Element<'_>) -> Result<String, RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_cover_every_variant() {
        let items: Vec<String> = vec![];
        let elements = [
            Element::Note { items: &items },
            Element::Header {
                level: 1,
                items: &items,
            },
            Element::Paragraph { items: &items },
            Element::BlockQuote { items: &items },
            Element::OrderedList { items: &items },
            Element::UnorderedList { items: &items },
            Element::PreCode { lang: "", code: "" },
            Element::Code { code: "" },
            Element::Strong { text: "" },
            Element::Link { text: "", url: "" },
            Element::Image { alt: "", src: "" },
        ];
        let names: Vec<&str> = elements.iter().map(Element::name).collect();
        assert_eq!(names, Element::NAMES);
    }
}
