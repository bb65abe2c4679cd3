use crate::render::Element;

/// One piece of a text run after inline filtering.
///
/// `PlainText` holds raw source text that still needs HTML-escaping; the
/// other variants hold the text captured by their pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSegment {
    PlainText(String),
    CodeSpan { code: String },
    Strong { text: String },
    Link { text: String, url: String },
    Image { alt: String, src: String },
}

impl InlineSegment {
    /// The element this segment renders through, `None` for plain text.
    pub fn element(&self) -> Option<Element<'_>> {
        match self {
            InlineSegment::PlainText(_) => None,
            InlineSegment::CodeSpan { code } => Some(Element::Code { code }),
            InlineSegment::Strong { text } => Some(Element::Strong { text }),
            InlineSegment::Link { text, url } => Some(Element::Link { text, url }),
            InlineSegment::Image { alt, src } => Some(Element::Image { alt, src }),
        }
    }
}
