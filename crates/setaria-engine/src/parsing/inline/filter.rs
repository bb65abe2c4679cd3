use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::render::{ElementRenderer, RenderError};

use super::types::InlineSegment;

static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"``(.+?)``|`(.+?)`").unwrap());
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([\S ]*?)\]\((\S*?)(?: \S*?)*?\)").unwrap());
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([\S ]*?)\]\((\S*?)(?: \S*?)*?\)").unwrap());
static STRONG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// Inline constructs, in the order their passes run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InlineKind {
    CodeSpan,
    Image,
    Link,
    Strong,
}

impl InlineKind {
    /// Code spans first so their content is never scanned again; images
    /// before links since an image contains a link-shaped tail.
    const PRECEDENCE: [InlineKind; 4] = [Self::CodeSpan, Self::Image, Self::Link, Self::Strong];

    fn regex(self) -> &'static Regex {
        match self {
            Self::CodeSpan => &CODE_RE,
            Self::Image => &IMAGE_RE,
            Self::Link => &LINK_RE,
            Self::Strong => &STRONG_RE,
        }
    }

    fn segment(self, caps: &Captures<'_>) -> InlineSegment {
        // Only participating groups, so `` ``a`` `` and `` `a` `` both land in slot 0
        let groups: Vec<&str> = caps.iter().skip(1).flatten().map(|m| m.as_str()).collect();
        let group = |i: usize| groups.get(i).copied().unwrap_or_default().to_string();
        match self {
            Self::CodeSpan => InlineSegment::CodeSpan { code: group(0) },
            Self::Image => InlineSegment::Image {
                alt: group(0),
                src: group(1),
            },
            Self::Link => InlineSegment::Link {
                text: group(0),
                url: group(1),
            },
            Self::Strong => InlineSegment::Strong { text: group(0) },
        }
    }
}

/// Splits a text run into typed segments.
///
/// Each pass only scans segments still tagged `PlainText` by the previous
/// pass. Text between and after matches is kept as `PlainText`; empty
/// input yields no segments.
pub fn split_inline(text: &str) -> Vec<InlineSegment> {
    let mut segments = vec![InlineSegment::PlainText(text.to_string())];
    for kind in InlineKind::PRECEDENCE {
        segments = segments
            .into_iter()
            .flat_map(|segment| match segment {
                InlineSegment::PlainText(text) => scan(kind, &text),
                recognised => vec![recognised],
            })
            .collect();
    }
    segments
}

fn scan(kind: InlineKind, text: &str) -> Vec<InlineSegment> {
    let mut out = vec![];
    let mut pos = 0;
    for caps in kind.regex().captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if pos < whole.start() {
            out.push(InlineSegment::PlainText(text[pos..whole.start()].to_string()));
        }
        out.push(kind.segment(&caps));
        pos = whole.end();
    }
    if pos < text.len() {
        out.push(InlineSegment::PlainText(text[pos..].to_string()));
    }
    out
}

/// Renders segments in order: plain text is escaped, everything else goes
/// through its element template.
pub fn render_segments(
    segments: &[InlineSegment],
    renderer: &dyn ElementRenderer,
) -> Result<String, RenderError> {
    let mut html = String::new();
    for segment in segments {
        match segment.element() {
            Some(element) => html.push_str(&renderer.render(&element)?),
            None => {
                if let InlineSegment::PlainText(text) = segment {
                    html.push_str(&html_escape::encode_text(text));
                }
            }
        }
    }
    Ok(html)
}

/// Filters and renders one text run.
pub fn render_inline(text: &str, renderer: &dyn ElementRenderer) -> Result<String, RenderError> {
    render_segments(&split_inline(text), renderer)
}
