use crate::parsing::inline::render_inline;
use crate::render::{Element, ElementRenderer, RenderError};

/// Ordered (`1.`) or unordered (`*`, `+`, `-`) list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

/// The kind of an open block node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Root,
    Header {
        /// Number of `#` marks, 1 to 6.
        level: u8,
    },
    BlockQuote,
    CodeBlock {
        /// Language tag after the opening fence, empty when absent.
        lang: String,
    },
    List {
        kind: ListKind,
        /// Indentation of this list's bullets, in indent units.
        indent: usize,
    },
    Paragraph,
}

/// Content waiting to be turned into a child fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    /// Source text, inline-filtered on flush.
    Text(String),
    /// HTML of a folded child node, copied as-is.
    Html(String),
}

/// A block under construction.
///
/// Children are already-rendered HTML fragments; one fragment per flush.
/// Nodes live on the builder's stack only while open and are consumed by
/// [`BlockNode::render`] when they close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Nesting level, 0 for the root.
    pub level: usize,
    pub children: Vec<String>,
    pending: Vec<Pending>,
}

impl BlockNode {
    pub fn root() -> Self {
        Self {
            kind: BlockKind::Root,
            level: 0,
            children: vec![],
            pending: vec![],
        }
    }

    /// A new node one level below `self`.
    pub fn spawn(&self, kind: BlockKind) -> Self {
        Self {
            kind,
            level: self.level + 1,
            children: vec![],
            pending: vec![],
        }
    }

    pub fn is_paragraph(&self) -> bool {
        matches!(self.kind, BlockKind::Paragraph)
    }

    /// Indent of a list node, `None` for anything else.
    pub fn list_indent(&self) -> Option<usize> {
        match self.kind {
            BlockKind::List { indent, .. } => Some(indent),
            _ => None,
        }
    }

    /// Moves a list to another indent; no-op for anything else.
    pub fn set_list_indent(&mut self, to: usize) {
        if let BlockKind::List { indent, .. } = &mut self.kind {
            *indent = to;
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.pending.push(Pending::Text(text.into()));
    }

    pub fn push_html(&mut self, html: impl Into<String>) {
        self.pending.push(Pending::Html(html.into()));
    }

    /// Turns pending content into one child fragment.
    ///
    /// Consecutive text lines are joined with `\n` and inline-filtered;
    /// folded child HTML is kept verbatim. Code blocks keep their lines
    /// pending until [`BlockNode::render`].
    pub fn flush(&mut self, renderer: &dyn ElementRenderer) -> Result<(), RenderError> {
        if self.pending.is_empty() || matches!(self.kind, BlockKind::CodeBlock { .. }) {
            return Ok(());
        }

        let mut fragment = String::new();
        let mut run: Vec<String> = vec![];
        for piece in std::mem::take(&mut self.pending) {
            match piece {
                Pending::Text(text) => run.push(text),
                Pending::Html(html) => {
                    if !run.is_empty() {
                        fragment.push_str(&render_inline(&run.join("\n"), renderer)?);
                        run.clear();
                    }
                    fragment.push_str(&html);
                }
            }
        }
        if !run.is_empty() {
            fragment.push_str(&render_inline(&run.join("\n"), renderer)?);
        }
        self.children.push(fragment);
        Ok(())
    }

    /// Renders the node through its element template, consuming it.
    ///
    /// Pending content is flushed first. A node other than a code block
    /// with no children renders to the empty string.
    pub fn render(mut self, renderer: &dyn ElementRenderer) -> Result<String, RenderError> {
        self.flush(renderer)?;
        let code = self.verbatim();
        let items = self.children.as_slice();
        let element = match &self.kind {
            BlockKind::CodeBlock { lang } => Element::PreCode { lang, code: &code },
            _ if items.is_empty() => return Ok(String::new()),
            BlockKind::Root => Element::Note { items },
            BlockKind::Header { level } => Element::Header {
                level: *level,
                items,
            },
            BlockKind::BlockQuote => Element::BlockQuote { items },
            BlockKind::List {
                kind: ListKind::Ordered,
                ..
            } => Element::OrderedList { items },
            BlockKind::List {
                kind: ListKind::Unordered,
                ..
            } => Element::UnorderedList { items },
            BlockKind::Paragraph => Element::Paragraph { items },
        };
        renderer.render(&element)
    }

    fn verbatim(&self) -> String {
        let lines: Vec<&str> = self
            .pending
            .iter()
            .map(|piece| match piece {
                Pending::Text(text) | Pending::Html(text) => text.as_str(),
            })
            .collect();
        lines.join("\n")
    }
}
