use crate::parsing::{
    ParseOptions,
    front_matter::{FrontMatter, FrontMatterLine},
    lines::LineBuffer,
};
use crate::render::{ElementRenderer, RULE_HTML, RenderError};

use super::{
    classify::{LineClass, LineClassifier, is_blank},
    kinds::{BlockQuote, CodeFence},
    types::{BlockKind, BlockNode},
};

/// Result of a complete pass over a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltTree {
    pub front_matter: FrontMatter,
    /// Fully folded HTML of the root node.
    pub body: String,
}

/// Single-pass state machine building the block tree of one note.
///
/// Open nodes form a stack indexed by nesting level: the root sits below
/// `open`, `open[i]` has level `i + 1`. Closing a node pops it, renders it
/// and appends the HTML to its parent's pending content.
pub struct BlockTreeBuilder<'r> {
    pub(super) lines: LineBuffer,
    pub(super) classifier: LineClassifier,
    pub(super) max_depth: usize,
    pub(super) renderer: &'r dyn ElementRenderer,
    root: BlockNode,
    open: Vec<BlockNode>,
    pub(super) front_matter: FrontMatter,
}

impl<'r> BlockTreeBuilder<'r> {
    pub fn new(
        lines: LineBuffer,
        options: &ParseOptions,
        renderer: &'r dyn ElementRenderer,
    ) -> Self {
        Self {
            lines,
            classifier: LineClassifier {
                indent_width: options.indent_width,
            },
            max_depth: options.max_depth,
            renderer,
            root: BlockNode::root(),
            open: vec![],
            front_matter: FrontMatter::default(),
        }
    }

    pub fn build(mut self) -> Result<BuiltTree, RenderError> {
        while self.lines.has_current() {
            self.step()?;
            self.lines.advance();
        }

        // EOF: fold every open node into the root
        self.close_to(0)?;
        let body = self.root.render(self.renderer)?;
        Ok(BuiltTree {
            front_matter: self.front_matter,
            body,
        })
    }

    fn step(&mut self) -> Result<(), RenderError> {
        let n = self.lines.cursor();
        let line = self.lines.current().to_string();

        if n == 0 {
            self.front_matter.set_title(&line);
            return Ok(());
        }
        if let Some(meta) = FrontMatterLine::parse(&line) {
            self.front_matter.apply(meta);
            return Ok(());
        }

        match self.classifier.classify(&line) {
            LineClass::Header(header) => {
                self.close_to(0)?;
                self.open_node(BlockKind::Header {
                    level: header.level,
                });
                self.top_mut().push_text(header.text);
                self.close_to(0)?;
            }
            LineClass::Rule => {
                self.close_to(0)?;
                self.root.push_html(RULE_HTML);
                self.root.flush(self.renderer)?;
            }
            LineClass::FenceOpen { lang } => {
                self.close_paragraph()?;
                self.parse_fence(lang)?;
            }
            LineClass::Quote => {
                self.close_paragraph()?;
                self.parse_quote()?;
            }
            LineClass::Bullet(_) => {
                self.close_paragraph()?;
                self.parse_list()?;
            }
            LineClass::Blank => {
                self.lines.mark_blank(n);
                let renderer = self.renderer;
                self.top_mut().flush(renderer)?;
                if self.level() > 0 {
                    self.fold_top()?;
                }
            }
            LineClass::Text => {
                if !self.top().is_paragraph() {
                    self.open_node(BlockKind::Paragraph);
                }
                self.top_mut().push_text(line);
            }
        }
        Ok(())
    }

    /// Consumes lines up to the closing fence verbatim.
    ///
    /// Without a closing fence the rest of the note becomes the code body.
    /// The cursor is left on the last consumed line.
    fn parse_fence(&mut self, lang: String) -> Result<(), RenderError> {
        let start = self.lines.cursor();
        self.open_node(BlockKind::CodeBlock { lang });
        self.lines.advance();

        let mut closed = false;
        while self.lines.has_current() {
            if CodeFence::closes(self.lines.current()) {
                closed = true;
                break;
            }
            let line = self.lines.current().to_string();
            self.top_mut().push_text(line);
            self.lines.advance();
        }

        if !closed {
            log::debug!("Code fence opened on line {} is never closed", start + 1);
            let last = self.lines.total() - 1;
            self.lines.jumpto(last);
        }
        self.fold_top()
    }

    /// Consumes consecutive quote and blank lines.
    ///
    /// Blank lines and bare `>` lines end a paragraph inside the quote. The
    /// first other line ends the quote and is left for the main loop.
    fn parse_quote(&mut self) -> Result<(), RenderError> {
        let renderer = self.renderer;
        self.open_node(BlockKind::BlockQuote);

        while self.lines.has_current() {
            let n = self.lines.cursor();
            let line = self.lines.current().to_string();
            match BlockQuote::strip(&line) {
                Some("") => self.top_mut().flush(renderer)?,
                Some(text) => self.top_mut().push_text(text),
                None if is_blank(&line) => {
                    self.lines.mark_blank(n);
                    self.top_mut().flush(renderer)?;
                }
                None => break,
            }
            self.lines.advance();
        }

        let last = self.lines.cursor().saturating_sub(1);
        self.lines.jumpto(last);
        self.fold_top()
    }

    /// Current nesting level, 0 when only the root is open.
    pub(super) fn level(&self) -> usize {
        self.open.len()
    }

    pub(super) fn top(&self) -> &BlockNode {
        self.open.last().unwrap_or(&self.root)
    }

    pub(super) fn top_mut(&mut self) -> &mut BlockNode {
        self.open.last_mut().unwrap_or(&mut self.root)
    }

    /// The node the top of the stack folds into.
    pub(super) fn parent(&self) -> &BlockNode {
        self.open
            .len()
            .checked_sub(2)
            .and_then(|i| self.open.get(i))
            .unwrap_or(&self.root)
    }

    pub(super) fn open_node(&mut self, kind: BlockKind) {
        let node = self.top().spawn(kind);
        self.open.push(node);
    }

    /// Closes the innermost open node into its parent.
    pub(super) fn fold_top(&mut self) -> Result<(), RenderError> {
        let Some(node) = self.open.pop() else {
            return Ok(());
        };
        let renderer = self.renderer;
        let html = node.render(renderer)?;
        let parent = self.top_mut();
        if !html.is_empty() {
            parent.push_html(html);
        }
        parent.flush(renderer)
    }

    /// Folds open nodes until the current level is `level`.
    pub(super) fn close_to(&mut self, level: usize) -> Result<(), RenderError> {
        while self.level() > level {
            self.fold_top()?;
        }
        Ok(())
    }

    fn close_paragraph(&mut self) -> Result<(), RenderError> {
        if self.top().is_paragraph() {
            self.fold_top()?;
        }
        Ok(())
    }
}
