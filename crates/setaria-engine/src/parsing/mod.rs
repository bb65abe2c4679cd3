//! # Note Parsing
//!
//! Turns the text of one note into a [`Document`].
//!
//! ## Parsing Phases
//!
//! 1. **Lines** (`lines`): the text is split into a `LineBuffer` with a
//!    cursor and a record of blank lines
//! 2. **Blocks** (`blocks`): a single pass builds the block tree, picking up
//!    metadata lines (`front_matter`) along the way
//! 3. **Inline** (`inline`): text flushed out of block nodes is split into
//!    segments and rendered
//!
//! Rendering happens while the tree is built: every node is turned into HTML
//! the moment it closes, so the body is complete when the pass ends.

pub mod blocks;
pub mod front_matter;
pub mod inline;
pub mod lines;

use std::path::Path;

use crate::error::NoteError;
use crate::models::{Document, NoteName};
use crate::render::ElementRenderer;

use blocks::BlockTreeBuilder;
use lines::LineBuffer;

/// Leading spaces making up one list nesting level.
pub const DEFAULT_INDENT_WIDTH: usize = 4;
/// Deepest stack of open nodes a list may reach.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Tunables for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub indent_width: usize,
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parses one note.
///
/// `filename` must contain a `YYYY-MM-DD` date; it is checked before any
/// content is read. Only the final path component is looked at.
pub fn parse_note(
    filename: &str,
    text: &str,
    renderer: &dyn ElementRenderer,
    options: &ParseOptions,
) -> Result<Document, NoteError> {
    let base = Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(filename);
    let name = NoteName::from_filename(base)?;

    let tree = BlockTreeBuilder::new(LineBuffer::from_text(text), options, renderer).build()?;
    let meta = tree.front_matter;
    Ok(Document {
        title: meta.title,
        date: name.date,
        author: meta.author,
        weather: meta.weather,
        tags: meta.tags,
        slug: name.slug,
        body: tree.body,
    })
}
