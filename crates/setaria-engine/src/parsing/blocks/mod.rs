//! # Block Parsing
//!
//! Single forward pass over the note's lines with a stack of open nodes.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` from its own text (header, rule, fence, quote, bullet, blank)
//!
//! 2. **Block Construction** (`builder`): a `BlockTreeBuilder` opens and closes
//!    nodes. Fences, quotes and lists take over the cursor until they end
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockNode`, `BlockKind`, `ListKind`)
//! - **`kinds`**: Per-block line patterns (Header, Rule, CodeFence, BlockQuote, Bullet)
//! - **`classify`**: `LineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockTreeBuilder` state machine
//! - **`list`**: nested list handling for the builder
//!
//! ## Key Invariants
//!
//! - A closed node's HTML lands in its parent's pending content, never elsewhere
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - List nesting is capped by `ParseOptions::max_depth`

pub mod builder;
pub mod classify;
pub mod kinds;
mod list;
pub mod types;

pub use builder::{BlockTreeBuilder, BuiltTree};
pub use classify::{LineClass, LineClassifier};
pub use types::{BlockKind, BlockNode, ListKind};
