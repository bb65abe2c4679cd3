//! # Inline Filtering
//!
//! Second pass over the text accumulated by block nodes. Four patterns run
//! in fixed precedence (code span, image, link, strong), each pass scanning
//! only what earlier passes left as plain text.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSegment` enum (PlainText, CodeSpan, Strong, Link, Image)
//! - **`filter`**: `split_inline()` and the render helpers
//!
//! Fenced code never reaches this module; its content is verbatim.

pub mod filter;
pub mod types;

pub use filter::{render_inline, render_segments, split_inline};
pub use types::InlineSegment;
