pub mod error;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::NoteError;
pub use io::{IoError, LoadReport, load_notes, read_file, scan_note_files};
pub use models::{Document, NoteIndex, NoteName};
pub use parsing::{ParseOptions, parse_note};
pub use render::{Element, ElementRenderer, RenderError, Templates};
