pub mod document;
pub mod index;
pub mod note_name;

pub use document::Document;
pub use index::NoteIndex;
pub use note_name::NoteName;
