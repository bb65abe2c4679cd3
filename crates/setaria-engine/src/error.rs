use crate::io::IoError;
use crate::render::RenderError;

/// Errors raised while turning one note file into a [`crate::Document`].
///
/// Every variant aborts the current note only; batch loading logs it and
/// moves on to the next file.
#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("Wrong filename format: {0}")]
    FilenameFormat(String),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Io(#[from] IoError),
}

impl NoteError {
    /// Short category label, used when summarising a batch of failures.
    pub fn category(&self) -> &'static str {
        match self {
            Self::FilenameFormat(_) => "filename",
            Self::Render(_) => "render",
            Self::Io(_) => "io",
        }
    }
}
