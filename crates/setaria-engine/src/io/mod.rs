use rayon::prelude::*;
use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::NoteError;
use crate::models::Document;
use crate::parsing::{ParseOptions, parse_note};
use crate::render::ElementRenderer;

/// File extensions recognised as notes.
pub const NOTE_EXTENSIONS: [&str; 2] = ["note", "md"];

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
}

/// Outcome of loading a notes directory.
///
/// A note that fails to load is recorded in `failures` and never stops the
/// rest of the batch.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub notes: Vec<Document>,
    pub failures: Vec<(PathBuf, NoteError)>,
}

/// Read a note file and return its content
pub fn read_file(relative_path: &RelativePath, notes_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(notes_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Scan for note files in the notes directory
pub fn scan_note_files(notes_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !notes_root.exists() {
        return Err(IoError::InvalidNotesDir(
            "notes directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(notes_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if is_note_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

fn is_note_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| NOTE_EXTENSIONS.contains(&ext))
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidNotesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

/// Reads and parses every note under `notes_root` in parallel.
///
/// Successfully parsed notes come back in scan order.
pub fn load_notes(
    notes_root: &Path,
    renderer: &dyn ElementRenderer,
    options: &ParseOptions,
) -> Result<LoadReport, IoError> {
    validate_notes_dir(notes_root)?;
    let files = scan_note_files(notes_root)?;
    log::debug!("Found {} note files under {}", files.len(), notes_root.display());

    let results: Vec<(PathBuf, Result<Document, NoteError>)> = files
        .into_par_iter()
        .map(|path| {
            let result = load_note(&path, renderer, options);
            (path, result)
        })
        .collect();

    let mut report = LoadReport::default();
    for (path, result) in results {
        match result {
            Ok(doc) => report.notes.push(doc),
            Err(e) => {
                log::warn!("Skipping {}: {e}", path.display());
                report.failures.push((path, e));
            }
        }
    }

    log::info!(
        "Loaded {} notes ({} failed) from {}",
        report.notes.len(),
        report.failures.len(),
        notes_root.display()
    );
    Ok(report)
}

fn load_note(
    path: &Path,
    renderer: &dyn ElementRenderer,
    options: &ParseOptions,
) -> Result<Document, NoteError> {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let text = fs::read_to_string(path).map_err(IoError::Io)?;
    parse_note(&filename, &text, renderer, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Templates;
    use crate::tests::{create_test_file, create_test_notes_dir};

    #[test]
    fn test_scan_note_files() {
        // Given a notes directory with note files
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "2020-01-01-a.note", "A");
        create_test_file(&notes_dir, "2020-01-02-b.md", "B");

        // When scanning for files
        let files = scan_note_files(notes_dir.path()).unwrap();

        // Then both extensions are found, sorted
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].file_name().unwrap(), "2020-01-01-a.note");
        assert_eq!(files[1].file_name().unwrap(), "2020-01-02-b.md");
    }

    #[test]
    fn test_handle_invalid_notes_directory() {
        let nonexistent_path = PathBuf::from("/this/path/does/not/exist");

        let result = scan_note_files(&nonexistent_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("notes directory"));
    }

    #[test]
    fn test_scan_nested_directories() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "root.note", "Root");
        create_test_file(&notes_dir, "2021/nested.note", "Nested");

        let files = scan_note_files(notes_dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.file_name().unwrap() == "root.note"));
        assert!(files.iter().any(|f| f.file_name().unwrap() == "nested.note"));
    }

    #[test]
    fn test_ignore_other_files() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "2020-01-01.note", "Note");
        create_test_file(&notes_dir, "image.png", "fake image data");
        create_test_file(&notes_dir, "config.json", "{}");

        let files = scan_note_files(notes_dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "2020-01-01.note");
    }

    #[test]
    fn test_validate_notes_dir() {
        let notes_dir = create_test_notes_dir();
        assert!(validate_notes_dir(notes_dir.path()).is_ok());

        let result = validate_notes_dir(Path::new("/nonexistent/path"));
        assert!(matches!(result, Err(IoError::InvalidNotesDir(_))));
    }

    #[test]
    fn test_read_file_success() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "test.note", "Title\n\nParagraph");

        let content = read_file(RelativePath::new("test.note"), notes_dir.path()).unwrap();
        assert_eq!(content, "Title\n\nParagraph");
    }

    #[test]
    fn test_read_file_not_found() {
        let notes_dir = create_test_notes_dir();
        let result = read_file(RelativePath::new("nonexistent.note"), notes_dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_load_notes_skips_bad_files() {
        // Given one good note and one without a date in its name
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "2020-05-01-good.note", "Good\nTags: a\n\nbody");
        create_test_file(&notes_dir, "undated.note", "Bad");

        // When loading the directory
        let report = load_notes(
            notes_dir.path(),
            &Templates::builtin(),
            &ParseOptions::default(),
        )
        .unwrap();

        // Then the good note loads and the bad one is reported
        assert_eq!(report.notes.len(), 1);
        assert_eq!(report.notes[0].title, "Good");
        assert_eq!(report.notes[0].body, "<p>body</p>");
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].0.ends_with("undated.note"));
        assert_eq!(report.failures[0].1.category(), "filename");
    }

    #[test]
    fn test_load_notes_keeps_scan_order() {
        let notes_dir = create_test_notes_dir();
        for day in 1..=9 {
            create_test_file(
                &notes_dir,
                &format!("2020-01-0{day}.note"),
                &format!("Day {day}"),
            );
        }

        let report = load_notes(
            notes_dir.path(),
            &Templates::builtin(),
            &ParseOptions::default(),
        )
        .unwrap();

        let titles: Vec<&str> = report.notes.iter().map(|n| n.title.as_str()).collect();
        let expected: Vec<String> = (1..=9).map(|day| format!("Day {day}")).collect();
        assert_eq!(titles, expected);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_load_notes_invalid_dir() {
        let result = load_notes(
            Path::new("/nonexistent/path"),
            &Templates::builtin(),
            &ParseOptions::default(),
        );
        assert!(matches!(result, Err(IoError::InvalidNotesDir(_))));
    }
}
