use regex::Regex;
use std::sync::LazyLock;

use crate::error::NoteError;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])").unwrap()
});
static NON_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());

/// Date and slug carried by a note's file name, e.g. `2016-06-03_HelloWorld.note`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteName {
    pub date: String,
    pub slug: String,
}

impl NoteName {
    /// `filename` is a bare file name, without directories.
    pub fn from_filename(filename: &str) -> Result<Self, NoteError> {
        let date = DATE_RE
            .find(filename)
            .ok_or_else(|| NoteError::FilenameFormat(filename.to_string()))?
            .as_str()
            .to_string();
        Ok(Self {
            date,
            slug: slugify(filename),
        })
    }
}

/// File stem with every run of non-word characters replaced by `_`.
pub fn slugify(filename: &str) -> String {
    let stem = match filename.rfind('.') {
        Some(dot) if dot > 0 => &filename[..dot],
        _ => filename,
    };
    NON_WORD_RE.replace_all(stem, "_").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2016-06-03_HelloWorld.note", "2016-06-03", "2016_06_03_HelloWorld")]
    #[case("notes-2020-12-31.md", "2020-12-31", "notes_2020_12_31")]
    #[case("2021-01-01 new year!.note", "2021-01-01", "2021_01_01_new_year_")]
    #[case("2022-02-02_日记.note", "2022-02-02", "2022_02_02_日记")]
    #[case("2023-05-06", "2023-05-06", "2023_05_06")]
    fn parses_date_and_slug(#[case] filename: &str, #[case] date: &str, #[case] slug: &str) {
        let name = NoteName::from_filename(filename).unwrap();
        assert_eq!(name.date, date);
        assert_eq!(name.slug, slug);
    }

    #[rstest]
    #[case("hello.note")]
    #[case("2016-13-01.note")]
    #[case("2016-06-00.note")]
    #[case("16-06-03.note")]
    fn rejects_missing_date(#[case] filename: &str) {
        let err = NoteName::from_filename(filename).unwrap_err();
        assert!(matches!(err, NoteError::FilenameFormat(ref name) if name == filename));
    }

    #[test]
    fn only_last_extension_is_dropped() {
        assert_eq!(slugify("2020-01-01.draft.note"), "2020_01_01_draft");
    }
}
