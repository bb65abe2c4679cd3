use std::collections::BTreeSet;

/// The source lines of one note with a cursor and a record of blank lines.
///
/// Owned by a single parse. Line endings (`\n`, `\r\n`) are stripped.
/// Reading outside `0..total()` is a bug in the caller and panics.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    lines: Vec<String>,
    cursor: usize,
    blanks: BTreeSet<usize>,
}

impl LineBuffer {
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self {
            lines,
            cursor: 0,
            blanks: BTreeSet::new(),
        }
    }

    pub fn total(&self) -> usize {
        self.lines.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the cursor still points at a line.
    pub fn has_current(&self) -> bool {
        self.cursor < self.lines.len()
    }

    /// # Panics
    /// If the cursor is past the last line.
    pub fn current(&self) -> &str {
        self.line(self.cursor)
    }

    /// # Panics
    /// If `n` is out of bounds.
    pub fn line(&self, n: usize) -> &str {
        &self.lines[n]
    }

    /// Moves the cursor to one past its current line.
    pub fn advance(&mut self) {
        self.cursor += 1;
    }

    /// Repositions the cursor on line `n` and returns that line.
    ///
    /// # Panics
    /// If `n` is out of bounds.
    pub fn jumpto(&mut self, n: usize) -> &str {
        assert!(
            n < self.lines.len(),
            "jump to line {n} past end of {} lines",
            self.lines.len()
        );
        self.cursor = n;
        &self.lines[n]
    }

    pub fn mark_blank(&mut self, n: usize) {
        self.blanks.insert(n);
    }

    pub fn is_blank(&self, n: usize) -> bool {
        self.blanks.contains(&n)
    }

    /// Number of consecutive blank-marked lines ending at `n`, counting back.
    ///
    /// Zero means line `n` itself is not blank, so whatever follows it is
    /// still attached to the preceding content.
    pub fn backward_blanks(&self, n: usize) -> usize {
        self.blanks
            .range(..=n)
            .rev()
            .zip((0..=n).rev())
            .take_while(|(blank, expected)| *blank == expected)
            .count()
    }
}
