use regex::Regex;
use std::sync::LazyLock;

use crate::parsing::blocks::types::ListKind;

static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ \t]*)([*+-]|\d+\.) {1,3}(\S.*?)\s*$").unwrap());

/// A list item line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bullet {
    pub kind: ListKind,
    /// Leading indentation quantized to indent units.
    pub indent: usize,
    pub text: String,
}

impl Bullet {
    pub fn parse(line: &str, indent_width: usize) -> Option<Self> {
        let caps = BULLET_RE.captures(line)?;
        let kind = if caps[2].ends_with('.') {
            ListKind::Ordered
        } else {
            ListKind::Unordered
        };
        Some(Self {
            kind,
            indent: indent_units(&caps[1], indent_width),
            text: caps[3].to_string(),
        })
    }
}

/// Counts indent units in leading whitespace.
///
/// A tab completes the unit in progress. A partial unit left at the end
/// rounds up to a whole one.
pub fn indent_units(leading: &str, indent_width: usize) -> usize {
    let width = indent_width.max(1);
    let mut units = 0;
    let mut acc = 0;
    for ch in leading.chars() {
        match ch {
            ' ' => acc += 1,
            '\t' => acc = width,
            _ => break,
        }
        if acc >= width {
            units += 1;
            acc = 0;
        }
    }
    if acc > 0 {
        units += 1;
    }
    units
}
