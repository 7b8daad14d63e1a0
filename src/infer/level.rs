//! Heading level inference from indentation and text clues.

use super::heading::is_shout_case;
use crate::model::{HeadingLevel, Page};

/// Assign a level to a heading candidate.
///
/// `indent` is the candidate's leading-space count and `prev_indent` that of
/// the previously accepted heading. Deeper indentation nests, shallower
/// indentation climbs back to the top. At equal indentation a colon marks a
/// third-level heading and shout-case a top-level one.
pub fn assign_level(line: &str, indent: usize, prev_indent: usize) -> HeadingLevel {
    if indent > prev_indent {
        HeadingLevel::H2
    } else if indent < prev_indent {
        HeadingLevel::H1
    } else if line.contains(':') {
        HeadingLevel::H3
    } else if is_shout_case(line) {
        HeadingLevel::H1
    } else {
        HeadingLevel::H2
    }
}

/// Indentation of the last accepted heading within one document.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelTracker {
    prev_indent: usize,
}

impl LevelTracker {
    /// Start tracking a new document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indentation of the last accepted heading.
    pub fn prev_indent(&self) -> usize {
        self.prev_indent
    }

    /// Assign a level to an accepted heading and remember its indentation.
    pub fn accept(&mut self, raw_line: &str) -> HeadingLevel {
        let indent = Page::indent_of(raw_line);
        let level = assign_level(raw_line.trim(), indent, self.prev_indent);
        self.prev_indent = indent;
        level
    }
}
