//! Structural result types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Heading hierarchy level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top level
    H1,
    /// Second level
    H2,
    /// Third level
    H3,
}

impl HeadingLevel {
    /// Level as its output label.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A heading found in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingEntry {
    /// Inferred hierarchy level
    pub level: HeadingLevel,

    /// Normalized heading text
    pub text: String,

    /// Page the heading first appears on (1-indexed)
    pub page: u32,
}

impl HeadingEntry {
    /// Create a new heading entry.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// Title and outline of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralResult {
    /// Document title (never empty)
    pub title: String,

    /// Headings in encounter order
    pub outline: Vec<HeadingEntry>,
}

impl StructuralResult {
    /// Create a new result.
    pub fn new(title: impl Into<String>, outline: Vec<HeadingEntry>) -> Self {
        Self {
            title: title.into(),
            outline,
        }
    }

    /// Number of headings in the outline.
    pub fn heading_count(&self) -> usize {
        self.outline.len()
    }
}
