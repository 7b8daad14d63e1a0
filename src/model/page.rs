//! Page-level types.

use serde::{Deserialize, Serialize};

/// Page break emitted by text renderers such as `pdftotext`.
pub const PAGE_BREAK: char = '\x0C';

/// A single rendered page: raw lines in reading order.
///
/// Leading whitespace is kept as the renderer produced it, since indentation
/// drives heading level inference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Raw lines of the page
    pub lines: Vec<String>,
}

impl Page {
    /// Create a page from its raw text, splitting on line breaks.
    pub fn from_text(number: u32, text: &str) -> Self {
        let lines = text.lines().map(str::to_string).collect();
        Self { number, lines }
    }

    /// Raw page text, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Number of leading space characters of a raw line.
    pub fn indent_of(line: &str) -> usize {
        line.len() - line.trim_start_matches(' ').len()
    }
}

/// All pages of one document, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Pages in the document
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from per-page texts, numbering pages from 1.
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pages = pages
            .into_iter()
            .enumerate()
            .map(|(i, text)| Page::from_text(i as u32 + 1, text.as_ref()))
            .collect();
        Self { pages }
    }

    /// Build a document from renderer output where pages are separated by
    /// form feeds.
    ///
    /// The renderer terminates every page with a form feed, so the empty
    /// segment after the last one is not a page.
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            return Self::new();
        }
        let mut segments: Vec<&str> = text.split(PAGE_BREAK).collect();
        if segments.len() > 1 && segments.last().is_some_and(|s| s.trim().is_empty()) {
            segments.pop();
        }
        Self::from_pages(segments)
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
