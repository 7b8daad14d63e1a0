//! # unoutline
//!
//! Document title and heading outline inference from paginated plain text.
//!
//! The input is what a text renderer such as `pdftotext -layout` produces:
//! page texts with their original line breaks and indentation. The output is
//! a title plus an ordered list of headings, each with a level (H1-H3) and
//! the page it first appears on.
//!
//! ## Quick Start
//!
//! ```
//! use unoutline::extract_outline;
//!
//! fn main() -> unoutline::Result<()> {
//!     let result = extract_outline(&[
//!         "ACME QUARTERLY REPORT\nprepared by finance.",
//!         "1. Introduction\nrevenue grew.",
//!     ])?;
//!
//!     assert_eq!(result.title, "ACME QUARTERLY REPORT");
//!     assert_eq!(result.outline[1].text, "1. Introduction");
//!     assert_eq!(result.outline[1].page, 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Title resolution**: prominent first-page line, running header, or placeholder
//! - **Heading detection**: ordered, individually testable rules
//! - **Level inference**: indentation deltas plus colon/shout-case clues
//! - **Noise filtering**: configurable running header/footer policy
//! - **Batch processing**: worker pool over many documents with per-document failures

pub mod batch;
pub mod error;
pub mod infer;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use batch::{
    BatchFailure, BatchOptions, BatchProcessor, BatchReport, JsonDirSink, PageSource,
    ResultSink, TextDirSource,
};
pub use error::{Error, Result};
pub use infer::{DocumentProcessor, HeadingMatcher, HeadingRule, InferOptions, NoisePolicy};
pub use model::{Document, HeadingEntry, HeadingLevel, Page, StructuralResult};
pub use render::JsonFormat;

use std::path::Path;

/// Extract title and outline from per-page texts with default options.
///
/// # Example
///
/// ```
/// use unoutline::{extract_outline, Error};
///
/// let empty: [&str; 0] = [];
/// assert!(matches!(extract_outline(&empty), Err(Error::EmptyDocument)));
/// ```
pub fn extract_outline<S: AsRef<str>>(pages: &[S]) -> Result<StructuralResult> {
    DocumentProcessor::new().process_document(&Document::from_pages(pages))
}

/// Extract title and outline from renderer output with form-feed page breaks.
pub fn extract_outline_from_text(text: &str) -> Result<StructuralResult> {
    DocumentProcessor::new().process_text(text)
}

/// Extract title and outline from a renderer dump on disk.
///
/// # Example
///
/// ```no_run
/// use unoutline::extract_outline_from_file;
///
/// let result = extract_outline_from_file("report.txt").unwrap();
/// println!("{}: {} headings", result.title, result.outline.len());
/// ```
pub fn extract_outline_from_file<P: AsRef<Path>>(path: P) -> Result<StructuralResult> {
    let bytes = std::fs::read(path)?;
    extract_outline_from_text(&String::from_utf8_lossy(&bytes))
}

/// Builder for configuring and running outline extraction.
///
/// # Example
///
/// ```
/// use unoutline::{JsonFormat, Unoutline};
///
/// let json = Unoutline::new()
///     .strict_noise()
///     .with_placeholder_title("Unknown")
///     .process_text("Chapter 1\nintro text.")?
///     .to_json(JsonFormat::Compact)?;
/// assert!(json.contains("\"title\":\"Unknown\""));
/// # Ok::<(), unoutline::Error>(())
/// ```
pub struct Unoutline {
    options: InferOptions,
    matcher: HeadingMatcher,
}

impl Unoutline {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            options: InferOptions::default(),
            matcher: HeadingMatcher::new(),
        }
    }

    /// Treat lines recurring on most pages as noise.
    pub fn strict_noise(mut self) -> Self {
        self.options = self.options.strict_noise();
        self
    }

    /// Set the noise policy.
    pub fn with_noise_policy(mut self, policy: NoisePolicy) -> Self {
        self.options = self.options.with_noise_policy(policy);
        self
    }

    /// Set the placeholder title.
    pub fn with_placeholder_title(mut self, title: impl Into<String>) -> Self {
        self.options = self.options.with_placeholder_title(title);
        self
    }

    /// Enable Unicode NFC normalization of titles and headings.
    pub fn with_unicode_nfc(mut self) -> Self {
        self.options = self.options.with_unicode_nfc(true);
        self
    }

    /// Add a heading rule tried after the built-in ones.
    pub fn with_heading_rule(mut self, rule: HeadingRule) -> Self {
        self.matcher = self.matcher.with_rule(rule);
        self
    }

    /// Build the configured processor.
    pub fn build(self) -> Result<DocumentProcessor> {
        Ok(DocumentProcessor::with_options(self.options)?.with_matcher(self.matcher))
    }

    /// Process a parsed document.
    pub fn process(self, document: &Document) -> Result<UnoutlineResult> {
        let result = self.build()?.process_document(document)?;
        Ok(UnoutlineResult { result })
    }

    /// Process renderer output with form-feed page breaks.
    pub fn process_text(self, text: &str) -> Result<UnoutlineResult> {
        self.process(&Document::from_text(text))
    }

    /// Process a renderer dump on disk.
    pub fn process_file<P: AsRef<Path>>(self, path: P) -> Result<UnoutlineResult> {
        let bytes = std::fs::read(path)?;
        self.process_text(&String::from_utf8_lossy(&bytes))
    }
}

impl Default for Unoutline {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of processing one document.
pub struct UnoutlineResult {
    result: StructuralResult,
}

impl UnoutlineResult {
    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.result, format)
    }

    /// Document title.
    pub fn title(&self) -> &str {
        &self.result.title
    }

    /// Get the structural result.
    pub fn result(&self) -> &StructuralResult {
        &self.result
    }

    /// Take ownership of the structural result.
    pub fn into_result(self) -> StructuralResult {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unoutline_builder() {
        let builder = Unoutline::new()
            .strict_noise()
            .with_placeholder_title("Unknown")
            .with_unicode_nfc();

        assert_eq!(builder.options.noise_policy, NoisePolicy::Majority);
        assert_eq!(builder.options.placeholder_title, "Unknown");
        assert!(builder.options.unicode_nfc);
    }

    #[test]
    fn test_unoutline_builder_default() {
        let builder = Unoutline::default();
        assert_eq!(builder.options.noise_policy, NoisePolicy::Permissive);
        assert_eq!(builder.matcher.rules().len(), 4);
    }

    #[test]
    fn test_builder_with_heading_rule() {
        let rule = HeadingRule::new("roman", r"^[IVX]+\.\s+\S").unwrap();
        let result = Unoutline::new()
            .with_heading_rule(rule)
            .process_text("iv. lowercase body\nIV. findings, in short")
            .unwrap();
        assert_eq!(result.result().outline.len(), 1);
        assert_eq!(result.result().outline[0].text, "IV. findings, in short");
    }

    #[test]
    fn test_builder_rejects_empty_placeholder() {
        let result = Unoutline::new()
            .with_placeholder_title("")
            .process_text("anything");
        assert!(matches!(result, Err(Error::InvalidOption(_))));
    }

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_extract_outline_empty() {
        let pages: Vec<String> = Vec::new();
        assert!(matches!(extract_outline(&pages), Err(Error::EmptyDocument)));
    }

    #[test]
    fn test_extract_outline_from_text_empty() {
        assert!(matches!(
            extract_outline_from_text(""),
            Err(Error::EmptyDocument)
        ));
    }

    #[test]
    fn test_extract_outline_single_page() {
        let result = extract_outline(&["no headings here."]).unwrap();
        assert_eq!(result.title, "Untitled");
        assert!(result.outline.is_empty());
    }

    #[test]
    fn test_extract_outline_from_missing_file() {
        let result = extract_outline_from_file("/definitely/not/here.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_result_into_json() {
        let json = Unoutline::new()
            .process_text("REFERENCES")
            .unwrap()
            .to_json(JsonFormat::Compact)
            .unwrap();
        assert_eq!(
            json,
            r#"{"title":"REFERENCES","outline":[{"level":"H1","text":"REFERENCES","page":1}]}"#
        );
    }
}
