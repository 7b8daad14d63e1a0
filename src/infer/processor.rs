//! Per-document entry point of the inference engine.

use super::heading::HeadingMatcher;
use super::outline::build_outline;
use super::title::resolve_title_with_source;
use super::InferOptions;
use crate::error::{Error, Result};
use crate::model::{Document, Page, StructuralResult};

/// Infers the title and outline of one document at a time.
///
/// Holds only immutable configuration, so one processor can be shared
/// across threads and used for many documents concurrently.
#[derive(Debug, Clone)]
pub struct DocumentProcessor {
    options: InferOptions,
    matcher: HeadingMatcher,
}

impl DocumentProcessor {
    /// Create a processor with default options and heading rules.
    pub fn new() -> Self {
        Self {
            options: InferOptions::default(),
            matcher: HeadingMatcher::new(),
        }
    }

    /// Create a processor with custom options.
    pub fn with_options(options: InferOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            matcher: HeadingMatcher::new(),
        })
    }

    /// Replace the heading rules.
    pub fn with_matcher(mut self, matcher: HeadingMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Active options.
    pub fn options(&self) -> &InferOptions {
        &self.options
    }

    /// Produce the structural result for the pages of one document.
    ///
    /// Fails only with [`Error::EmptyDocument`] when there are no pages.
    pub fn process(&self, pages: &[Page]) -> Result<StructuralResult> {
        if pages.is_empty() {
            return Err(Error::EmptyDocument);
        }

        let (title, source) = resolve_title_with_source(pages, &self.options);
        log::debug!("title {:?} from {:?}", title, source);

        let outline = build_outline(pages, &self.matcher, &self.options);
        log::debug!(
            "outline has {} headings over {} pages",
            outline.len(),
            pages.len()
        );

        Ok(StructuralResult { title, outline })
    }

    /// Process a parsed document.
    pub fn process_document(&self, document: &Document) -> Result<StructuralResult> {
        self.process(&document.pages)
    }

    /// Process renderer output with form-feed page breaks.
    pub fn process_text(&self, text: &str) -> Result<StructuralResult> {
        self.process_document(&Document::from_text(text))
    }
}

impl Default for DocumentProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeadingLevel;

    #[test]
    fn test_empty_document() {
        let processor = DocumentProcessor::new();
        assert!(matches!(processor.process(&[]), Err(Error::EmptyDocument)));
        assert!(matches!(
            processor.process_text(""),
            Err(Error::EmptyDocument)
        ));
    }

    #[test]
    fn test_blank_single_page() {
        let result = DocumentProcessor::new().process_text("\n   \n").unwrap();
        assert_eq!(result.title, "Untitled");
        assert!(result.outline.is_empty());
    }

    #[test]
    fn test_process_text() {
        let text = "ACME QUARTERLY REPORT\nprepared by finance.\n\x0C\
                    ACME QUARTERLY REPORT\n1. Introduction\nrevenue grew.\n\x0C";
        let result = DocumentProcessor::new().process_text(text).unwrap();
        assert_eq!(result.title, "ACME QUARTERLY REPORT");
        assert_eq!(result.outline.len(), 2);
        assert_eq!(result.outline[1].text, "1. Introduction");
        assert_eq!(result.outline[1].level, HeadingLevel::H2);
        assert_eq!(result.outline[1].page, 2);
    }

    #[test]
    fn test_rejects_invalid_options() {
        let options = InferOptions::new().with_placeholder_title("");
        assert!(DocumentProcessor::with_options(options).is_err());
    }

    #[test]
    fn test_custom_matcher() {
        let processor = DocumentProcessor::new().with_matcher(HeadingMatcher::empty());
        let result = processor.process_text("REFERENCES\nChapter 1").unwrap();
        assert!(result.outline.is_empty());
    }
}
