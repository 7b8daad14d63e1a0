//! Document title resolution.

use super::normalize::TextNormalizer;
use super::prominence::is_prominent;
use super::repetition::find_repeated_line;
use super::{InferOptions, DEFAULT_PLACEHOLDER_TITLE};
use crate::model::Page;

/// Where a resolved title came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSource {
    /// A prominent line on the first page
    FirstPage,
    /// A line repeated on most pages
    Repeated,
    /// Nothing qualified
    Placeholder,
}

/// Resolve the title and report which rule produced it.
///
/// The first prominent in-bounds line of page one wins. Failing that, a
/// line repeated on most pages is used, and failing that the placeholder.
pub fn resolve_title_with_source(pages: &[Page], options: &InferOptions) -> (String, TitleSource) {
    let normalizer = TextNormalizer::new(options.unicode_nfc);

    if let Some(first) = pages.first() {
        let candidate = first
            .lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && options.within_bounds(line))
            .find(|line| is_prominent(line, options.prominent_length));
        if let Some(line) = candidate {
            return (normalizer.normalize(line), TitleSource::FirstPage);
        }
    }

    if let Some(repeated) = find_repeated_line(pages, options) {
        let title = normalizer.normalize(&repeated);
        if !title.is_empty() {
            return (title, TitleSource::Repeated);
        }
    }

    let placeholder = options.placeholder_title.trim();
    if placeholder.is_empty() {
        return (DEFAULT_PLACEHOLDER_TITLE.to_string(), TitleSource::Placeholder);
    }
    (placeholder.to_string(), TitleSource::Placeholder)
}

/// Resolve the document title. Never empty.
pub fn resolve_title(pages: &[Page], options: &InferOptions) -> String {
    resolve_title_with_source(pages, options).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;

    fn resolve(texts: &[&str]) -> (String, TitleSource) {
        let doc = Document::from_pages(texts.iter());
        resolve_title_with_source(&doc.pages, &InferOptions::default())
    }

    #[test]
    fn test_first_prominent_line_wins() {
        let (title, source) = resolve(&[
            "draft\n  QUARTERLY   RESULTS  \nA Second Prominent Line Here",
        ]);
        assert_eq!(title, "QUARTERLY RESULTS");
        assert_eq!(source, TitleSource::FirstPage);
    }

    #[test]
    fn test_long_mixed_case_line() {
        let (title, _) = resolve(&["page 1\nbuilding a better widget factory"]);
        assert_eq!(title, "building a better widget factory");
    }

    #[test]
    fn test_falls_back_to_repeated_line() {
        let (title, source) = resolve(&[
            "12\nbody text",
            "Widget Co.\nmore text",
            "Widget Co.\nend",
        ]);
        assert_eq!(title, "Widget Co.");
        assert_eq!(source, TitleSource::Repeated);
    }

    #[test]
    fn test_placeholder() {
        let (title, source) = resolve(&["12\nshort", "13"]);
        assert_eq!(title, "Untitled");
        assert_eq!(source, TitleSource::Placeholder);
    }

    #[test]
    fn test_custom_placeholder() {
        let doc = Document::from_pages([""]);
        let options = InferOptions::new().with_placeholder_title("No Title");
        assert_eq!(resolve_title(&doc.pages, &options), "No Title");
    }

    #[test]
    fn test_blank_placeholder_falls_back_to_default() {
        let doc = Document::from_pages(["12"]);
        for placeholder in ["", "   "] {
            let options = InferOptions::new().with_placeholder_title(placeholder);
            let (title, source) = resolve_title_with_source(&doc.pages, &options);
            assert_eq!(title, DEFAULT_PLACEHOLDER_TITLE);
            assert_eq!(source, TitleSource::Placeholder);
        }
    }

    #[test]
    fn test_no_pages_yields_placeholder() {
        assert_eq!(resolve_title(&[], &InferOptions::default()), "Untitled");
    }
}
