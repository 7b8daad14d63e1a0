//! Outline construction over all pages of a document.

use super::heading::HeadingMatcher;
use super::level::LevelTracker;
use super::noise::NoiseClassifier;
use super::normalize::TextNormalizer;
use super::InferOptions;
use crate::model::{HeadingEntry, Page};
use std::collections::HashSet;

/// Collect heading entries in page order, then line order.
///
/// Blank lines and noise are skipped. Each distinct normalized heading text
/// is emitted once, at its first occurrence. Page numbers follow the
/// position in `pages`, starting at 1.
pub fn build_outline(
    pages: &[Page],
    matcher: &HeadingMatcher,
    options: &InferOptions,
) -> Vec<HeadingEntry> {
    let noise = NoiseClassifier::new(pages, options.noise_policy);
    let normalizer = TextNormalizer::new(options.unicode_nfc);
    let mut tracker = LevelTracker::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut outline = Vec::new();

    for (index, page) in pages.iter().enumerate() {
        let page_num = index as u32 + 1;
        for raw in &page.lines {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if noise.is_noise(line) {
                log::debug!("page {}: skipping noise line {:?}", page_num, line);
                continue;
            }
            let Some(rule) = matcher.find_match(line) else {
                continue;
            };

            let text = normalizer.normalize(line);
            if seen.contains(&text) {
                continue;
            }

            let level = tracker.accept(raw);
            log::debug!(
                "page {}: heading {:?} ({} rule) -> {}",
                page_num,
                text,
                rule,
                level
            );
            seen.insert(text.clone());
            outline.push(HeadingEntry::new(level, text, page_num));
        }
    }

    outline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infer::NoisePolicy;
    use crate::model::{Document, HeadingLevel};

    fn outline(texts: &[&str], options: &InferOptions) -> Vec<HeadingEntry> {
        let doc = Document::from_pages(texts.iter());
        build_outline(&doc.pages, &HeadingMatcher::new(), options)
    }

    #[test]
    fn test_encounter_order_and_pages() {
        let entries = outline(
            &[
                "ANNUAL REVIEW\nthis is the opening paragraph.",
                "1. Introduction\nsome body text here.\nREFERENCES",
            ],
            &InferOptions::default(),
        );
        let texts: Vec<_> = entries.iter().map(|e| (e.text.as_str(), e.page)).collect();
        assert_eq!(
            texts,
            vec![
                ("ANNUAL REVIEW", 1),
                ("1. Introduction", 2),
                ("REFERENCES", 2)
            ]
        );
        assert_eq!(entries[0].level, HeadingLevel::H1);
        assert_eq!(entries[1].level, HeadingLevel::H2);
        assert_eq!(entries[2].level, HeadingLevel::H1);
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let entries = outline(
            &["Project Plan\nbody.", "Project   Plan\nbody.", "  Project Plan"],
            &InferOptions::default(),
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].page, 1);
    }

    #[test]
    fn test_indentation_drives_levels() {
        let entries = outline(
            &["Overview\n    Details Here\nClosing Notes"],
            &InferOptions::default(),
        );
        let levels: Vec<_> = entries.iter().map(|e| e.level).collect();
        assert_eq!(
            levels,
            vec![HeadingLevel::H2, HeadingLevel::H2, HeadingLevel::H1]
        );
    }

    #[test]
    fn test_indentation_carries_across_pages() {
        let entries = outline(
            &["    Indented Start", "Back At Margin"],
            &InferOptions::default(),
        );
        assert_eq!(entries[0].level, HeadingLevel::H2);
        assert_eq!(entries[1].level, HeadingLevel::H1);
    }

    #[test]
    fn test_majority_noise_is_skipped() {
        let pages = [
            "ACME CONFIDENTIAL\nMethods",
            "ACME CONFIDENTIAL\nResults",
            "ACME CONFIDENTIAL\nDiscussion",
        ];
        let strict = outline(&pages, &InferOptions::new().strict_noise());
        assert!(strict.iter().all(|e| e.text != "ACME CONFIDENTIAL"));
        assert_eq!(strict.len(), 3);

        let permissive = outline(
            &pages,
            &InferOptions::new().with_noise_policy(NoisePolicy::Permissive),
        );
        assert_eq!(permissive[0].text, "ACME CONFIDENTIAL");
        assert_eq!(permissive.len(), 4);
    }

    #[test]
    fn test_no_headings() {
        let entries = outline(&["just some body text.", ""], &InferOptions::default());
        assert!(entries.is_empty());
    }
}
