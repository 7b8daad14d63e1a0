//! Running header/footer detection.

use super::NoisePolicy;
use crate::model::Page;

/// Classifies lines that recur across pages as boilerplate.
///
/// A line is noise when the number of pages whose raw text contains it
/// exceeds the policy threshold.
#[derive(Debug)]
pub struct NoiseClassifier {
    page_texts: Vec<String>,
    threshold: usize,
}

impl NoiseClassifier {
    /// Prepare a classifier over all pages of one document.
    pub fn new(pages: &[Page], policy: NoisePolicy) -> Self {
        Self {
            page_texts: pages.iter().map(Page::text).collect(),
            threshold: policy.threshold(pages.len()),
        }
    }

    /// Threshold a line's page count must exceed.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Number of pages whose raw text contains `line`.
    pub fn page_count_containing(&self, line: &str) -> usize {
        self.page_texts
            .iter()
            .filter(|text| text.contains(line))
            .count()
    }

    /// Check whether a trimmed line is noise.
    pub fn is_noise(&self, line: &str) -> bool {
        // The count can never exceed the number of pages.
        if self.threshold >= self.page_texts.len() {
            return false;
        }
        self.page_count_containing(line) > self.threshold
    }
}
