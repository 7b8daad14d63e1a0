//! Inference options and configuration.

use crate::error::{Error, Result};

/// Page-count multiplier of the permissive noise threshold.
///
/// A line is noise once it occurs on more than this many times the page
/// count. Counting at most once per page never exceeds the page count, so
/// this threshold keeps every line.
pub const PERMISSIVE_NOISE_FACTOR: usize = 2;

/// Placeholder title used when nothing on the pages qualifies.
pub const DEFAULT_PLACEHOLDER_TITLE: &str = "Untitled";

/// How aggressively recurring lines are treated as running headers/footers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoisePolicy {
    /// Noise only above `PERMISSIVE_NOISE_FACTOR` times the page count.
    #[default]
    Permissive,
    /// Noise when the line occurs on more than half of the pages.
    /// Single-page documents have no recurring lines.
    Majority,
}

impl NoisePolicy {
    /// Number of containing pages a line must exceed to count as noise.
    pub fn threshold(&self, page_count: usize) -> usize {
        match self {
            NoisePolicy::Permissive => page_count * PERMISSIVE_NOISE_FACTOR,
            NoisePolicy::Majority if page_count < 2 => page_count,
            NoisePolicy::Majority => page_count / 2,
        }
    }
}

/// Options for title and outline inference.
#[derive(Debug, Clone)]
pub struct InferOptions {
    /// Recurring-line policy for the outline
    pub noise_policy: NoisePolicy,

    /// Title/repetition candidates must be longer than this (characters)
    pub min_line_len: usize,

    /// Title/repetition candidates must be shorter than this (characters)
    pub max_line_len: usize,

    /// Lines longer than this are prominent regardless of case
    pub prominent_length: usize,

    /// Title used when no candidate is found
    pub placeholder_title: String,

    /// Apply Unicode NFC when normalizing text
    pub unicode_nfc: bool,
}

impl InferOptions {
    /// Create new inference options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the noise policy.
    pub fn with_noise_policy(mut self, policy: NoisePolicy) -> Self {
        self.noise_policy = policy;
        self
    }

    /// Treat lines recurring on most pages as noise.
    pub fn strict_noise(mut self) -> Self {
        self.noise_policy = NoisePolicy::Majority;
        self
    }

    /// Set exclusive length bounds for title candidates.
    pub fn with_line_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_line_len = min;
        self.max_line_len = max;
        self
    }

    /// Set the length above which a line is always prominent.
    pub fn with_prominent_length(mut self, len: usize) -> Self {
        self.prominent_length = len;
        self
    }

    /// Set the placeholder title.
    pub fn with_placeholder_title(mut self, title: impl Into<String>) -> Self {
        self.placeholder_title = title.into();
        self
    }

    /// Enable or disable Unicode NFC normalization.
    pub fn with_unicode_nfc(mut self, enabled: bool) -> Self {
        self.unicode_nfc = enabled;
        self
    }

    /// Check the options for values that would break result invariants.
    pub fn validate(&self) -> Result<()> {
        if self.placeholder_title.trim().is_empty() {
            return Err(Error::InvalidOption(
                "placeholder title must not be empty".into(),
            ));
        }
        if self.min_line_len >= self.max_line_len {
            return Err(Error::InvalidOption(format!(
                "line bounds ({}, {}) leave no valid length",
                self.min_line_len, self.max_line_len
            )));
        }
        Ok(())
    }

    /// Whether a trimmed line falls strictly inside the candidate bounds.
    pub(crate) fn within_bounds(&self, line: &str) -> bool {
        let len = line.chars().count();
        len > self.min_line_len && len < self.max_line_len
    }
}

impl Default for InferOptions {
    fn default() -> Self {
        Self {
            noise_policy: NoisePolicy::Permissive,
            min_line_len: 5,
            max_line_len: 100,
            prominent_length: 20,
            placeholder_title: DEFAULT_PLACEHOLDER_TITLE.to_string(),
            unicode_nfc: false,
        }
    }
}
