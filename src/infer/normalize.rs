//! Canonical form of a text line.

use unicode_normalization::UnicodeNormalization;

/// Collapse every whitespace run to a single space and trim both ends.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(word);
    }
    result
}

/// Line normalizer with optional Unicode composition.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    nfc: bool,
}

impl TextNormalizer {
    /// Create a normalizer; `nfc` additionally composes to Unicode NFC.
    pub fn new(nfc: bool) -> Self {
        Self { nfc }
    }

    /// Normalize a raw line.
    pub fn normalize(&self, text: &str) -> String {
        if self.nfc {
            let composed: String = text.nfc().collect();
            normalize(&composed)
        } else {
            normalize(text)
        }
    }
}
