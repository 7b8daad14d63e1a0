//! Heading candidate detection.
//!
//! A line is a heading candidate when any rule of an ordered rule list
//! matches it. Rules are tried in order and the first match wins.

use crate::error::{Error, Result};
use regex::Regex;

/// Structural keywords that open a heading.
pub const STRUCTURAL_KEYWORDS: &[&str] = &[
    "Section",
    "Chapter",
    "Part",
    "Appendix",
    "Introduction",
    "Conclusion",
    "Abstract",
    "Summary",
    "References",
    "Bibliography",
];

/// One named heading shape.
#[derive(Debug, Clone)]
pub struct HeadingRule {
    name: &'static str,
    pattern: Regex,
}

impl HeadingRule {
    /// Create a rule from a regular expression.
    pub fn new(name: &'static str, pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| Error::InvalidOption(format!("heading rule {}: {}", name, e)))?;
        Ok(Self { name, pattern })
    }

    /// Rule name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check a trimmed line against this rule.
    pub fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }

    /// `Chapter 3`, `Appendix A`, `References`.
    pub fn keyword() -> Self {
        let pattern = format!(
            r"^(?:{})(?:\s+[A-Z\d]*|$)",
            STRUCTURAL_KEYWORDS.join("|")
        );
        Self {
            name: "keyword",
            pattern: Regex::new(&pattern).unwrap(),
        }
    }

    /// `Background and Scope`: capitalized short phrase.
    pub fn titled_phrase() -> Self {
        Self {
            name: "titled-phrase",
            pattern: Regex::new(r"^[A-Z][A-Za-z\s\-:.\d]{3,}$").unwrap(),
        }
    }

    /// `1. Introduction`, `2 Methods`.
    pub fn numbered() -> Self {
        Self {
            name: "numbered",
            pattern: Regex::new(r"^\d+\.?\s+[A-Z][A-Za-z\s\-:.\d]{3,}").unwrap(),
        }
    }

    /// `REFERENCES`, `TABLE OF CONTENTS`.
    pub fn shout_case() -> Self {
        Self {
            name: "shout-case",
            pattern: Regex::new(r"^[A-Z\s]{3,}$").unwrap(),
        }
    }
}

/// Ordered list of heading rules.
#[derive(Debug, Clone)]
pub struct HeadingMatcher {
    rules: Vec<HeadingRule>,
}

impl HeadingMatcher {
    /// Create a matcher with the built-in rules.
    pub fn new() -> Self {
        Self {
            rules: vec![
                HeadingRule::keyword(),
                HeadingRule::titled_phrase(),
                HeadingRule::numbered(),
                HeadingRule::shout_case(),
            ],
        }
    }

    /// Create a matcher with no rules.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule, tried after the existing ones.
    pub fn with_rule(mut self, rule: HeadingRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[HeadingRule] {
        &self.rules
    }

    /// Name of the first rule matching a trimmed line, if any.
    pub fn find_match(&self, line: &str) -> Option<&'static str> {
        if line.is_empty() {
            return None;
        }
        self.rules
            .iter()
            .find(|rule| rule.matches(line))
            .map(HeadingRule::name)
    }

    /// Check whether a trimmed line is a heading candidate.
    pub fn is_candidate(&self, line: &str) -> bool {
        self.find_match(line).is_some()
    }
}

impl Default for HeadingMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Line made only of ASCII uppercase letters and whitespace.
pub fn is_shout_case(line: &str) -> bool {
    !line.is_empty()
        && line
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_whitespace())
}
