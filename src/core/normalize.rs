// File: src/core/normalize.rs
use serde::{Deserialize, Serialize};

/// The case convention applied to a word or synonym before it reaches the index.
///
/// The index compares strings byte for byte, so every caller has to agree on one
/// convention per field. Words default to lowercase, synonyms to capitalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    Lowercase,
    Capitalized,
}

impl CaseStyle {
    pub fn apply(self, input: &str) -> String {
        match self {
            CaseStyle::Lowercase => trim_and_lowercase(input),
            CaseStyle::Capitalized => trim_and_capitalize(input),
        }
    }
}

/// Strips surrounding whitespace.
pub fn trim(input: &str) -> &str {
    input.trim()
}

pub fn trim_and_lowercase(input: &str) -> String {
    trim(input).to_lowercase()
}

/// "  hELLO " -> "Hello". Only the first character is raised.
pub fn trim_and_capitalize(input: &str) -> String {
    let mut chars = trim(input).chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_and_lowercase() {
        assert_eq!(trim_and_lowercase("  HeLLo \n"), "hello");
        assert_eq!(trim_and_lowercase("   "), "");
    }

    #[test]
    fn test_trim_and_capitalize() {
        assert_eq!(trim_and_capitalize(" hAPPY"), "Happy");
        assert_eq!(trim_and_capitalize("g"), "G");
        assert_eq!(trim_and_capitalize(""), "");
        assert_eq!(trim_and_capitalize("\tgood mood "), "Good mood");
    }

    #[test]
    fn test_case_style_apply() {
        assert_eq!(CaseStyle::Lowercase.apply(" Joyful "), "joyful");
        assert_eq!(CaseStyle::Capitalized.apply(" joyful "), "Joyful");
    }
}
