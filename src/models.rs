// src/models.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Upper bound applied to every per-class minimum, regardless of length.
pub const MAX_REQUIRED_PER_CLASS: usize = 10;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Pool order used when concatenating alphabets.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }

    /// Map a character back to the class whose alphabet holds it.
    pub fn classify(c: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digits => "digits",
            CharacterClass::Symbols => "symbols",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uppercase" | "upper" => Ok(CharacterClass::Uppercase),
            "lowercase" | "lower" => Ok(CharacterClass::Lowercase),
            "digits" | "numbers" => Ok(CharacterClass::Digits),
            "symbols" => Ok(CharacterClass::Symbols),
            other => Err(format!("unknown character class '{}'", other)),
        }
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub length: usize,
    pub enabled_classes: Vec<CharacterClass>,
    pub min_symbols: usize,
    pub min_digits: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 16,
            enabled_classes: CharacterClass::ALL.to_vec(),
            min_symbols: 2,
            min_digits: 2,
        }
    }
}

impl GenerationConfig {
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        self.enabled_classes.contains(&class)
    }

    /// Largest minimum any single class may demand for this length.
    pub fn max_required(&self) -> usize {
        self.length.min(MAX_REQUIRED_PER_CLASS)
    }

    /// Clamp both minimums and fall back to lowercase when no class is
    /// selected. Classes come back deduplicated and in pool order.
    pub fn normalized(&self) -> GenerationConfig {
        let cap = self.max_required();

        let mut enabled_classes: Vec<CharacterClass> = CharacterClass::ALL
            .into_iter()
            .filter(|class| self.is_enabled(*class))
            .collect();
        if enabled_classes.is_empty() {
            enabled_classes.push(CharacterClass::Lowercase);
        }

        GenerationConfig {
            length: self.length,
            enabled_classes,
            min_symbols: self.min_symbols.min(cap),
            min_digits: self.min_digits.min(cap),
        }
    }

    /// Concatenated alphabets of the enabled classes, in pool order.
    pub fn pool(&self) -> Vec<u8> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.is_enabled(*class))
            .flat_map(|class| class.alphabet().iter().copied())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> Self {
        if score >= 5 {
            StrengthLabel::VeryStrong
        } else if score >= 4 {
            StrengthLabel::Strong
        } else if score >= 3 {
            StrengthLabel::Medium
        } else {
            StrengthLabel::Weak
        }
    }

    /// Stable identifier, matches the serialized form.
    pub fn key(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "weak",
            StrengthLabel::Medium => "medium",
            StrengthLabel::Strong => "strong",
            StrengthLabel::VeryStrong => "very-strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Medium => write!(f, "Medium"),
            StrengthLabel::Strong => write!(f, "Strong"),
            StrengthLabel::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

/// Breakdown of a strength score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub score: u8,
    pub label: StrengthLabel,
    pub length: usize,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digits: bool,
    pub has_symbols: bool,
}

impl StrengthReport {
    pub fn has_class(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.has_uppercase,
            CharacterClass::Lowercase => self.has_lowercase,
            CharacterClass::Digits => self.has_digits,
            CharacterClass::Symbols => self.has_symbols,
        }
    }

    /// Hints for raising the score, empty once nothing more can be gained.
    pub fn suggestions(&self) -> Vec<String> {
        let mut suggestions = Vec::new();

        if self.length < 8 {
            suggestions.push("Use at least 8 characters".to_string());
        } else if self.length < 12 {
            suggestions.push("Increase length to at least 12 characters".to_string());
        }

        for class in CharacterClass::ALL {
            if !self.has_class(class) {
                suggestions.push(format!("Add {} for better coverage", class));
            }
        }

        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_have_expected_sizes() {
        assert_eq!(CharacterClass::Uppercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Lowercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Digits.alphabet().len(), 10);
        assert_eq!(CharacterClass::Symbols.alphabet().len(), 26);
    }

    #[test]
    fn alphabets_are_disjoint() {
        for c in (0u8..128).map(char::from) {
            let owners = CharacterClass::ALL
                .into_iter()
                .filter(|class| class.contains(c))
                .count();
            assert!(owners <= 1, "{:?} belongs to {} classes", c, owners);
        }
    }

    #[test]
    fn classify_maps_back_to_class() {
        assert_eq!(CharacterClass::classify('Q'), Some(CharacterClass::Uppercase));
        assert_eq!(CharacterClass::classify('q'), Some(CharacterClass::Lowercase));
        assert_eq!(CharacterClass::classify('7'), Some(CharacterClass::Digits));
        assert_eq!(CharacterClass::classify('?'), Some(CharacterClass::Symbols));
        assert_eq!(CharacterClass::classify(' '), None);
        assert_eq!(CharacterClass::classify('é'), None);
        assert_eq!(CharacterClass::classify('~'), None);
    }

    #[test]
    fn parses_class_names() {
        assert_eq!("Upper".parse::<CharacterClass>(), Ok(CharacterClass::Uppercase));
        assert_eq!(" numbers ".parse::<CharacterClass>(), Ok(CharacterClass::Digits));
        assert!("emoji".parse::<CharacterClass>().is_err());
    }

    #[test]
    fn normalized_clamps_minimums_to_length() {
        let config = GenerationConfig {
            length: 4,
            enabled_classes: vec![CharacterClass::Digits, CharacterClass::Symbols],
            min_symbols: 7,
            min_digits: 3,
        };
        let normalized = config.normalized();
        assert_eq!(normalized.min_symbols, 4);
        assert_eq!(normalized.min_digits, 3);
    }

    #[test]
    fn normalized_clamps_minimums_to_ten() {
        let config = GenerationConfig {
            length: 64,
            min_symbols: 40,
            min_digits: 11,
            ..GenerationConfig::default()
        };
        let normalized = config.normalized();
        assert_eq!(normalized.min_symbols, MAX_REQUIRED_PER_CLASS);
        assert_eq!(normalized.min_digits, MAX_REQUIRED_PER_CLASS);
    }

    #[test]
    fn normalized_defaults_empty_classes_to_lowercase() {
        let config = GenerationConfig {
            length: 0,
            enabled_classes: Vec::new(),
            min_symbols: 0,
            min_digits: 0,
        };
        assert_eq!(config.normalized().enabled_classes, vec![CharacterClass::Lowercase]);
    }

    #[test]
    fn pool_follows_class_order() {
        let config = GenerationConfig {
            enabled_classes: vec![CharacterClass::Symbols, CharacterClass::Uppercase],
            ..GenerationConfig::default()
        };
        let pool = config.pool();
        assert_eq!(pool.len(), 52);
        assert_eq!(pool[0], b'A');
        assert_eq!(pool[26], b'!');
    }

    #[test]
    fn label_thresholds() {
        assert_eq!(StrengthLabel::from_score(0), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(2), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(3), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_score(4), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(5), StrengthLabel::VeryStrong);
        assert_eq!(StrengthLabel::from_score(6), StrengthLabel::VeryStrong);
    }

    #[test]
    fn label_serializes_as_key() {
        let json = serde_json::to_string(&StrengthLabel::VeryStrong).unwrap();
        assert_eq!(json, "\"very-strong\"");
        assert_eq!(StrengthLabel::VeryStrong.to_string(), "Very Strong");
    }
}
