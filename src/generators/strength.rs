// src/generators/strength.rs
use crate::models::{CharacterClass, StrengthLabel, StrengthReport};

/// Classify a password. Depends only on the string itself.
pub fn score(password: &str) -> StrengthLabel {
    analyze_password_strength(password).label
}

pub fn analyze_password_strength(password: &str) -> StrengthReport {
    let length = password.chars().count();
    let has = |class: CharacterClass| password.chars().any(|c| class.contains(c));

    let has_uppercase = has(CharacterClass::Uppercase);
    let has_lowercase = has(CharacterClass::Lowercase);
    let has_digits = has(CharacterClass::Digits);
    let has_symbols = has(CharacterClass::Symbols);

    let mut score: u8 = 0;

    // Length contribution
    if length >= 12 {
        score += 2;
    } else if length >= 8 {
        score += 1;
    }

    // Character variety, one point per class present
    score += [has_uppercase, has_lowercase, has_digits, has_symbols]
        .into_iter()
        .filter(|present| *present)
        .count() as u8;

    StrengthReport {
        score,
        label: StrengthLabel::from_score(score),
        length,
        has_uppercase,
        has_lowercase,
        has_digits,
        has_symbols,
    }
}
