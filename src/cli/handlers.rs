// src/cli/handlers.rs
use serde::Serialize;

use crate::cli::{GenerateArgs, Result};
use crate::core::Config;
use crate::generators::{analyze_password_strength, PasswordGenerator};
use crate::models::{CharacterClass, GenerationConfig, StrengthReport};
use crate::utils::{format_strength, format_suggestions};

#[derive(Debug, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: StrengthReport,
}

#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    pub settings: GenerationConfig,
    pub passwords: Vec<GeneratedPassword>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ScoreOutput {
    pub strength: StrengthReport,
    pub suggestions: Vec<String>,
}

// Merge command line flags over the configured defaults
pub fn resolve_settings(args: &GenerateArgs, config: &Config) -> GenerationConfig {
    let mut settings = config.generation_defaults();

    if let Some(length) = args.length {
        settings.length = length;
    }
    if let Some(classes) = &args.classes {
        settings.enabled_classes = classes.clone();
    }

    let excluded = [
        (args.no_uppercase, CharacterClass::Uppercase),
        (args.no_lowercase, CharacterClass::Lowercase),
        (args.no_digits, CharacterClass::Digits),
        (args.no_symbols, CharacterClass::Symbols),
    ];
    for (skip, class) in excluded {
        if skip {
            settings.enabled_classes.retain(|c| *c != class);
        }
    }

    if let Some(min_symbols) = args.min_symbols {
        settings.min_symbols = min_symbols;
    }
    if let Some(min_digits) = args.min_digits {
        settings.min_digits = min_digits;
    }

    settings
}

/// Normalise settings the way the generator will, and describe every
/// adjustment so the user sees why their input changed.
pub fn validate_settings(settings: &GenerationConfig) -> (GenerationConfig, Vec<String>) {
    let normalized = settings.normalized();
    let mut warnings = Vec::new();

    // Minimums of disabled classes are never enforced, so their clamp is silent
    if normalized.is_enabled(CharacterClass::Symbols) && normalized.min_symbols < settings.min_symbols {
        warnings.push(format!(
            "Minimum symbols lowered from {} to {}",
            settings.min_symbols, normalized.min_symbols
        ));
    }
    if normalized.is_enabled(CharacterClass::Digits) && normalized.min_digits < settings.min_digits {
        warnings.push(format!(
            "Minimum digits lowered from {} to {}",
            settings.min_digits, normalized.min_digits
        ));
    }
    if settings.enabled_classes.is_empty() {
        warnings.push("No character class selected, using lowercase".to_string());
    }

    (normalized, warnings)
}

pub fn handle_generate(args: &GenerateArgs, config: &Config) -> GenerateOutput {
    let (settings, warnings) = validate_settings(&resolve_settings(args, config));
    for warning in &warnings {
        log::warn!("{}", warning);
    }

    let count = usize::from(args.count.max(1));
    let passwords = match args.seed {
        Some(seed) => PasswordGenerator::seeded(seed).generate_batch(&settings, count),
        None => PasswordGenerator::new().generate_batch(&settings, count),
    };

    log::info!("Generated {} password(s) of length {}", passwords.len(), settings.length);

    GenerateOutput {
        settings,
        passwords: passwords
            .into_iter()
            .map(|password| GeneratedPassword {
                strength: analyze_password_strength(&password),
                password,
            })
            .collect(),
        warnings,
    }
}

pub fn handle_score(password: &str) -> ScoreOutput {
    let strength = analyze_password_strength(password);
    ScoreOutput {
        suggestions: strength.suggestions(),
        strength,
    }
}

pub fn render_generate(output: &GenerateOutput, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(output)?);
    }

    let mut lines = Vec::new();
    for warning in &output.warnings {
        lines.push(format!("⚠️  {}", warning));
    }
    for generated in &output.passwords {
        lines.push(generated.password.clone());
        lines.push(format!("  Strength: {}", format_strength(&generated.strength)));
    }
    Ok(lines.join("\n"))
}

pub fn render_score(output: &ScoreOutput, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(output)?);
    }

    let mut text = format!("Strength: {}", format_strength(&output.strength));
    if !output.suggestions.is_empty() {
        text.push('\n');
        text.push_str(&format_suggestions(&output.strength));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StrengthLabel;

    fn args() -> GenerateArgs {
        GenerateArgs {
            count: 1,
            ..GenerateArgs::default()
        }
    }

    #[test]
    fn flags_override_config() {
        let config = Config::default();
        let settings = resolve_settings(
            &GenerateArgs {
                length: Some(10),
                no_symbols: true,
                min_digits: Some(4),
                ..args()
            },
            &config,
        );
        assert_eq!(settings.length, 10);
        assert!(!settings.is_enabled(CharacterClass::Symbols));
        assert!(settings.is_enabled(CharacterClass::Uppercase));
        assert_eq!(settings.min_digits, 4);
        assert_eq!(settings.min_symbols, config.default_min_symbols);
    }

    #[test]
    fn excluding_everything_falls_back_to_lowercase() {
        let (settings, warnings) = validate_settings(&resolve_settings(
            &GenerateArgs {
                no_uppercase: true,
                no_lowercase: true,
                no_digits: true,
                no_symbols: true,
                ..args()
            },
            &Config::default(),
        ));
        assert_eq!(settings.enabled_classes, vec![CharacterClass::Lowercase]);
        assert!(warnings.iter().any(|w| w.contains("lowercase")));
    }

    #[test]
    fn clamping_is_reported() {
        let settings = GenerationConfig {
            length: 6,
            min_symbols: 8,
            min_digits: 12,
            ..GenerationConfig::default()
        };
        let (normalized, warnings) = validate_settings(&settings);
        assert_eq!(normalized.min_symbols, 6);
        assert_eq!(normalized.min_digits, 6);
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn clamping_of_disabled_class_is_silent() {
        let settings = GenerationConfig {
            length: 6,
            enabled_classes: vec![CharacterClass::Lowercase, CharacterClass::Digits],
            min_symbols: 8,
            min_digits: 2,
        };
        let (normalized, warnings) = validate_settings(&settings);
        assert_eq!(normalized.min_symbols, 6);
        assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);

        let (_, warnings) = validate_settings(&GenerationConfig {
            min_digits: 9,
            ..settings
        });
        assert_eq!(warnings, vec!["Minimum digits lowered from 9 to 6".to_string()]);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let seeded = GenerateArgs {
            seed: Some(5),
            count: 3,
            ..args()
        };
        let first = handle_generate(&seeded, &Config::default());
        let second = handle_generate(&seeded, &Config::default());
        let a: Vec<_> = first.passwords.iter().map(|p| &p.password).collect();
        let b: Vec<_> = second.passwords.iter().map(|p| &p.password).collect();
        assert_eq!(a.len(), 3);
        assert_eq!(a, b);
    }

    #[test]
    fn generate_json_has_passwords_and_settings() {
        let output = handle_generate(
            &GenerateArgs {
                seed: Some(1),
                length: Some(12),
                ..args()
            },
            &Config::default(),
        );
        let json = render_generate(&output, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["settings"]["length"], 12);
        assert_eq!(value["passwords"][0]["password"].as_str().unwrap().len(), 12);
        assert!(value["passwords"][0]["strength"]["label"].is_string());
    }

    #[test]
    fn score_output_lists_suggestions() {
        let output = handle_score("abc");
        assert_eq!(output.strength.label, StrengthLabel::Weak);
        assert_eq!(output.suggestions.len(), 4);

        let json = render_score(&output, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["strength"]["label"], "weak");
        assert_eq!(value["strength"]["score"], 1);
    }

    #[test]
    fn plain_score_output_has_meter() {
        let text = render_score(&handle_score("aB3$aB3$aB3$"), false).unwrap();
        let text = console::strip_ansi_codes(&text).to_string();
        assert_eq!(text, "Strength: [######] Very Strong (6/6)");
    }
}
