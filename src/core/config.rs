// src/core/config.rs
use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use crate::models::{CharacterClass, GenerationConfig};

pub const MIN_PASSWORD_LENGTH: usize = 1;
pub const MAX_PASSWORD_LENGTH: usize = 256;

// Runtime configuration for the generator front end
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_min_symbols: usize,
    pub default_min_digits: usize,
    pub default_character_classes: Vec<CharacterClass>,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    // Problems found while loading, reported once logging is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,
            default_min_symbols: 2,
            default_min_digits: 2,
            default_character_classes: CharacterClass::ALL.to_vec(),

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::load`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.trim().parse::<usize>() {
                Ok(length) if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) => {
                    config.default_password_length = length;
                }
                _ => config.warnings.push(format!(
                    "Ignoring DEFAULT_PASSWORD_LENGTH='{}', expected {}..={}",
                    val, MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
                )),
            }
        }

        if let Some(val) = lookup("DEFAULT_MIN_SYMBOLS") {
            match val.trim().parse() {
                Ok(count) => config.default_min_symbols = count,
                Err(_) => config
                    .warnings
                    .push(format!("Ignoring DEFAULT_MIN_SYMBOLS='{}'", val)),
            }
        }

        if let Some(val) = lookup("DEFAULT_MIN_DIGITS") {
            match val.trim().parse() {
                Ok(count) => config.default_min_digits = count,
                Err(_) => config
                    .warnings
                    .push(format!("Ignoring DEFAULT_MIN_DIGITS='{}'", val)),
            }
        }

        if let Some(val) = lookup("DEFAULT_CHARACTER_CLASSES") {
            match parse_class_list(&val) {
                Ok(classes) => config.default_character_classes = classes,
                Err(e) => config
                    .warnings
                    .push(format!("Ignoring DEFAULT_CHARACTER_CLASSES: {}", e)),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => config.warnings.push(format!(
                    "Unknown LOG_LEVEL '{}', using {}",
                    level, config.log_level
                )),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    pub fn generation_defaults(&self) -> GenerationConfig {
        GenerationConfig {
            length: self.default_password_length,
            enabled_classes: self.default_character_classes.clone(),
            min_symbols: self.default_min_symbols,
            min_digits: self.default_min_digits,
        }
    }
}

/// Parse `"uppercase,digits"` style lists. An empty list is allowed and
/// later normalises to lowercase.
pub fn parse_class_list(value: &str) -> Result<Vec<CharacterClass>, String> {
    let mut classes = Vec::new();
    for part in value.split(',').filter(|s| !s.trim().is_empty()) {
        let class: CharacterClass = part.parse()?;
        if !classes.contains(&class) {
            classes.push(class);
        }
    }
    Ok(classes)
}
