// src/cli/menu.rs
use inquire::{Confirm, CustomType, InquireError, MultiSelect, Password, Select};

use crate::cli::handlers::{handle_score, render_score, validate_settings, GeneratedPassword};
use crate::cli::Result;
use crate::core::config::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::core::Config;
use crate::generators::{analyze_password_strength, PasswordGenerator};
use crate::models::{CharacterClass, GenerationConfig};
use crate::utils::format_strength;

const GENERATE: &str = "🔐  Generate password";
const SETTINGS: &str = "⚙️   Change settings";
const SCORE: &str = "📊  Score a password";
const EXIT: &str = "🚪  Exit";

pub fn run_cli_menu(config: &Config) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║         🦀 PASSFORGE GENERATOR        ║");
    println!("╚══════════════════════════════════════╝");

    let mut generator = PasswordGenerator::new();
    let (mut settings, warnings) = validate_settings(&config.generation_defaults());
    print_warnings(&warnings);

    // Show a password right away, the way the form did on load
    print_generated(&generate_one(&mut generator, &settings));

    loop {
        let prompt = Select::new("What would you like to do?", vec![GENERATE, SETTINGS, SCORE, EXIT]).prompt();
        let Some(choice) = optional(prompt)? else {
            break;
        };

        match choice {
            GENERATE => print_generated(&generate_one(&mut generator, &settings)),
            SETTINGS => {
                let Some(requested) = prompt_settings(&settings)? else {
                    println!("↩️  Settings unchanged");
                    continue;
                };
                let (updated, warnings) = validate_settings(&requested);
                print_warnings(&warnings);
                settings = updated;
                log::debug!("Settings changed: {:?}", settings);

                let confirm = Confirm::new("Generate a password with these settings?")
                    .with_default(true)
                    .prompt();
                if optional(confirm)?.unwrap_or(false) {
                    print_generated(&generate_one(&mut generator, &settings));
                }
            }
            SCORE => {
                let prompt = Password::new("Password to score:")
                    .with_display_mode(inquire::PasswordDisplayMode::Hidden)
                    .without_confirmation()
                    .prompt();
                if let Some(password) = optional(prompt)? {
                    println!("{}", render_score(&handle_score(&password), false)?);
                }
            }
            _ => break,
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

/// Esc and Ctrl+C on a prompt mean "go back", not failure.
fn optional<T>(result: std::result::Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn generate_one(generator: &mut PasswordGenerator, settings: &GenerationConfig) -> GeneratedPassword {
    let password = generator.generate_password(settings);
    GeneratedPassword {
        strength: analyze_password_strength(&password),
        password,
    }
}

fn print_generated(generated: &GeneratedPassword) {
    println!("\nGenerated Password: {}", generated.password);
    println!("Strength: {}\n", format_strength(&generated.strength));
}

fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        println!("⚠️  {}", warning);
    }
}

// Unparsable input is re-asked by inquire itself
fn prompt_number(message: &str, default: usize) -> Result<Option<usize>> {
    optional(
        CustomType::<usize>::new(message)
            .with_default(default)
            .with_error_message("Please type a whole number")
            .prompt(),
    )
}

/// Keep `current` when `requested` falls outside the accepted range.
fn accept_length(requested: usize, current: usize) -> (usize, Option<String>) {
    if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&requested) {
        (requested, None)
    } else {
        let message = format!(
            "Length must be between {} and {}, keeping {}",
            MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, current
        );
        (current, Some(message))
    }
}

fn prompt_settings(current: &GenerationConfig) -> Result<Option<GenerationConfig>> {
    let Some(requested) = prompt_number("Password length:", current.length)? else {
        return Ok(None);
    };
    let (length, rejected) = accept_length(requested, current.length);
    if let Some(message) = rejected {
        println!("❗ {}", message);
    }

    let selected: Vec<usize> = CharacterClass::ALL
        .iter()
        .enumerate()
        .filter(|(_, class)| current.is_enabled(**class))
        .map(|(i, _)| i)
        .collect();
    let prompt = MultiSelect::new("Character classes:", CharacterClass::ALL.to_vec())
        .with_default(&selected)
        .prompt();
    let Some(enabled_classes) = optional(prompt)? else {
        return Ok(None);
    };

    let mut min_symbols = current.min_symbols;
    if enabled_classes.contains(&CharacterClass::Symbols) {
        match prompt_number("Minimum symbols:", current.min_symbols)? {
            Some(count) => min_symbols = count,
            None => return Ok(None),
        }
    }
    let mut min_digits = current.min_digits;
    if enabled_classes.contains(&CharacterClass::Digits) {
        match prompt_number("Minimum digits:", current.min_digits)? {
            Some(count) => min_digits = count,
            None => return Ok(None),
        }
    }

    Ok(Some(GenerationConfig {
        length,
        enabled_classes,
        min_symbols,
        min_digits,
    }))
}
