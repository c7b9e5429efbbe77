// src/cli/commands.rs
use clap::{Args, Subcommand};

use crate::core::config::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::models::CharacterClass;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate(GenerateArgs),

    /// Score an existing password
    Score {
        /// Password to score (prompted for when omitted)
        #[arg(allow_hyphen_values = true)]
        password: Option<String>,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Password length
    #[arg(long, short, value_parser = parse_length)]
    pub length: Option<usize>,

    /// Character classes to draw from, comma separated
    #[arg(long, short, value_delimiter = ',', value_parser = parse_class)]
    pub classes: Option<Vec<CharacterClass>>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Minimum number of symbols (capped at min(length, 10))
    #[arg(long)]
    pub min_symbols: Option<usize>,

    /// Minimum number of digits (capped at min(length, 10))
    #[arg(long)]
    pub min_digits: Option<usize>,

    /// How many passwords to generate
    #[arg(long = "count", short = 'n', default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub count: u8,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

fn parse_length(value: &str) -> Result<usize, String> {
    let length: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        Ok(length)
    } else {
        Err(format!(
            "length must be between {} and {}",
            MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
        ))
    }
}

fn parse_class(value: &str) -> Result<CharacterClass, String> {
    value.parse()
}
