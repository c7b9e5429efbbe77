//! Randomised password generation with composition rules and a
//! heuristic strength label.
//!
//! The two core operations are [`generate`] and [`score`]. Both are pure
//! with respect to earlier calls; `generate` takes its randomness from
//! the caller so seeded runs are reproducible.
//!
//! ```
//! use passforge::{generate, score, GenerationConfig, StrengthLabel};
//! use rand::SeedableRng;
//!
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
//! let password = generate(&GenerationConfig::default(), &mut rng);
//! assert_eq!(password.len(), 16);
//! assert!(score(&password) >= StrengthLabel::Strong);
//! ```

pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;

pub use generators::{analyze_password_strength, generate, score, PasswordGenerator};
pub use models::{CharacterClass, GenerationConfig, StrengthLabel, StrengthReport};
