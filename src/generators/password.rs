// src/generators/password.rs
use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::models::{CharacterClass, GenerationConfig};

/// Password generator bound to a random source.
///
/// The generator is not a CSPRNG-backed credential tool: any uniform
/// `Rng` works, which is what lets tests inject a seeded source.
pub struct PasswordGenerator<R: Rng = ThreadRng> {
    rng: R,
}

impl PasswordGenerator<ThreadRng> {
    pub fn new() -> Self {
        PasswordGenerator {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for PasswordGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordGenerator<ChaCha8Rng> {
    /// Reproducible generator, same seed gives the same passwords.
    pub fn seeded(seed: u64) -> Self {
        PasswordGenerator {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    pub fn generate_password(&mut self, config: &GenerationConfig) -> String {
        generate(config, &mut self.rng)
    }

    pub fn generate_batch(&mut self, config: &GenerationConfig, count: usize) -> Vec<String> {
        (0..count).map(|_| generate(config, &mut self.rng)).collect()
    }

    pub fn analyze_password_strength(&self, password: &str) -> crate::models::StrengthReport {
        super::strength::analyze_password_strength(password)
    }
}

/// Build one password from `config`.
///
/// Never fails: the config is normalised first, so the pool is never
/// empty. A length of zero yields an empty string.
pub fn generate<R: Rng + ?Sized>(config: &GenerationConfig, rng: &mut R) -> String {
    let config = config.normalized();
    let pool = config.pool();

    log::debug!(
        "Generating password: length={}, classes={:?}, min_symbols={}, min_digits={}",
        config.length,
        config.enabled_classes,
        config.min_symbols,
        config.min_digits
    );

    // Base candidate, drawn with replacement from the whole pool
    let mut candidate: Vec<u8> = (0..config.length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect();

    // Symbols first, digits second: the digit pass may overwrite symbols
    if config.is_enabled(CharacterClass::Symbols) && config.min_symbols > 0 {
        ensure_character_count(&mut candidate, CharacterClass::Symbols, config.min_symbols, rng);
    }
    if config.is_enabled(CharacterClass::Digits) && config.min_digits > 0 {
        ensure_character_count(&mut candidate, CharacterClass::Digits, config.min_digits, rng);
    }

    shuffle(&mut candidate, rng);

    // Every byte comes from an ASCII alphabet
    candidate.into_iter().map(char::from).collect()
}

/// Top up `class` until `required` occurrences are *likely* present.
///
/// Replacement positions are drawn from the whole candidate, so a later
/// draw can land on a slot that already holds the class and the final
/// count can stay below `required`. Returns the number of overwrites.
pub fn ensure_character_count<R: Rng + ?Sized>(
    candidate: &mut [u8],
    class: CharacterClass,
    required: usize,
    rng: &mut R,
) -> usize {
    let alphabet = class.alphabet();
    let current = candidate.iter().filter(|b| alphabet.contains(b)).count();

    if current >= required {
        return 0;
    }

    let deficit = required - current;
    let replaceable = deficit.min(candidate.len() - current);

    log::debug!(
        "Enforcing minimum {} {}: have {}, replacing {}",
        required,
        class,
        current,
        replaceable
    );

    for _ in 0..replaceable {
        let index = rng.gen_range(0..candidate.len());
        candidate[index] = alphabet[rng.gen_range(0..alphabet.len())];
    }

    replaceable
}

/// Fisher-Yates, walking from the last slot down to index 1.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
