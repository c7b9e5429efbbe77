// src/generators/mod.rs
pub mod password;
pub mod strength;

pub use password::{generate, PasswordGenerator};
pub use strength::{analyze_password_strength, score};
