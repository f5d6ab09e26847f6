// src/generators/mod.rs
use thiserror::Error;

pub mod charset;
pub mod coverage;
pub mod password;

pub use charset::build_alphabet;
pub use coverage::ensure_class_coverage;
pub use password::{generate, generate_with_rng, PasswordGenerator};

/// Why a policy cannot yield a password.
///
/// The generator itself never returns this; it hands back an empty string.
/// Presentation layers use it to tell the user what to change.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Password length must be between {min} and {max} characters (got {length})")]
    LengthOutOfRange { length: usize, min: usize, max: usize },

    #[error("At least one character type must be included")]
    NoCharacterClasses,
}
