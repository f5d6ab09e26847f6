//! Password generation and strength evaluation.
//!
//! The core is two pure functions: [`generators::generate`] draws a
//! candidate uniformly from the alphabet a [`models::GenerationPolicy`]
//! enables, and [`strength::evaluate`] rates any string on a step or
//! weighted scale. The CLI and the HTTP API are thin layers over them.

pub mod api;
pub mod cli;
pub mod clipboard;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod strength;
pub mod utils;

pub use generators::{generate, generate_with_rng, PasswordGenerator, PolicyError};
pub use models::{CharacterClass, GenerationPolicy, ScoringStrategy, StrengthAssessment, StrengthLabel};
pub use strength::{evaluate, evaluate_with};
