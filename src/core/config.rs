// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::models::{ScoringStrategy, GenerationPolicy, DEFAULT_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH};

// Configuration for the generator and its front ends
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_password_exclude_similar: bool,
    pub ensure_class_coverage: bool,

    // Strength scoring
    pub scoring_strategy: ScoringStrategy,

    // Web Interface
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: DEFAULT_PASSWORD_LENGTH,
            default_password_exclude_similar: false,
            ensure_class_coverage: false,

            // Strength scoring
            scoring_strategy: ScoringStrategy::Step,

            // Web Interface
            web_port: 5000,
            web_address: "127.0.0.1".to_string(),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

fn ignored(key: &str, value: &str, expected: &str) -> String {
    format!("Ignoring {}='{}', expected {}", key, value, expected)
}

impl Config {
    // Load configuration from environment variables.
    // Returns the warnings for values that were ignored; the logger is not
    // up yet when this runs, so the caller logs them.
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value source, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) => {
                    config.default_password_length = length;
                }
                _ => warnings.push(ignored(
                    "DEFAULT_PASSWORD_LENGTH",
                    &val,
                    &format!("{}-{}", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH),
                )),
            }
        }

        if let Some(val) = lookup("DEFAULT_PASSWORD_EXCLUDE_SIMILAR") {
            match val.parse() {
                Ok(exclude) => config.default_password_exclude_similar = exclude,
                Err(_) => warnings.push(ignored("DEFAULT_PASSWORD_EXCLUDE_SIMILAR", &val, "true or false")),
            }
        }

        if let Some(val) = lookup("ENSURE_CLASS_COVERAGE") {
            match val.parse() {
                Ok(coverage) => config.ensure_class_coverage = coverage,
                Err(_) => warnings.push(ignored("ENSURE_CLASS_COVERAGE", &val, "true or false")),
            }
        }

        // Strength scoring
        if let Some(val) = lookup("SCORING_STRATEGY") {
            match val.parse() {
                Ok(strategy) => config.scoring_strategy = strategy,
                Err(_) => warnings.push(ignored("SCORING_STRATEGY", &val, "step or weighted")),
            }
        }

        // Web Interface
        if let Some(val) = lookup("WEB_PORT") {
            match val.parse() {
                Ok(port) => config.web_port = port,
                Err(_) => warnings.push(ignored("WEB_PORT", &val, "a port number")),
            }
        }

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Some(val) = lookup("LOG_LEVEL") {
            match val.trim().parse::<LevelFilter>() {
                Ok(level) => config.log_level = level,
                Err(_) => warnings.push(ignored("LOG_LEVEL", &val, "off, error, warn, info, debug or trace")),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        (config, warnings)
    }

    /// Policy the front ends start from before user overrides.
    pub fn default_policy(&self) -> GenerationPolicy {
        GenerationPolicy {
            length: self.default_password_length,
            exclude_similar: self.default_password_exclude_similar,
            ..GenerationPolicy::default()
        }
    }
}
