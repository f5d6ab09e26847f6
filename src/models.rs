// src/models.rs
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::generators::PolicyError;

/// Shortest password the generator will produce.
pub const MIN_PASSWORD_LENGTH: usize = 4;
/// Longest password the generator will produce.
pub const MAX_PASSWORD_LENGTH: usize = 50;
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// A fixed, disjoint set of characters the generator can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// All classes in alphabet concatenation order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn chars(self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.chars().contains(&(c as u8))
    }

    /// The class a character belongs to, if any.
    pub fn of(c: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Uppercase => write!(f, "uppercase"),
            CharacterClass::Lowercase => write!(f, "lowercase"),
            CharacterClass::Digits => write!(f, "digits"),
            CharacterClass::Symbols => write!(f, "symbols"),
        }
    }
}

// Password generation policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerationPolicy {
    pub length: usize,
    pub use_uppercase: bool,
    pub use_lowercase: bool,
    pub use_digits: bool,
    pub use_symbols: bool,
    /// Drop look-alike characters (`il1Lo0O`) from the alphabet
    #[serde(default)]
    pub exclude_similar: bool,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            use_uppercase: true,
            use_lowercase: true,
            use_digits: true,
            use_symbols: true,
            exclude_similar: false,
        }
    }
}

impl GenerationPolicy {
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.use_uppercase,
            CharacterClass::Lowercase => self.use_lowercase,
            CharacterClass::Digits => self.use_digits,
            CharacterClass::Symbols => self.use_symbols,
        }
    }

    /// Enabled classes, always in uppercase, lowercase, digits, symbols order.
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.is_enabled(*class))
            .collect()
    }

    pub fn set_enabled(&mut self, class: CharacterClass, enabled: bool) {
        match class {
            CharacterClass::Uppercase => self.use_uppercase = enabled,
            CharacterClass::Lowercase => self.use_lowercase = enabled,
            CharacterClass::Digits => self.use_digits = enabled,
            CharacterClass::Symbols => self.use_symbols = enabled,
        }
    }

    pub fn has_any_class(&self) -> bool {
        self.use_uppercase || self.use_lowercase || self.use_digits || self.use_symbols
    }

    pub fn length_in_range(&self) -> bool {
        (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&self.length)
    }

    /// Explain why this policy cannot produce a password.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if !self.length_in_range() {
            return Err(PolicyError::LengthOutOfRange {
                length: self.length,
                min: MIN_PASSWORD_LENGTH,
                max: MAX_PASSWORD_LENGTH,
            });
        }
        if !self.has_any_class() {
            return Err(PolicyError::NoCharacterClasses);
        }
        Ok(())
    }
}

/// Ordinal strength bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    /// Progress bar fill used when the label alone drives the indicator.
    pub fn visual_weight(self) -> u8 {
        match self {
            StrengthLabel::Weak => 25,
            StrengthLabel::Fair => 50,
            StrengthLabel::Good => 75,
            StrengthLabel::Strong => 100,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "red",
            StrengthLabel::Fair => "yellow",
            StrengthLabel::Good => "blue",
            StrengthLabel::Strong => "green",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Fair => write!(f, "Fair"),
            StrengthLabel::Good => write!(f, "Good"),
            StrengthLabel::Strong => write!(f, "Strong"),
        }
    }
}

/// Which scoring table the evaluator applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScoringStrategy {
    /// One point per criterion, out of 6
    #[default]
    Step,
    /// Weighted percentage, out of 100
    Weighted,
}

impl fmt::Display for ScoringStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringStrategy::Step => write!(f, "step"),
            ScoringStrategy::Weighted => write!(f, "weighted"),
        }
    }
}

impl FromStr for ScoringStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "step" => Ok(ScoringStrategy::Step),
            "weighted" => Ok(ScoringStrategy::Weighted),
            other => Err(format!("unknown scoring strategy '{}' (expected 'step' or 'weighted')", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthAssessment {
    pub score: u8,
    pub max_score: u8,
    pub label: StrengthLabel,
    /// Progress indicator fill, 0-100
    pub visual_weight: u8,
    pub strategy: ScoringStrategy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_class_matches_fixed_set() {
        assert_eq!(CharacterClass::Symbols.chars().len(), 26);
        assert!(CharacterClass::Symbols.contains('?'));
        assert!(!CharacterClass::Symbols.contains('~'));
        assert_eq!(CharacterClass::of('Z'), Some(CharacterClass::Uppercase));
        assert_eq!(CharacterClass::of('é'), None);
    }

    #[test]
    fn enabled_classes_keep_fixed_order() {
        let policy = GenerationPolicy {
            use_uppercase: false,
            ..GenerationPolicy::default()
        };
        assert_eq!(
            policy.enabled_classes(),
            vec![CharacterClass::Lowercase, CharacterClass::Digits, CharacterClass::Symbols]
        );
    }

    #[test]
    fn validate_reports_length_before_classes() {
        let policy = GenerationPolicy {
            length: 3,
            use_uppercase: false,
            use_lowercase: false,
            use_digits: false,
            use_symbols: false,
            exclude_similar: false,
        };
        assert!(matches!(
            policy.validate(),
            Err(PolicyError::LengthOutOfRange { length: 3, min: 4, max: 50 })
        ));

        let policy = GenerationPolicy { length: 10, ..policy };
        assert_eq!(policy.validate(), Err(PolicyError::NoCharacterClasses));
        assert!(GenerationPolicy::default().validate().is_ok());
    }

    #[test]
    fn labels_are_ordinal() {
        assert!(StrengthLabel::Weak < StrengthLabel::Fair);
        assert!(StrengthLabel::Good < StrengthLabel::Strong);
    }

    #[test]
    fn strategy_parses_case_insensitively() {
        assert_eq!("Weighted".parse::<ScoringStrategy>(), Ok(ScoringStrategy::Weighted));
        assert_eq!(" step ".parse::<ScoringStrategy>(), Ok(ScoringStrategy::Step));
        assert!("entropy".parse::<ScoringStrategy>().is_err());
    }
}
