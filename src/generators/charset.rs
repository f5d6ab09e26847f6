//! Alphabet construction for the generator.

use crate::models::{CharacterClass, GenerationPolicy};

/// Characters that are easy to misread in most fonts.
pub const SIMILAR_CHARS: &[u8] = b"il1Lo0O";

/// Concatenate the enabled classes in fixed order: uppercase, lowercase,
/// digits, symbols. An empty result means the policy cannot generate.
pub fn build_alphabet(policy: &GenerationPolicy) -> Vec<u8> {
    let mut chars = Vec::new();

    for class in policy.enabled_classes() {
        chars.extend_from_slice(class.chars());
    }

    if policy.exclude_similar {
        chars.retain(|c| !SIMILAR_CHARS.contains(c));
    }

    chars
}

/// Characters of a single class that survive the policy's filters.
pub fn class_alphabet(class: CharacterClass, policy: &GenerationPolicy) -> Vec<u8> {
    class
        .chars()
        .iter()
        .copied()
        .filter(|c| !policy.exclude_similar || !SIMILAR_CHARS.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(class: CharacterClass) -> GenerationPolicy {
        let mut policy = GenerationPolicy {
            use_uppercase: false,
            use_lowercase: false,
            use_digits: false,
            use_symbols: false,
            ..GenerationPolicy::default()
        };
        policy.set_enabled(class, true);
        policy
    }

    #[test]
    fn full_alphabet_is_concatenated_in_order() {
        let alphabet = build_alphabet(&GenerationPolicy::default());
        assert_eq!(alphabet.len(), 26 + 26 + 10 + 26);
        assert_eq!(
            alphabet,
            b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+-=[]{}|;:,.<>?"
        );
    }

    #[test]
    fn order_does_not_depend_on_flag_toggling() {
        let mut policy = only(CharacterClass::Symbols);
        policy.use_digits = true;
        let alphabet = build_alphabet(&policy);
        assert!(alphabet.starts_with(b"0123456789"));
        assert!(alphabet.ends_with(b"<>?"));
    }

    #[test]
    fn no_classes_means_empty_alphabet() {
        let policy = GenerationPolicy {
            use_uppercase: false,
            use_lowercase: false,
            use_digits: false,
            use_symbols: false,
            ..GenerationPolicy::default()
        };
        assert!(build_alphabet(&policy).is_empty());
    }

    #[test]
    fn exclude_similar_removes_lookalikes_only() {
        let policy = GenerationPolicy {
            exclude_similar: true,
            ..GenerationPolicy::default()
        };
        let alphabet = build_alphabet(&policy);
        assert_eq!(alphabet.len(), 88 - SIMILAR_CHARS.len());
        for c in SIMILAR_CHARS {
            assert!(!alphabet.contains(c));
        }
        assert!(alphabet.contains(&b'I'));

        let digits = class_alphabet(CharacterClass::Digits, &policy);
        assert_eq!(digits, b"23456789");
    }
}
