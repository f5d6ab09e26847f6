use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::generators::charset::build_alphabet;
use crate::generators::coverage::ensure_class_coverage;
use crate::models::GenerationPolicy;

/// Generate a candidate from the thread-local RNG.
///
/// Returns an empty string when the policy has no enabled class or its
/// length is out of range. Every character is drawn uniformly, with
/// replacement, from the combined alphabet; no class is guaranteed to appear.
pub fn generate(policy: &GenerationPolicy) -> String {
    generate_with_rng(policy, &mut rand::thread_rng())
}

pub fn generate_with_rng<R: Rng + ?Sized>(policy: &GenerationPolicy, rng: &mut R) -> String {
    if !policy.length_in_range() {
        log::debug!("Refusing to generate: length {} out of range", policy.length);
        return String::new();
    }

    let chars = build_alphabet(policy);
    if chars.is_empty() {
        log::debug!("Refusing to generate: no character classes enabled");
        return String::new();
    }

    let dist = Uniform::from(0..chars.len());
    (0..policy.length)
        .map(|_| chars[dist.sample(rng)] as char)
        .collect()
}

/// Generator front end used by the CLI and API.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordGenerator {
    class_coverage: bool,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator::default()
    }

    /// Repair candidates so every enabled class appears at least once.
    pub fn with_class_coverage(mut self, enabled: bool) -> Self {
        self.class_coverage = enabled;
        self
    }

    pub fn class_coverage(&self) -> bool {
        self.class_coverage
    }

    pub fn generate_password(&self, policy: &GenerationPolicy) -> String {
        self.generate_password_with_rng(policy, &mut rand::thread_rng())
    }

    pub fn generate_password_with_rng<R: Rng + ?Sized>(&self, policy: &GenerationPolicy, rng: &mut R) -> String {
        let candidate = generate_with_rng(policy, rng);
        if self.class_coverage && !candidate.is_empty() {
            ensure_class_coverage(&candidate, policy, rng)
        } else {
            candidate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CharacterClass;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn candidate_has_requested_length_and_alphabet() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for length in [4, 8, 16, 33, 50] {
            let policy = GenerationPolicy { length, ..GenerationPolicy::default() };
            let alphabet = build_alphabet(&policy);
            let candidate = generate_with_rng(&policy, &mut rng);
            assert_eq!(candidate.len(), length);
            assert!(candidate.bytes().all(|b| alphabet.contains(&b)));
        }
    }

    #[test]
    fn single_class_policy_stays_in_class() {
        let policy = GenerationPolicy {
            length: 40,
            use_uppercase: false,
            use_lowercase: false,
            use_symbols: false,
            ..GenerationPolicy::default()
        };
        let candidate = generate(&policy);
        assert!(candidate.chars().all(|c| CharacterClass::Digits.contains(c)));
    }

    #[test]
    fn empty_or_out_of_range_policy_yields_empty_string() {
        let none = GenerationPolicy {
            use_uppercase: false,
            use_lowercase: false,
            use_digits: false,
            use_symbols: false,
            ..GenerationPolicy::default()
        };
        for length in [0, 4, 16, 50, 51] {
            assert_eq!(generate(&GenerationPolicy { length, ..none.clone() }), "");
        }
        assert_eq!(generate(&GenerationPolicy { length: 3, ..GenerationPolicy::default() }), "");
        assert_eq!(generate(&GenerationPolicy { length: 51, ..GenerationPolicy::default() }), "");
    }

    #[test]
    fn generation_is_not_memoized() {
        // Same seed reproduces, an advanced RNG does not
        let policy = GenerationPolicy::default();
        let first = generate_with_rng(&policy, &mut ChaCha20Rng::seed_from_u64(42));
        let again = generate_with_rng(&policy, &mut ChaCha20Rng::seed_from_u64(42));
        assert_eq!(first, again);

        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let a = generate_with_rng(&policy, &mut rng);
        let b = generate_with_rng(&policy, &mut rng);
        assert_eq!(a, first);
        assert_ne!(a, b);
    }

    #[test]
    fn generator_with_coverage_includes_every_class() {
        let generator = PasswordGenerator::new().with_class_coverage(true);
        let policy = GenerationPolicy { length: 4, ..GenerationPolicy::default() };
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        for _ in 0..200 {
            let candidate = generator.generate_password_with_rng(&policy, &mut rng);
            assert_eq!(candidate.len(), 4);
            for class in CharacterClass::ALL {
                assert!(candidate.chars().any(|c| class.contains(c)), "{} missing from {}", class, candidate);
            }
        }
    }

    #[test]
    fn generator_without_coverage_matches_plain_generate() {
        let generator = PasswordGenerator::new();
        assert!(!generator.class_coverage());
        let policy = GenerationPolicy::default();
        let plain = generate_with_rng(&policy, &mut ChaCha20Rng::seed_from_u64(9));
        let via = generator.generate_password_with_rng(&policy, &mut ChaCha20Rng::seed_from_u64(9));
        assert_eq!(plain, via);
    }
}
