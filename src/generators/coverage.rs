//! Optional repair pass layered on top of uniform generation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::generators::charset::class_alphabet;
use crate::models::{CharacterClass, GenerationPolicy};

/// Make sure every class enabled by `policy` appears in `candidate`.
///
/// For each missing class one position is overwritten with a random member
/// of that class. A position is only eligible if it was not repaired before
/// and its current character is not the sole representative of its own
/// class. Length is preserved.
pub fn ensure_class_coverage<R: Rng + ?Sized>(
    candidate: &str,
    policy: &GenerationPolicy,
    rng: &mut R,
) -> String {
    let mut chars: Vec<char> = candidate.chars().collect();
    let mut repaired: Vec<usize> = Vec::new();

    for class in policy.enabled_classes() {
        if chars.iter().any(|c| class.contains(*c)) {
            continue;
        }

        let pool = class_alphabet(class, policy);
        if pool.is_empty() {
            continue;
        }

        let eligible: Vec<usize> = (0..chars.len())
            .filter(|i| !repaired.contains(i))
            .filter(|&i| match CharacterClass::of(chars[i]) {
                Some(owner) => chars.iter().filter(|c| owner.contains(**c)).count() > 1,
                None => true,
            })
            .collect();

        let Some(&pos) = eligible.choose(rng) else {
            log::warn!("Candidate too short to cover {} ({} chars)", class, chars.len());
            break;
        };

        chars[pos] = pool[rng.gen_range(0..pool.len())] as char;
        repaired.push(pos);
    }

    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::charset::SIMILAR_CHARS;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn covers(candidate: &str, policy: &GenerationPolicy) -> bool {
        policy
            .enabled_classes()
            .into_iter()
            .all(|class| candidate.chars().any(|c| class.contains(c)))
    }

    #[test]
    fn fills_every_missing_class() {
        let policy = GenerationPolicy::default();
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for seed_candidate in ["aaaa", "ZZZZZZZZ", "1111", "????????????"] {
            let repaired = ensure_class_coverage(seed_candidate, &policy, &mut rng);
            assert_eq!(repaired.len(), seed_candidate.len());
            assert!(covers(&repaired, &policy), "{} -> {}", seed_candidate, repaired);
        }
    }

    #[test]
    fn covered_candidate_is_untouched() {
        let policy = GenerationPolicy::default();
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        assert_eq!(ensure_class_coverage("Ab1!xyz", &policy, &mut rng), "Ab1!xyz");
    }

    #[test]
    fn disabled_classes_are_not_added() {
        let policy = GenerationPolicy {
            use_symbols: false,
            use_digits: false,
            ..GenerationPolicy::default()
        };
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        let repaired = ensure_class_coverage("abcdef", &policy, &mut rng);
        assert!(covers(&repaired, &policy));
        assert!(repaired.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn repair_respects_exclude_similar() {
        let policy = GenerationPolicy {
            exclude_similar: true,
            ..GenerationPolicy::default()
        };
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        for _ in 0..100 {
            let repaired = ensure_class_coverage("QQQQ", &policy, &mut rng);
            assert!(covers(&repaired, &policy));
            assert!(repaired.bytes().all(|b| !SIMILAR_CHARS.contains(&b)));
        }
    }
}
