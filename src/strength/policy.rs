use crate::models::{GenerationPolicy, ScoringStrategy, StrengthAssessment};

/// Rate what a policy is capable of, before any candidate exists.
///
/// One point each for length >= 12, length >= 16 and every enabled class,
/// bucketed with the step labels.
pub fn estimate_policy(policy: &GenerationPolicy) -> StrengthAssessment {
    let mut score = 0u8;

    if policy.length >= 12 {
        score += 1;
    }
    if policy.length >= 16 {
        score += 1;
    }
    score += policy.enabled_classes().len() as u8;

    ScoringStrategy::Step.assess(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StrengthLabel;

    #[test]
    fn default_policy_is_strong() {
        let assessment = estimate_policy(&GenerationPolicy::default());
        assert_eq!(assessment.score, 6);
        assert_eq!(assessment.label, StrengthLabel::Strong);
        assert_eq!(assessment.visual_weight, 100);
    }

    #[test]
    fn estimate_tracks_length_and_classes() {
        let lower_only = GenerationPolicy {
            length: 12,
            use_uppercase: false,
            use_digits: false,
            use_symbols: false,
            ..GenerationPolicy::default()
        };
        assert_eq!(estimate_policy(&lower_only).label, StrengthLabel::Weak);

        let short = GenerationPolicy { length: 4, ..GenerationPolicy::default() };
        assert_eq!(estimate_policy(&short).score, 4);
        assert_eq!(estimate_policy(&short).label, StrengthLabel::Fair);

        let no_symbols = GenerationPolicy { use_symbols: false, ..GenerationPolicy::default() };
        assert_eq!(estimate_policy(&no_symbols).label, StrengthLabel::Good);
    }
}
