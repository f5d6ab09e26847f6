use std::collections::HashSet;

use crate::models::{StrengthAssessment, StrengthLabel};
use crate::strength::{Criteria, LONG_LENGTH_BONUS};

/// Human-readable advice for a candidate. Never changes the score.
pub fn feedback(candidate: &str, assessment: &StrengthAssessment) -> Vec<String> {
    let criteria = Criteria::inspect(candidate);
    let mut feedback = Vec::new();

    if candidate.is_empty() {
        feedback.push("Password is empty".to_string());
        return feedback;
    }

    match assessment.label {
        StrengthLabel::Weak => {
            feedback.push("Weak password".to_string());
            if !criteria.has_lowercase {
                feedback.push("Add lowercase letters for better security".to_string());
            }
            if !criteria.has_uppercase {
                feedback.push("Add uppercase letters for better security".to_string());
            }
            if !criteria.has_digit {
                feedback.push("Add numbers for better security".to_string());
            }
            if !criteria.has_symbol {
                feedback.push("Add symbols for better security".to_string());
            }
            if criteria.length < LONG_LENGTH_BONUS {
                feedback.push("Increase password length to at least 12 characters".to_string());
            }
        }
        StrengthLabel::Fair => {
            feedback.push("Fair password".to_string());
            if criteria.length < LONG_LENGTH_BONUS {
                feedback.push("Consider increasing password length to at least 12 characters".to_string());
            }
            if !criteria.has_symbol {
                feedback.push("Add symbols for better security".to_string());
            }
        }
        StrengthLabel::Good => {
            feedback.push("Good password".to_string());
            if criteria.length < 16 {
                feedback.push("For maximum security, consider increasing length to 16+ characters".to_string());
            }
        }
        StrengthLabel::Strong => {
            feedback.push("Strong password".to_string());
        }
    }

    feedback.extend(pattern_warnings(candidate));
    feedback
}

fn pattern_warnings(candidate: &str) -> Vec<String> {
    let chars: Vec<char> = candidate.chars().collect();
    let mut warnings = Vec::new();

    let ascending = |w: &[char]| {
        w[1] as u32 == w[0] as u32 + 1 && w[2] as u32 == w[1] as u32 + 1
    };

    if chars.windows(3).any(|w| ascending(w) && w.iter().all(|c| c.is_ascii_alphabetic())) {
        warnings.push("Avoid using consecutive letters (e.g., 'abc')".to_string());
    }
    if chars.windows(3).any(|w| ascending(w) && w.iter().all(|c| c.is_ascii_digit())) {
        warnings.push("Avoid using consecutive numbers (e.g., '123')".to_string());
    }

    let unique: HashSet<&char> = chars.iter().collect();
    if chars.len() >= 4 && unique.len() < chars.len() / 2 {
        warnings.push("Avoid repeating the same characters".to_string());
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::evaluate;

    fn advise(candidate: &str) -> Vec<String> {
        feedback(candidate, &evaluate(candidate))
    }

    #[test]
    fn empty_password_gets_single_message() {
        assert_eq!(advise(""), vec!["Password is empty".to_string()]);
    }

    #[test]
    fn weak_password_lists_missing_classes() {
        let advice = advise("hello");
        assert_eq!(advice[0], "Weak password");
        assert!(advice.iter().any(|m| m.contains("uppercase")));
        assert!(advice.iter().any(|m| m.contains("numbers")));
        assert!(advice.iter().any(|m| m.contains("symbols")));
        assert!(advice.iter().any(|m| m.contains("at least 12")));
        assert!(!advice.iter().any(|m| m.contains("lowercase")));
    }

    #[test]
    fn strong_password_has_no_suggestions() {
        assert_eq!(advise("Qw7!rT9#zP2$"), vec!["Strong password".to_string()]);
    }

    #[test]
    fn sequences_and_repeats_are_flagged() {
        let advice = advise("Xabc123!Xyz");
        assert!(advice.iter().any(|m| m.contains("consecutive letters")));
        assert!(advice.iter().any(|m| m.contains("consecutive numbers")));

        let advice = advise("aaaaaaaaaaaa");
        assert!(advice.iter().any(|m| m.contains("repeating")));
    }

    #[test]
    fn mixed_class_runs_are_not_sequences() {
        // '9' then ':' then ';' ascend in code points but are not letters or digits
        let advice = advise("A9:;b");
        assert!(!advice.iter().any(|m| m.contains("consecutive")));
    }
}
