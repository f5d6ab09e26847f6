// src/strength/mod.rs
//! Heuristic strength scoring.
//!
//! Both scoring strategies share one table-driven implementation: a set of
//! per-criterion weights, three label thresholds and a rule for the progress
//! bar. [`evaluate`] uses the canonical [`ScoringStrategy::Step`] table.

use crate::models::{ScoringStrategy, StrengthAssessment, StrengthLabel};

pub mod feedback;
pub mod policy;
pub mod security;

pub use feedback::feedback;
pub use policy::estimate_policy;
pub use security::{AgeStatus, SecurityLevel};

/// What the scorer looks at in a candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Criteria {
    pub length: usize,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    /// Anything outside `[A-Za-z0-9]`, including whitespace and non-ASCII
    pub has_symbol: bool,
}

impl Criteria {
    pub fn inspect(candidate: &str) -> Self {
        let mut criteria = Criteria::default();
        for c in candidate.chars() {
            criteria.length += 1;
            if c.is_ascii_lowercase() {
                criteria.has_lowercase = true;
            } else if c.is_ascii_uppercase() {
                criteria.has_uppercase = true;
            } else if c.is_ascii_digit() {
                criteria.has_digit = true;
            } else {
                criteria.has_symbol = true;
            }
        }
        criteria
    }
}

struct Weights {
    min_length: u8,
    long_length: u8,
    lowercase: u8,
    uppercase: u8,
    digit: u8,
    symbol: u8,
}

enum VisualScale {
    ByLabel,
    ByScore,
}

struct ScoringTable {
    weights: Weights,
    max_score: u8,
    // Inclusive upper bounds for Weak, Fair and Good
    thresholds: [u8; 3],
    visual: VisualScale,
}

const STEP: ScoringTable = ScoringTable {
    weights: Weights { min_length: 1, long_length: 1, lowercase: 1, uppercase: 1, digit: 1, symbol: 1 },
    max_score: 6,
    thresholds: [2, 4, 5],
    visual: VisualScale::ByLabel,
};

const WEIGHTED: ScoringTable = ScoringTable {
    weights: Weights { min_length: 15, long_length: 15, lowercase: 15, uppercase: 15, digit: 15, symbol: 25 },
    max_score: 100,
    thresholds: [30, 60, 85],
    visual: VisualScale::ByScore,
};

pub const MIN_LENGTH_BONUS: usize = 8;
pub const LONG_LENGTH_BONUS: usize = 12;

fn table(strategy: ScoringStrategy) -> &'static ScoringTable {
    match strategy {
        ScoringStrategy::Step => &STEP,
        ScoringStrategy::Weighted => &WEIGHTED,
    }
}

impl ScoringStrategy {
    pub fn max_score(self) -> u8 {
        table(self).max_score
    }

    /// Bucket a raw score into a label.
    pub fn label_for(self, score: u8) -> StrengthLabel {
        let [weak, fair, good] = table(self).thresholds;
        if score <= weak {
            StrengthLabel::Weak
        } else if score <= fair {
            StrengthLabel::Fair
        } else if score <= good {
            StrengthLabel::Good
        } else {
            StrengthLabel::Strong
        }
    }

    fn visual_weight(self, score: u8, label: StrengthLabel) -> u8 {
        match table(self).visual {
            VisualScale::ByLabel => label.visual_weight(),
            VisualScale::ByScore => score.min(100),
        }
    }

    /// Build an assessment from an already computed score.
    pub fn assess(self, score: u8) -> StrengthAssessment {
        let label = self.label_for(score);
        StrengthAssessment {
            score,
            max_score: self.max_score(),
            label,
            visual_weight: self.visual_weight(score, label),
            strategy: self,
        }
    }

    pub fn score(self, criteria: &Criteria) -> u8 {
        let w = &table(self).weights;
        let mut score = 0;

        if criteria.length >= MIN_LENGTH_BONUS {
            score += w.min_length;
        }
        if criteria.length >= LONG_LENGTH_BONUS {
            score += w.long_length;
        }
        if criteria.has_lowercase {
            score += w.lowercase;
        }
        if criteria.has_uppercase {
            score += w.uppercase;
        }
        if criteria.has_digit {
            score += w.digit;
        }
        if criteria.has_symbol {
            score += w.symbol;
        }

        score
    }
}

/// Score a candidate with the canonical step strategy.
pub fn evaluate(candidate: &str) -> StrengthAssessment {
    evaluate_with(candidate, ScoringStrategy::default())
}

pub fn evaluate_with(candidate: &str, strategy: ScoringStrategy) -> StrengthAssessment {
    let criteria = Criteria::inspect(candidate);
    strategy.assess(strategy.score(&criteria))
}
