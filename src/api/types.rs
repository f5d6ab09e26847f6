// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use utoipa::IntoParams;

use crate::core::config::Config;
use crate::models::{GenerationPolicy, ScoringStrategy, StrengthAssessment};
use crate::strength::{AgeStatus, SecurityLevel};

// Service health
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok" when the service answers
    pub status: String,
    /// Crate version
    pub version: String,
}

// Returned when a request body cannot be parsed
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// What was wrong with the request
    pub error: String,
}

// Generator requests and responses
#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct PasswordGenerationRequest {
    /// Password length (default: configured, 16)
    pub length: Option<usize>,
    /// Include uppercase letters (default: true)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (default: true)
    pub include_lowercase: Option<bool>,
    /// Include numbers (default: true)
    pub include_numbers: Option<bool>,
    /// Include symbols (default: true)
    pub include_symbols: Option<bool>,
    /// Exclude similar characters (default: configured, false)
    pub exclude_similar: Option<bool>,
    /// Guarantee every enabled class appears (default: configured, false)
    pub ensure_coverage: Option<bool>,
    /// Scoring strategy for the returned strength (default: configured)
    pub strategy: Option<ScoringStrategy>,
}

impl PasswordGenerationRequest {
    /// Merge the request over the configured default policy.
    pub fn to_policy(&self, config: &Config) -> GenerationPolicy {
        let defaults = config.default_policy();
        GenerationPolicy {
            length: self.length.unwrap_or(defaults.length),
            use_uppercase: self.include_uppercase.unwrap_or(defaults.use_uppercase),
            use_lowercase: self.include_lowercase.unwrap_or(defaults.use_lowercase),
            use_digits: self.include_numbers.unwrap_or(defaults.use_digits),
            use_symbols: self.include_symbols.unwrap_or(defaults.use_symbols),
            exclude_similar: self.exclude_similar.unwrap_or(defaults.exclude_similar),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    pub password: Option<String>,
    /// Strength of the generated password
    pub strength: Option<StrengthAssessment>,
    /// Strength the policy itself is capable of
    pub policy_strength: Option<StrengthAssessment>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisRequest {
    /// Password to analyze
    pub password: String,
    /// Scoring strategy (default: configured)
    pub strategy: Option<ScoringStrategy>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AnalysisQuery {
    /// Scoring strategy (default: configured)
    pub strategy: Option<ScoringStrategy>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Strength assessment
    pub strength: Option<StrengthAssessment>,
    /// Feedback and suggestions for improvement
    pub feedback: Vec<String>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PolicyEstimateResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Effective policy after defaults were applied
    pub policy: Option<GenerationPolicy>,
    /// Estimated strength of the policy
    pub strength: Option<StrengthAssessment>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

// Stored credential security
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SecurityAssessmentRequest {
    /// Security score of the record, 0-100
    pub security_score: u8,
    /// Days since the password was last changed
    pub password_age_days: Option<i64>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SecurityAssessmentResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Security level for the score
    pub level: Option<SecurityLevel>,
    /// Whether the score passes the password strength check
    pub passes_strength_check: bool,
    /// Age bucket, when an age was supplied
    pub age_status: Option<AgeStatus>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_request_uses_configured_defaults() {
        let config = Config {
            default_password_length: 20,
            default_password_exclude_similar: true,
            ..Config::default()
        };
        let policy = PasswordGenerationRequest::default().to_policy(&config);
        assert_eq!(policy.length, 20);
        assert!(policy.exclude_similar);
        assert!(policy.use_uppercase && policy.use_lowercase && policy.use_digits && policy.use_symbols);
    }

    #[test]
    fn request_fields_override_defaults() {
        let request: PasswordGenerationRequest = serde_json::from_str(
            r#"{"length": 8, "include_symbols": false, "strategy": "weighted"}"#,
        )
        .unwrap();
        let policy = request.to_policy(&Config::default());
        assert_eq!(policy.length, 8);
        assert!(!policy.use_symbols);
        assert_eq!(request.strategy, Some(ScoringStrategy::Weighted));
    }
}
