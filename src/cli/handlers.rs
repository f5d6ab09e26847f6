// src/cli/handlers.rs
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use console::{style, StyledObject};
use rand::Rng;
use serde::Serialize;

use crate::clipboard::Notification;
use crate::generators::{PasswordGenerator, PolicyError};
use crate::models::{GenerationPolicy, ScoringStrategy, StrengthAssessment, StrengthLabel};
use crate::strength::security::passes_strength_check;
use crate::strength::{self, estimate_policy, evaluate_with, AgeStatus, SecurityLevel};
use crate::utils::progress_bar;

const BAR_WIDTH: usize = 20;

#[derive(Debug, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: StrengthAssessment,
}

#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    pub policy: GenerationPolicy,
    pub policy_strength: StrengthAssessment,
    pub passwords: Vec<GeneratedPassword>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

#[derive(Debug, Serialize)]
pub struct EvaluateOutput {
    pub strength: StrengthAssessment,
    pub feedback: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct EstimateOutput {
    pub policy: GenerationPolicy,
    pub strength: StrengthAssessment,
}

#[derive(Debug, Serialize)]
pub struct SecurityOutput {
    pub score: u8,
    pub level: SecurityLevel,
    pub passes_strength_check: bool,
    pub age_status: Option<AgeStatus>,
}

// Handlers for CLI commands
pub fn handle_generate<R: Rng + ?Sized>(
    policy: &GenerationPolicy,
    generator: &PasswordGenerator,
    count: usize,
    strategy: ScoringStrategy,
    rng: &mut R,
) -> Result<GenerateOutput, PolicyError> {
    policy.validate()?;

    let passwords = (0..count)
        .map(|_| {
            let password = generator.generate_password_with_rng(policy, rng);
            let strength = evaluate_with(&password, strategy);
            GeneratedPassword { password, strength }
        })
        .collect();

    Ok(GenerateOutput {
        policy: policy.clone(),
        policy_strength: estimate_policy(policy),
        passwords,
        notification: None,
    })
}

pub fn handle_evaluate(candidate: &str, strategy: ScoringStrategy) -> EvaluateOutput {
    let strength = evaluate_with(candidate, strategy);
    let feedback = strength::feedback(candidate, &strength);
    EvaluateOutput { strength, feedback }
}

pub fn handle_estimate(policy: &GenerationPolicy) -> Result<EstimateOutput, PolicyError> {
    policy.validate()?;
    Ok(EstimateOutput {
        policy: policy.clone(),
        strength: estimate_policy(policy),
    })
}

pub fn handle_security(
    score: u8,
    changed: Option<NaiveDate>,
    age_days: Option<i64>,
    now: DateTime<Utc>,
) -> SecurityOutput {
    let age_status = match (changed, age_days) {
        (Some(date), _) => date
            .and_hms_opt(0, 0, 0)
            .map(|midnight| AgeStatus::since(Utc.from_utc_datetime(&midnight), now)),
        (None, Some(days)) => Some(AgeStatus::from_days(days)),
        (None, None) => None,
    };

    SecurityOutput {
        score,
        level: SecurityLevel::from_score(score),
        passes_strength_check: passes_strength_check(score),
        age_status,
    }
}

fn colorize<D>(value: D, color: &str) -> StyledObject<D> {
    let styled = style(value).bold();
    match color {
        "red" => styled.red(),
        "yellow" => styled.yellow(),
        "blue" => styled.blue(),
        "green" => styled.green(),
        _ => styled,
    }
}

/// One-line strength indicator: bar, label and score.
pub fn render_assessment(assessment: &StrengthAssessment) -> String {
    let label: StrengthLabel = assessment.label;
    format!(
        "Strength: {} {} ({}/{})",
        colorize(progress_bar(assessment.visual_weight, BAR_WIDTH), label.color()),
        colorize(label, label.color()),
        assessment.score,
        assessment.max_score
    )
}

pub fn render_notification(notification: &Notification) -> String {
    let icon = if notification.destructive { "❌" } else { "📋" };
    format!("{} {}: {}", icon, notification.title, notification.description)
}

pub fn render_generate(output: &GenerateOutput) -> String {
    let mut lines = Vec::new();
    for generated in &output.passwords {
        lines.push(format!("Generated Password: {}", generated.password));
        lines.push(render_assessment(&generated.strength));
    }
    if let Some(notification) = &output.notification {
        lines.push(render_notification(notification));
    }
    lines.join("\n")
}

pub fn render_evaluate(output: &EvaluateOutput) -> String {
    let mut lines = vec![render_assessment(&output.strength)];
    lines.extend(output.feedback.iter().map(|line| format!("  • {}", line)));
    lines.join("\n")
}

pub fn render_estimate(output: &EstimateOutput) -> String {
    let classes: Vec<String> = output
        .policy
        .enabled_classes()
        .iter()
        .map(|class| class.to_string())
        .collect();
    format!(
        "Policy: {} characters, {}\n{}",
        output.policy.length,
        classes.join(", "),
        render_assessment(&output.strength)
    )
}

pub fn render_security(output: &SecurityOutput) -> String {
    let mut lines = vec![
        format!(
            "Security Score: {}/100 {}",
            output.score,
            colorize(output.level, output.level.color())
        ),
        format!(
            "Password Strength: {}",
            if output.passes_strength_check { "✅" } else { "❌" }
        ),
    ];
    if let Some(age) = output.age_status {
        lines.push(format!("Password Age: {}", colorize(age, age.color())));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn generate_produces_requested_count() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let output = handle_generate(
            &GenerationPolicy::default(),
            &PasswordGenerator::new(),
            3,
            ScoringStrategy::Step,
            &mut rng,
        )
        .unwrap();
        assert_eq!(output.passwords.len(), 3);
        assert!(output.passwords.iter().all(|p| p.password.len() == 16));
        assert_eq!(output.policy_strength.label, StrengthLabel::Strong);
    }

    #[test]
    fn generate_rejects_invalid_policy() {
        let policy = GenerationPolicy { length: 60, ..GenerationPolicy::default() };
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let result = handle_generate(&policy, &PasswordGenerator::new(), 1, ScoringStrategy::Step, &mut rng);
        assert!(matches!(result, Err(PolicyError::LengthOutOfRange { length: 60, .. })));
    }

    #[test]
    fn security_prefers_change_date() {
        let now = Utc::now();
        let changed = (now - Duration::days(400)).date_naive();
        let output = handle_security(92, Some(changed), None, now);
        assert_eq!(output.level, SecurityLevel::Excellent);
        assert!(output.passes_strength_check);
        assert_eq!(output.age_status, Some(AgeStatus::VeryOld));

        let output = handle_security(60, None, Some(100), now);
        assert_eq!(output.level, SecurityLevel::Fair);
        assert!(!output.passes_strength_check);
        assert_eq!(output.age_status, Some(AgeStatus::Moderate));

        assert_eq!(handle_security(10, None, None, now).age_status, None);
    }

    #[test]
    fn evaluate_render_lists_feedback() {
        console::set_colors_enabled(false);
        let output = handle_evaluate("abcdefgh", ScoringStrategy::Step);
        let text = render_evaluate(&output);
        assert!(text.starts_with("Strength: "));
        assert!(text.contains("Weak (2/6)"));
        assert!(text.contains("• Weak password"));
    }
}
