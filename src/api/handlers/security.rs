// src/api/handlers/security.rs
use actix_web::{web, HttpResponse, Responder};

use crate::api::types::{SecurityAssessmentRequest, SecurityAssessmentResponse};
use crate::strength::security::passes_strength_check;
use crate::strength::{AgeStatus, SecurityLevel};

/// Rate a stored credential
///
/// Maps a record's security score and password age onto display tiers.
#[utoipa::path(
    post,
    path = "/security/assessment",
    tag = "Security",
    request_body = SecurityAssessmentRequest,
    responses(
        (status = 200, description = "Security tiers", body = SecurityAssessmentResponse),
        (status = 400, description = "Score or age out of range", body = SecurityAssessmentResponse)
    )
)]
pub async fn assess_record(req: web::Json<SecurityAssessmentRequest>) -> impl Responder {
    let bad_request = |message: String| {
        HttpResponse::BadRequest().json(SecurityAssessmentResponse {
            success: false,
            level: None,
            passes_strength_check: false,
            age_status: None,
            error: Some(message),
        })
    };

    if req.security_score > 100 {
        return bad_request(format!("Security score must be between 0 and 100 (got {})", req.security_score));
    }

    if let Some(days) = req.password_age_days {
        if days < 0 {
            return bad_request(format!("Password age cannot be negative (got {})", days));
        }
    }

    HttpResponse::Ok().json(SecurityAssessmentResponse {
        success: true,
        level: Some(SecurityLevel::from_score(req.security_score)),
        passes_strength_check: passes_strength_check(req.security_score),
        age_status: req.password_age_days.map(AgeStatus::from_days),
        error: None,
    })
}
