// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::ScoringStrategy;
use crate::strength::{self, estimate_policy, evaluate_with};
use crate::api::types::{
    AnalysisQuery, PasswordAnalysisRequest, PasswordAnalysisResponse,
    PasswordGenerationRequest, PasswordGenerationResponse, PolicyEstimateResponse,
};
use crate::utils::describe_secret;

/// Generate a password
///
/// Generates a password from the requested policy and rates it.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid policy", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    config: web::Data<Config>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> impl Responder {
    let policy = generation_req.to_policy(&config);

    if let Err(e) = policy.validate() {
        log::debug!("Rejected generation request: {}", e);
        return HttpResponse::BadRequest().json(PasswordGenerationResponse {
            success: false,
            password: None,
            strength: None,
            policy_strength: None,
            error: Some(e.to_string()),
        });
    }

    let generator = PasswordGenerator::new()
        .with_class_coverage(generation_req.ensure_coverage.unwrap_or(config.ensure_class_coverage));
    let password = generator.generate_password(&policy);

    let strategy = generation_req.strategy.unwrap_or(config.scoring_strategy);
    let strength = evaluate_with(&password, strategy);

    log::info!(
        "Generated password ({}, classes: {:?}, coverage: {})",
        describe_secret(&password),
        policy.enabled_classes(),
        generator.class_coverage()
    );

    HttpResponse::Ok().json(PasswordGenerationResponse {
        success: true,
        password: Some(password),
        strength: Some(strength),
        policy_strength: Some(estimate_policy(&policy)),
        error: None,
    })
}

fn analysis_response(password: &str, strategy: ScoringStrategy) -> HttpResponse {
    let assessment = evaluate_with(password, strategy);
    let feedback = strength::feedback(password, &assessment);

    log::debug!(
        "Analyzed password ({}): {} {}/{}",
        describe_secret(password),
        assessment.label,
        assessment.score,
        assessment.max_score
    );

    HttpResponse::Ok().json(PasswordAnalysisResponse {
        success: true,
        strength: Some(assessment),
        feedback,
        error: None,
    })
}

/// Analyze password strength
///
/// Analyzes the strength of a password passed in the path and provides feedback.
#[utoipa::path(
    get,
    path = "/generator/analysis/{pwd}",
    tag = "Generator",
    params(
        ("pwd" = String, Path, description = "Password to analyze"),
        AnalysisQuery
    ),
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse)
    )
)]
pub async fn analyze_password(
    config: web::Data<Config>,
    path: web::Path<String>,
    query: web::Query<AnalysisQuery>,
) -> impl Responder {
    // The path extractor has already percent-decoded the segment
    analysis_response(&path.into_inner(), query.strategy.unwrap_or(config.scoring_strategy))
}

/// Analyze password strength
///
/// Same as the path variant, with the password in the request body.
#[utoipa::path(
    post,
    path = "/generator/analysis",
    tag = "Generator",
    request_body = PasswordAnalysisRequest,
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse)
    )
)]
pub async fn analyze_password_body(
    config: web::Data<Config>,
    analysis_req: web::Json<PasswordAnalysisRequest>,
) -> impl Responder {
    analysis_response(
        &analysis_req.password,
        analysis_req.strategy.unwrap_or(config.scoring_strategy),
    )
}

/// Estimate policy strength
///
/// Rates a generation policy without generating a password.
#[utoipa::path(
    post,
    path = "/generator/estimate",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Policy estimate", body = PolicyEstimateResponse),
        (status = 400, description = "Invalid policy", body = PolicyEstimateResponse)
    )
)]
pub async fn estimate_policy_strength(
    config: web::Data<Config>,
    estimate_req: web::Json<PasswordGenerationRequest>,
) -> impl Responder {
    let policy = estimate_req.to_policy(&config);

    if let Err(e) = policy.validate() {
        return HttpResponse::BadRequest().json(PolicyEstimateResponse {
            success: false,
            policy: Some(policy),
            strength: None,
            error: Some(e.to_string()),
        });
    }

    let strength = estimate_policy(&policy);
    HttpResponse::Ok().json(PolicyEstimateResponse {
        success: true,
        policy: Some(policy),
        strength: Some(strength),
        error: None,
    })
}
