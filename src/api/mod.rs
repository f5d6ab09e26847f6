// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use crate::core::config::Config;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

pub mod types;
pub mod routes;
pub mod handlers;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::health::health,

        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::analyze_password,
        crate::api::handlers::generator::analyze_password_body,
        crate::api::handlers::generator::estimate_policy_strength,

        // Security endpoints
        crate::api::handlers::security::assess_record
    ),
    components(
        schemas(
            crate::api::types::HealthResponse,
            crate::api::types::ErrorResponse,
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::PasswordAnalysisRequest,
            crate::api::types::PasswordAnalysisResponse,
            crate::api::types::PolicyEstimateResponse,
            crate::api::types::SecurityAssessmentRequest,
            crate::api::types::SecurityAssessmentResponse,

            // Core models
            crate::models::GenerationPolicy,
            crate::models::CharacterClass,
            crate::models::ScoringStrategy,
            crate::models::StrengthLabel,
            crate::models::StrengthAssessment,
            crate::strength::SecurityLevel,
            crate::strength::AgeStatus
        )
    ),
    tags(
        (name = "Generator", description = "Password generation and strength endpoints"),
        (name = "Security", description = "Stored credential security tiers"),
        (name = "System", description = "Service status")
    ),
    info(
        title = "Passforge API",
        version = "0.1.0",
        description = "Password generator and strength evaluator API",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(config: Config) -> std::io::Result<()> {
    let address = config.web_address.clone();
    let port = config.web_port;
    log::info!("Starting Passforge API server on {}:{}", address, port);

    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        // The dashboard front end is served from another origin
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                "Content-Type",
                "Accept",
                "X-Requested-With",
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(config_data.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address.as_str(), port))?
    .run()
    .await
}
