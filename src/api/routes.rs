// src/api/routes.rs
use super::handlers;
use super::types::ErrorResponse;
use actix_web::{error, web, HttpRequest, HttpResponse};

// Keep the {success, error} envelope for bodies that fail to deserialize
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid request body: {}", err);
    log::debug!("{}", message);
    let response = HttpResponse::BadRequest().json(ErrorResponse {
        success: false,
        error: message,
    });
    error::InternalError::from_response(err, response).into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    cfg.route("/health", web::get().to(handlers::health::health));

    // Generator routes
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password))
            .route("/analysis", web::post().to(handlers::generator::analyze_password_body))
            .route("/analysis/{pwd}", web::get().to(handlers::generator::analyze_password))
            .route("/estimate", web::post().to(handlers::generator::estimate_policy_strength))
    );

    // Stored credential tiers
    cfg.service(
        web::scope("/security")
            .route("/assessment", web::post().to(handlers::security::assess_record))
    );
}
