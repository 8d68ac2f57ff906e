// Route exports
pub mod analysis;

use actix_web::{error, web, HttpRequest};

use crate::error::AnalysisError;

pub use analysis::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(analysis::configure),
    );
}

/// JSON config whose payload errors render as `ErrorResponse` bodies
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(handle_json_payload_error)
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    AnalysisError::InvalidJson(err.to_string()).into()
}
