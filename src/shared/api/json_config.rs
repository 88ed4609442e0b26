// src/shared/api/json_config.rs
use actix_web::web::JsonConfig;
use tracing::warn;

use crate::shared::api::ApiResponse;

/// Request bodies are small command payloads; anything larger is rejected
/// before deserialization.
const MAX_BODY_BYTES: usize = 16 * 1024;

/// Turns body extraction failures (malformed JSON, wrong field types,
/// missing content type) into the standard `400 VALIDATION_ERROR` envelope.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_BODY_BYTES)
        .error_handler(|err, req| {
            let message = err.to_string();
            warn!(path = %req.path(), error = %message, "Rejected request body");
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
