// src/api/schemas.rs
//
// Documentation-only mirror of the `shared::api::ApiResponse` error envelope.

use serde::Serialize;
use utoipa::ToSchema;

/// Envelope of every 4xx/5xx response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable machine-readable code, e.g. `INVALID_STAGE`, `CANDIDATE_NOT_FOUND`
    #[schema(example = "BACKWARD_TRANSITION")]
    pub code: String,
    #[schema(example = "Cannot move candidate to a previous stage")]
    pub message: String,
}
