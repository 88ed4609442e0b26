use actix_web::{route, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::candidate::application::ports::incoming::use_cases::{
    CandidateStageUpdate, UpdateCandidateStageCommand, UpdateCandidateStageCommandError,
    UpdateCandidateStageError,
};
use crate::shared::api::{parse_positive_id, ApiResponse};
use crate::shared::error::{ClassifiedError, ErrorKind};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCandidateStageRequest {
    /// Kept loose so that strings, fractions and nulls surface as
    /// `INVALID_INTERVIEW_STEP_ID` instead of a body parse error.
    #[schema(value_type = i64, example = 2)]
    pub interview_step_id: Option<Value>,
    #[schema(example = "Passed the technical interview", max_length = 500)]
    pub notes: Option<String>,
}

/// Move a candidate to another interview step
///
/// Applies to the candidate's first active application. The target step
/// must belong to that application's interview flow and must not come
/// before the current step. Also served on `PUT`.
#[utoipa::path(
    patch,
    path = "/candidates/{id}/stage",
    tag = "candidates",
    params(("id" = String, Path, description = "Candidate id (positive integer)")),
    request_body = UpdateCandidateStageRequest,
    responses(
        (status = 200, description = "Stage updated", body = CandidateStageUpdate),
        (status = 400, description = "Invalid input or transition not allowed", body = ErrorResponse),
        (status = 404, description = "Candidate not found", body = ErrorResponse),
        (status = 500, description = "Unexpected error", body = ErrorResponse)
    )
)]
#[route("/candidates/{id}/stage", method = "PATCH", method = "PUT")]
pub async fn update_candidate_stage_handler(
    path: web::Path<String>,
    payload: web::Json<UpdateCandidateStageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw_id = path.into_inner();

    let Some(candidate_id) = parse_positive_id(&raw_id) else {
        warn!(raw_id = %raw_id, "Rejected candidate id");
        return ApiResponse::from_error(&UpdateCandidateStageCommandError::InvalidCandidateId);
    };

    let payload = payload.into_inner();
    let interview_step_id = payload.interview_step_id.as_ref().and_then(integral_number);

    let command =
        match UpdateCandidateStageCommand::new(candidate_id, interview_step_id, payload.notes) {
            Ok(cmd) => cmd,
            Err(err) => {
                warn!(candidate_id, error = %err, "Rejected stage update request");
                return ApiResponse::from_error(&err);
            }
        };
    let interview_step_id = command.interview_step_id();

    match data.candidate.update_stage.execute(command).await {
        Ok(update) => ApiResponse::ok(&update),
        Err(err) => map_error(candidate_id, interview_step_id, err),
    }
}

/// JSON integers, plus floats with no fractional part (`2.0` is `2`).
/// Range checks are left to the command.
fn integral_number(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn map_error(
    candidate_id: i32,
    interview_step_id: i32,
    err: UpdateCandidateStageError,
) -> HttpResponse {
    match err.kind() {
        ErrorKind::Unexpected => {
            error!(candidate_id, interview_step_id, error = %err, "Failed to update candidate stage");
        }
        _ => {
            info!(candidate_id, interview_step_id, code = err.code(), "Stage update refused");
        }
    }
    ApiResponse::from_error(&err)
}
