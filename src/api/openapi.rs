use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::modules::candidate::adapter::incoming::web::routes::UpdateCandidateStageRequest;
use crate::modules::candidate::application::ports::incoming::use_cases::CandidateStageUpdate;
use crate::modules::candidate::application::ports::outgoing::CandidateRecord;
use crate::modules::position::application::domain::entities::InterviewStepSnapshot;
use crate::modules::position::application::ports::incoming::use_cases::{
    CandidateWithStage, PositionCandidatesView,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Applicant Tracking API",
        version = "1.0.0",
        description = "Recruiter-facing pipeline endpoints: candidates per position and interview stage transitions"
    ),
    paths(
        crate::modules::position::adapter::incoming::web::routes::get_position_candidates_handler,
        crate::modules::candidate::adapter::incoming::web::routes::get_candidate_handler,
        crate::modules::candidate::adapter::incoming::web::routes::update_candidate_stage_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            InterviewStepSnapshot,
            CandidateWithStage,
            PositionCandidatesView,
            CandidateRecord,
            UpdateCandidateStageRequest,
            CandidateStageUpdate,
        )
    ),
    tags(
        (name = "positions", description = "Position pipeline views"),
        (name = "candidates", description = "Candidate lookup and stage transitions"),
    )
)]
pub struct ApiDoc;
