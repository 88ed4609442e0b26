use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::position::application::domain::entities::InterviewStepSnapshot;
use crate::shared::error::{ClassifiedError, ErrorKind};

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateWithStage {
    #[schema(example = 1)]
    pub candidate_id: i32,
    #[schema(example = "John Doe")]
    pub full_name: String,
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    pub current_interview_step: InterviewStepSnapshot,
    #[schema(example = 4.5)]
    pub average_score: f64,
    #[schema(example = 2)]
    pub total_interviews: usize,
    pub application_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PositionCandidatesView {
    #[schema(example = 1)]
    pub position_id: i32,
    #[schema(example = "Software Engineer")]
    pub position_title: String,
    /// Ordered by current interview step, earliest stage first.
    pub candidates: Vec<CandidateWithStage>,
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPositionCandidatesError {
    #[error("Position not found")]
    PositionNotFound,

    #[error("Error retrieving position candidates: {0}")]
    PositionQueryFailed(String),
}

impl ClassifiedError for GetPositionCandidatesError {
    fn kind(&self) -> ErrorKind {
        match self {
            GetPositionCandidatesError::PositionNotFound => ErrorKind::NotFound,
            GetPositionCandidatesError::PositionQueryFailed(_) => ErrorKind::Unexpected,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            GetPositionCandidatesError::PositionNotFound => "POSITION_NOT_FOUND",
            GetPositionCandidatesError::PositionQueryFailed(_) => "POSITION_QUERY_FAILED",
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetPositionCandidatesUseCase: Send + Sync {
    async fn execute(
        &self,
        position_id: i32,
    ) -> Result<PositionCandidatesView, GetPositionCandidatesError>;
}
