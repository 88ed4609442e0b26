use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::candidate::application::domain::stage_transition::StageTransitionError;
use crate::modules::position::application::domain::entities::InterviewStepSnapshot;
use crate::shared::error::{ClassifiedError, ErrorKind};

/// Measured in UTF-16 code units.
pub const MAX_NOTES_LEN: usize = 500;

//
// ──────────────────────────────────────────────────────────
// Update Candidate Stage Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCandidateStageCommand {
    candidate_id: i32,
    interview_step_id: i32,
    notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateCandidateStageCommandError {
    #[error("Invalid candidate ID. Must be a positive integer.")]
    InvalidCandidateId,

    #[error("Invalid interviewStepId. Must be a positive integer.")]
    InvalidInterviewStepId,

    #[error("Notes too long. Maximum 500 characters allowed.")]
    NotesTooLong,
}

impl ClassifiedError for UpdateCandidateStageCommandError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::ValidationFailure
    }

    fn code(&self) -> &'static str {
        match self {
            UpdateCandidateStageCommandError::InvalidCandidateId => "INVALID_CANDIDATE_ID",
            UpdateCandidateStageCommandError::InvalidInterviewStepId => {
                "INVALID_INTERVIEW_STEP_ID"
            }
            UpdateCandidateStageCommandError::NotesTooLong => "NOTES_TOO_LONG",
        }
    }
}

impl UpdateCandidateStageCommand {
    /// `interview_step_id` is taken wide so that out-of-range values are
    /// reported as invalid input rather than a deserialization failure.
    pub fn new(
        candidate_id: i32,
        interview_step_id: Option<i64>,
        notes: Option<String>,
    ) -> Result<Self, UpdateCandidateStageCommandError> {
        if candidate_id <= 0 {
            return Err(UpdateCandidateStageCommandError::InvalidCandidateId);
        }

        let interview_step_id = interview_step_id
            .filter(|id| *id > 0)
            .and_then(|id| i32::try_from(id).ok())
            .ok_or(UpdateCandidateStageCommandError::InvalidInterviewStepId)?;

        if notes
            .as_deref()
            .is_some_and(|n| n.encode_utf16().count() > MAX_NOTES_LEN)
        {
            return Err(UpdateCandidateStageCommandError::NotesTooLong);
        }

        Ok(Self {
            candidate_id,
            interview_step_id,
            notes,
        })
    }

    pub fn candidate_id(&self) -> i32 {
        self.candidate_id
    }

    pub fn interview_step_id(&self) -> i32 {
        self.interview_step_id
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn into_notes(self) -> Option<String> {
        self.notes
    }
}

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateStageUpdate {
    #[schema(example = 1)]
    pub candidate_id: i32,
    #[schema(example = "John Doe")]
    pub full_name: String,
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    pub updated_interview_step: InterviewStepSnapshot,
    pub previous_interview_step: InterviewStepSnapshot,
    pub updated_at: DateTime<Utc>,
    /// Echo of the notes sent with the request, not the stored value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateCandidateStageError {
    #[error("Candidate not found")]
    CandidateNotFound,

    #[error("No active application found")]
    NoActiveApplication,

    #[error("Invalid interview stage for this position")]
    InvalidStage,

    #[error("Cannot move candidate to a previous stage")]
    BackwardTransition,

    #[error("Error updating candidate stage: {0}")]
    StageUpdateFailed(String),
}

impl From<StageTransitionError> for UpdateCandidateStageError {
    fn from(err: StageTransitionError) -> Self {
        match err {
            StageTransitionError::NoActiveApplication => {
                UpdateCandidateStageError::NoActiveApplication
            }
            StageTransitionError::InvalidStage => UpdateCandidateStageError::InvalidStage,
            StageTransitionError::BackwardTransition => {
                UpdateCandidateStageError::BackwardTransition
            }
        }
    }
}

impl ClassifiedError for UpdateCandidateStageError {
    fn kind(&self) -> ErrorKind {
        match self {
            UpdateCandidateStageError::CandidateNotFound => ErrorKind::NotFound,
            UpdateCandidateStageError::NoActiveApplication
            | UpdateCandidateStageError::InvalidStage
            | UpdateCandidateStageError::BackwardTransition => ErrorKind::ValidationFailure,
            UpdateCandidateStageError::StageUpdateFailed(_) => ErrorKind::Unexpected,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            UpdateCandidateStageError::CandidateNotFound => "CANDIDATE_NOT_FOUND",
            UpdateCandidateStageError::NoActiveApplication => "NO_ACTIVE_APPLICATION",
            UpdateCandidateStageError::InvalidStage => "INVALID_STAGE",
            UpdateCandidateStageError::BackwardTransition => "BACKWARD_TRANSITION",
            UpdateCandidateStageError::StageUpdateFailed(_) => "STAGE_UPDATE_FAILED",
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateCandidateStageUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateCandidateStageCommand,
    ) -> Result<CandidateStageUpdate, UpdateCandidateStageError>;
}
