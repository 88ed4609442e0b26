// src/modules/candidate/application/ports/outgoing/candidate_stage_repository.rs

use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CandidateStageRepositoryError {
    #[error("Application not found")]
    ApplicationNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side, applications table only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CandidateStageRepository: Send + Sync {
    /// Single UPDATE of the application's current step.
    /// `notes: None` keeps the stored notes.
    async fn update_application_stage(
        &self,
        application_id: i32,
        interview_step_id: i32,
        notes: Option<String>,
    ) -> Result<(), CandidateStageRepositoryError>;
}
