use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::modules::candidate::application::domain::stage_transition::{
    notes_to_store, StageTransition,
};
use crate::modules::candidate::application::ports::incoming::use_cases::{
    CandidateStageUpdate, UpdateCandidateStageCommand, UpdateCandidateStageError,
    UpdateCandidateStageUseCase,
};
use crate::modules::candidate::application::ports::outgoing::{
    CandidateQuery, CandidateStageRepository,
};

pub struct UpdateCandidateStageService<Q, R>
where
    Q: CandidateQuery,
    R: CandidateStageRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateCandidateStageService<Q, R>
where
    Q: CandidateQuery,
    R: CandidateStageRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateCandidateStageUseCase for UpdateCandidateStageService<Q, R>
where
    Q: CandidateQuery + Send + Sync,
    R: CandidateStageRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateCandidateStageCommand,
    ) -> Result<CandidateStageUpdate, UpdateCandidateStageError> {
        let candidate = self
            .query
            .find_with_applications(command.candidate_id())
            .await
            .map_err(|e| UpdateCandidateStageError::StageUpdateFailed(e.to_string()))?
            .ok_or(UpdateCandidateStageError::CandidateNotFound)?;

        let transition = StageTransition::plan(&candidate, command.interview_step_id())?;

        self.repository
            .update_application_stage(
                transition.application_id,
                transition.target_step.id,
                notes_to_store(command.notes()),
            )
            .await
            .map_err(|e| UpdateCandidateStageError::StageUpdateFailed(e.to_string()))?;

        info!(
            candidate_id = candidate.candidate.id,
            application_id = transition.application_id,
            position_id = transition.position_id,
            from_step = transition.previous_step.id,
            to_step = transition.target_step.id,
            "Candidate stage updated"
        );

        Ok(CandidateStageUpdate {
            candidate_id: candidate.candidate.id,
            full_name: candidate.candidate.full_name(),
            email: candidate.candidate.email,
            updated_interview_step: transition.target_step,
            previous_interview_step: transition.previous_step,
            updated_at: Utc::now(),
            notes: command.into_notes(),
        })
    }
}
