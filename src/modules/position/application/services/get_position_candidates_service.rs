use async_trait::async_trait;

use crate::modules::position::application::domain::scoring::average_score;
use crate::modules::position::application::ports::incoming::use_cases::{
    CandidateWithStage, GetPositionCandidatesError, GetPositionCandidatesUseCase,
    PositionCandidatesView,
};
use crate::modules::position::application::ports::outgoing::{
    PositionApplicationRecord, PositionQuery, PositionQueryError,
};

pub struct GetPositionCandidatesService<Q>
where
    Q: PositionQuery,
{
    query: Q,
}

impl<Q> GetPositionCandidatesService<Q>
where
    Q: PositionQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPositionCandidatesUseCase for GetPositionCandidatesService<Q>
where
    Q: PositionQuery + Send + Sync,
{
    async fn execute(
        &self,
        position_id: i32,
    ) -> Result<PositionCandidatesView, GetPositionCandidatesError> {
        let position = self
            .query
            .get_position(position_id)
            .await
            .map_err(map_query_err)?
            .ok_or(GetPositionCandidatesError::PositionNotFound)?;

        let mut applications = self
            .query
            .list_applications(position.id)
            .await
            .map_err(map_query_err)?;

        // Stable: applications at the same stage keep the store's order.
        applications.sort_by_key(|app| app.current_step.order_index);

        Ok(PositionCandidatesView {
            position_id: position.id,
            position_title: position.title,
            candidates: applications.into_iter().map(to_candidate_with_stage).collect(),
        })
    }
}

fn to_candidate_with_stage(app: PositionApplicationRecord) -> CandidateWithStage {
    CandidateWithStage {
        candidate_id: app.candidate.id,
        full_name: app.candidate.full_name(),
        email: app.candidate.email,
        current_interview_step: app.current_step,
        average_score: average_score(&app.scores),
        total_interviews: app.scores.len(),
        application_date: app.application_date,
    }
}

fn map_query_err(e: PositionQueryError) -> GetPositionCandidatesError {
    GetPositionCandidatesError::PositionQueryFailed(e.to_string())
}
