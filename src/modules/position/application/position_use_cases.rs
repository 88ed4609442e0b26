use std::sync::Arc;

use crate::modules::position::application::ports::incoming::use_cases::GetPositionCandidatesUseCase;

#[derive(Clone)]
pub struct PositionUseCases {
    pub get_candidates: Arc<dyn GetPositionCandidatesUseCase + Send + Sync>,
}
