use std::sync::Arc;

use crate::modules::candidate::application::ports::incoming::use_cases::{
    GetCandidateUseCase, UpdateCandidateStageUseCase,
};

#[derive(Clone)]
pub struct CandidateUseCases {
    pub get_single: Arc<dyn GetCandidateUseCase + Send + Sync>,
    pub update_stage: Arc<dyn UpdateCandidateStageUseCase + Send + Sync>,
}
