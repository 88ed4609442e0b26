use actix_web::web;
use std::sync::Arc;

use crate::modules::candidate::application::candidate_use_cases::CandidateUseCases;
use crate::modules::candidate::application::ports::incoming::use_cases::{
    GetCandidateUseCase, UpdateCandidateStageUseCase,
};
use crate::modules::position::application::ports::incoming::use_cases::GetPositionCandidatesUseCase;
use crate::modules::position::application::position_use_cases::PositionUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// `AppState` for handler tests. Every use case starts as a stub that
/// panics when called; tests swap in the ones they exercise.
pub struct TestAppStateBuilder {
    position: PositionUseCases,
    candidate: CandidateUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            position: PositionUseCases {
                get_candidates: Arc::new(StubGetPositionCandidatesUseCase),
            },
            candidate: CandidateUseCases {
                get_single: Arc::new(StubGetCandidateUseCase),
                update_stage: Arc::new(StubUpdateCandidateStageUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_position_candidates(
        mut self,
        uc: impl GetPositionCandidatesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.position.get_candidates = Arc::new(uc);
        self
    }

    pub fn with_get_candidate(
        mut self,
        uc: impl GetCandidateUseCase + Send + Sync + 'static,
    ) -> Self {
        self.candidate.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_candidate_stage(
        mut self,
        uc: impl UpdateCandidateStageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.candidate.update_stage = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            position: self.position,
            candidate: self.candidate,
        })
    }
}
