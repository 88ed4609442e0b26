use async_trait::async_trait;

use crate::modules::candidate::application::ports::incoming::use_cases::{
    CandidateStageUpdate, GetCandidateError, GetCandidateUseCase, UpdateCandidateStageCommand,
    UpdateCandidateStageError, UpdateCandidateStageUseCase,
};
use crate::modules::candidate::application::ports::outgoing::CandidateRecord;
use crate::modules::position::application::ports::incoming::use_cases::{
    GetPositionCandidatesError, GetPositionCandidatesUseCase, PositionCandidatesView,
};

#[derive(Default, Clone)]
pub struct StubGetPositionCandidatesUseCase;

#[async_trait]
impl GetPositionCandidatesUseCase for StubGetPositionCandidatesUseCase {
    async fn execute(
        &self,
        _position_id: i32,
    ) -> Result<PositionCandidatesView, GetPositionCandidatesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetCandidateUseCase;

#[async_trait]
impl GetCandidateUseCase for StubGetCandidateUseCase {
    async fn execute(&self, _candidate_id: i32) -> Result<CandidateRecord, GetCandidateError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateCandidateStageUseCase;

#[async_trait]
impl UpdateCandidateStageUseCase for StubUpdateCandidateStageUseCase {
    async fn execute(
        &self,
        _command: UpdateCandidateStageCommand,
    ) -> Result<CandidateStageUpdate, UpdateCandidateStageError> {
        unimplemented!("Not used in this test")
    }
}
