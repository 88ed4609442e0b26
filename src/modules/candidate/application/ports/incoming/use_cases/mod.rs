mod get_candidate;
mod update_candidate_stage;

pub use get_candidate::{GetCandidateError, GetCandidateUseCase};
pub use update_candidate_stage::{
    CandidateStageUpdate, UpdateCandidateStageCommand, UpdateCandidateStageCommandError,
    UpdateCandidateStageError, UpdateCandidateStageUseCase,
};
