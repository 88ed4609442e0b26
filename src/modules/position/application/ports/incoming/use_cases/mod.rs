mod get_position_candidates;

pub use get_position_candidates::{
    CandidateWithStage, GetPositionCandidatesError, GetPositionCandidatesUseCase,
    PositionCandidatesView,
};
