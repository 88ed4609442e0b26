pub mod candidate_query;
pub mod candidate_stage_repository;

pub use candidate_query::{CandidateQuery, CandidateQueryError, CandidateRecord};
pub use candidate_stage_repository::{CandidateStageRepository, CandidateStageRepositoryError};
