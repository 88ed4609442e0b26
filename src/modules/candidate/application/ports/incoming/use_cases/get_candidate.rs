use async_trait::async_trait;

use crate::modules::candidate::application::ports::outgoing::CandidateRecord;
use crate::shared::error::{ClassifiedError, ErrorKind};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCandidateError {
    #[error("Candidate not found")]
    CandidateNotFound,

    #[error("Failed to fetch candidate: {0}")]
    QueryFailed(String),
}

impl ClassifiedError for GetCandidateError {
    fn kind(&self) -> ErrorKind {
        match self {
            GetCandidateError::CandidateNotFound => ErrorKind::NotFound,
            GetCandidateError::QueryFailed(_) => ErrorKind::Unexpected,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            GetCandidateError::CandidateNotFound => "CANDIDATE_NOT_FOUND",
            GetCandidateError::QueryFailed(_) => "CANDIDATE_QUERY_FAILED",
        }
    }
}

#[async_trait]
pub trait GetCandidateUseCase: Send + Sync {
    async fn execute(&self, candidate_id: i32) -> Result<CandidateRecord, GetCandidateError>;
}
