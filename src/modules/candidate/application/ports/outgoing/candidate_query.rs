// src/modules/candidate/application/ports/outgoing/candidate_query.rs

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::candidate::application::domain::entities::CandidateApplications;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CandidateQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CandidateQuery: Send + Sync {
    async fn get_by_id(&self, candidate_id: i32)
        -> Result<Option<CandidateRecord>, CandidateQueryError>;

    /// Candidate plus every application, each with its position's flow steps
    /// and its current step resolved where possible.
    async fn find_with_applications(
        &self,
        candidate_id: i32,
    ) -> Result<Option<CandidateApplications>, CandidateQueryError>;
}
