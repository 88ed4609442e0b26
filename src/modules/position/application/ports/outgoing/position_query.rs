// src/modules/position/application/ports/outgoing/position_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::position::application::domain::entities::{
    CandidateIdentity, InterviewScore, InterviewStepSnapshot,
};

//
// ──────────────────────────────────────────────────────────
// Read models
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionRecord {
    pub id: i32,
    pub title: String,
}

/// One application against a position, with its joins already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionApplicationRecord {
    pub application_id: i32,
    pub candidate: CandidateIdentity,
    pub current_step: InterviewStepSnapshot,
    /// One entry per interview record, scored or not.
    pub scores: Vec<InterviewScore>,
    pub application_date: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PositionQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// A row points at a candidate or interview step that does not exist.
    #[error("Inconsistent data: {0}")]
    InconsistentData(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PositionQuery: Send + Sync {
    async fn get_position(
        &self,
        position_id: i32,
    ) -> Result<Option<PositionRecord>, PositionQueryError>;

    /// All applications for the position. Order is not guaranteed.
    async fn list_applications(
        &self,
        position_id: i32,
    ) -> Result<Vec<PositionApplicationRecord>, PositionQueryError>;
}
