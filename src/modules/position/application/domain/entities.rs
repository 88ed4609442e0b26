use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One stage of an interview flow, as exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InterviewStepSnapshot {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Initial Screening")]
    pub name: String,
    /// Position of the step inside its flow; higher means further along.
    #[schema(example = 1)]
    pub order_index: i32,
}

/// Identity fields of a candidate. Immutable for this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateIdentity {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl CandidateIdentity {
    /// First name, one space, last name. No trimming.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Score recorded for a single interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterviewScore {
    Scored(i32),
    Pending,
}

impl From<Option<i32>> for InterviewScore {
    fn from(value: Option<i32>) -> Self {
        match value {
            Some(score) => InterviewScore::Scored(score),
            None => InterviewScore::Pending,
        }
    }
}
