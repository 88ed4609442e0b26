use crate::modules::position::application::domain::entities::{
    CandidateIdentity, InterviewStepSnapshot,
};

/// The interview flow of the position an application targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionFlow {
    pub position_id: i32,
    pub steps: Vec<InterviewStepSnapshot>,
}

/// An application as seen by the stage transition rules.
///
/// `position` and `current_step` are `None` when the referenced rows could
/// not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationSnapshot {
    pub id: i32,
    pub position: Option<PositionFlow>,
    pub current_step: Option<InterviewStepSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateApplications {
    pub candidate: CandidateIdentity,
    /// Ordered by application id.
    pub applications: Vec<ApplicationSnapshot>,
}
