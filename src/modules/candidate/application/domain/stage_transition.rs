use crate::modules::candidate::application::domain::entities::{
    ApplicationSnapshot, CandidateApplications, PositionFlow,
};
use crate::modules::position::application::domain::entities::InterviewStepSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StageTransitionError {
    #[error("No active application found")]
    NoActiveApplication,

    #[error("Invalid interview stage for this position")]
    InvalidStage,

    #[error("Cannot move candidate to a previous stage")]
    BackwardTransition,
}

/// A validated, not yet persisted, move of one application to a new step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageTransition {
    pub application_id: i32,
    pub position_id: i32,
    pub previous_step: InterviewStepSnapshot,
    pub target_step: InterviewStepSnapshot,
}

impl StageTransition {
    /// Checks, in order: an active application exists, the target step
    /// belongs to its position's flow, and the move does not go backwards.
    /// Staying on the same step, or a step with the same order index, is allowed.
    pub fn plan(
        candidate: &CandidateApplications,
        target_step_id: i32,
    ) -> Result<Self, StageTransitionError> {
        let (application, flow, current_step) = active_application(candidate)
            .ok_or(StageTransitionError::NoActiveApplication)?;

        let target_step = flow
            .steps
            .iter()
            .find(|step| step.id == target_step_id)
            .ok_or(StageTransitionError::InvalidStage)?;

        if target_step.order_index < current_step.order_index {
            return Err(StageTransitionError::BackwardTransition);
        }

        Ok(Self {
            application_id: application.id,
            position_id: flow.position_id,
            previous_step: current_step.clone(),
            target_step: target_step.clone(),
        })
    }
}

/// First application, in store order, whose position and current step both
/// resolved.
// NOTE: a candidate with several live applications always moves the first
// one; which application should win is an open product question.
fn active_application(
    candidate: &CandidateApplications,
) -> Option<(&ApplicationSnapshot, &PositionFlow, &InterviewStepSnapshot)> {
    candidate.applications.iter().find_map(|app| {
        match (app.position.as_ref(), app.current_step.as_ref()) {
            (Some(flow), Some(step)) => Some((app, flow, step)),
            _ => None,
        }
    })
}

/// Value to write into the application's notes column.
///
/// `None` (or an empty string) leaves the stored notes untouched.
pub fn notes_to_store(supplied: Option<&str>) -> Option<String> {
    supplied.filter(|n| !n.is_empty()).map(str::to_string)
}
