pub mod entities;
pub mod stage_transition;
