mod get_candidate;
mod update_candidate_stage;

pub use get_candidate::*;
pub use update_candidate_stage::*;
