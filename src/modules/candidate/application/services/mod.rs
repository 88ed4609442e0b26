mod get_candidate_service;
mod update_candidate_stage_service;

pub use get_candidate_service::GetCandidateService;
pub use update_candidate_stage_service::UpdateCandidateStageService;
