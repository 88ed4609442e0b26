mod get_position_candidates_service;

pub use get_position_candidates_service::GetPositionCandidatesService;
