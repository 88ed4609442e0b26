mod candidate_query_postgres;
mod candidate_stage_repository_postgres;
pub mod sea_orm_entity;

pub use candidate_query_postgres::CandidateQueryPostgres;
pub use candidate_stage_repository_postgres::CandidateStageRepositoryPostgres;
