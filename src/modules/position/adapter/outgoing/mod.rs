mod position_query_postgres;
pub mod sea_orm_entity;

pub use position_query_postgres::PositionQueryPostgres;
