pub use sea_orm_migration::prelude::*;

mod m20240115_000001_create_candidates_table;
mod m20240115_000002_create_interview_flows_tables;
mod m20240115_000003_create_positions_table;
mod m20240115_000004_create_applications_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240115_000001_create_candidates_table::Migration),
            Box::new(m20240115_000002_create_interview_flows_tables::Migration),
            Box::new(m20240115_000003_create_positions_table::Migration),
            Box::new(m20240115_000004_create_applications_tables::Migration),
        ]
    }
}
