// src/modules/candidate/adapter/outgoing/candidate_stage_repository_postgres.rs

use async_trait::async_trait;
use sea_orm::{sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::modules::candidate::application::ports::outgoing::{
    CandidateStageRepository, CandidateStageRepositoryError,
};
use crate::modules::position::adapter::outgoing::sea_orm_entity::applications::{Column, Entity};

#[derive(Clone)]
pub struct CandidateStageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CandidateStageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CandidateStageRepository for CandidateStageRepositoryPostgres {
    async fn update_application_stage(
        &self,
        application_id: i32,
        interview_step_id: i32,
        notes: Option<String>,
    ) -> Result<(), CandidateStageRepositoryError> {
        let mut update = Entity::update_many()
            .col_expr(Column::CurrentInterviewStep, Expr::value(interview_step_id));

        if let Some(notes) = notes {
            update = update.col_expr(Column::Notes, Expr::value(notes));
        }

        let res = update
            .filter(Column::Id.eq(application_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(CandidateStageRepositoryError::ApplicationNotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> CandidateStageRepositoryError {
    CandidateStageRepositoryError::DatabaseError(e.to_string())
}
