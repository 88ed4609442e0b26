// src/modules/position/adapter/outgoing/position_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::modules::candidate::adapter::outgoing::sea_orm_entity::candidates;
use crate::modules::position::adapter::outgoing::sea_orm_entity::{
    applications, interview_steps, interviews, positions,
};
use crate::modules::position::application::domain::entities::InterviewScore;
use crate::modules::position::application::ports::outgoing::{
    PositionApplicationRecord, PositionQuery, PositionQueryError, PositionRecord,
};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct PositionQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PositionQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PositionQuery for PositionQueryPostgres {
    async fn get_position(
        &self,
        position_id: i32,
    ) -> Result<Option<PositionRecord>, PositionQueryError> {
        let position = positions::Entity::find_by_id(position_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(position.map(|p| PositionRecord {
            id: p.id,
            title: p.title,
        }))
    }

    async fn list_applications(
        &self,
        position_id: i32,
    ) -> Result<Vec<PositionApplicationRecord>, PositionQueryError> {
        let apps = applications::Entity::find()
            .filter(applications::Column::PositionId.eq(position_id))
            .order_by_asc(applications::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if apps.is_empty() {
            return Ok(vec![]);
        }

        let candidate_ids = distinct(apps.iter().map(|a| a.candidate_id));
        let step_ids = distinct(apps.iter().map(|a| a.current_interview_step));
        let app_ids: Vec<i32> = apps.iter().map(|a| a.id).collect();

        let candidates_by_id: HashMap<i32, candidates::Model> = candidates::Entity::find()
            .filter(candidates::Column::Id.is_in(candidate_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let steps_by_id: HashMap<i32, interview_steps::Model> = interview_steps::Entity::find()
            .filter(interview_steps::Column::Id.is_in(step_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        let mut scores_by_app: HashMap<i32, Vec<InterviewScore>> = HashMap::new();
        for interview in interviews::Entity::find()
            .filter(interviews::Column::ApplicationId.is_in(app_ids))
            .order_by_asc(interviews::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
        {
            scores_by_app
                .entry(interview.application_id)
                .or_default()
                .push(InterviewScore::from(interview.score));
        }

        apps.into_iter()
            .map(|app| {
                let candidate = candidates_by_id.get(&app.candidate_id).ok_or_else(|| {
                    PositionQueryError::InconsistentData(format!(
                        "application {} references missing candidate {}",
                        app.id, app.candidate_id
                    ))
                })?;

                let step = steps_by_id
                    .get(&app.current_interview_step)
                    .ok_or_else(|| {
                        PositionQueryError::InconsistentData(format!(
                            "application {} references missing interview step {}",
                            app.id, app.current_interview_step
                        ))
                    })?;

                Ok(PositionApplicationRecord {
                    application_id: app.id,
                    candidate: candidate.to_identity(),
                    current_step: step.to_snapshot(),
                    scores: scores_by_app.remove(&app.id).unwrap_or_default(),
                    application_date: app.application_date.into(),
                })
            })
            .collect()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn distinct(ids: impl Iterator<Item = i32>) -> Vec<i32> {
    ids.collect::<BTreeSet<_>>().into_iter().collect()
}

fn map_db_err(e: DbErr) -> PositionQueryError {
    PositionQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
