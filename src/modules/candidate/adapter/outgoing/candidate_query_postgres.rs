// src/modules/candidate/adapter/outgoing/candidate_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::modules::candidate::adapter::outgoing::sea_orm_entity::candidates;
use crate::modules::candidate::application::domain::entities::{
    ApplicationSnapshot, CandidateApplications, PositionFlow,
};
use crate::modules::candidate::application::ports::outgoing::{
    CandidateQuery, CandidateQueryError, CandidateRecord,
};
use crate::modules::position::adapter::outgoing::sea_orm_entity::{
    applications, interview_steps, positions,
};
use crate::modules::position::application::domain::entities::InterviewStepSnapshot;

#[derive(Clone)]
pub struct CandidateQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CandidateQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CandidateQuery for CandidateQueryPostgres {
    async fn get_by_id(
        &self,
        candidate_id: i32,
    ) -> Result<Option<CandidateRecord>, CandidateQueryError> {
        let candidate = candidates::Entity::find_by_id(candidate_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(candidate.map(|c| CandidateRecord {
            id: c.id,
            first_name: c.first_name,
            last_name: c.last_name,
            email: c.email,
            phone: c.phone,
            address: c.address,
        }))
    }

    async fn find_with_applications(
        &self,
        candidate_id: i32,
    ) -> Result<Option<CandidateApplications>, CandidateQueryError> {
        let Some(candidate) = candidates::Entity::find_by_id(candidate_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let apps = applications::Entity::find()
            .filter(applications::Column::CandidateId.eq(candidate.id))
            .order_by_asc(applications::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if apps.is_empty() {
            return Ok(Some(CandidateApplications {
                candidate: candidate.to_identity(),
                applications: vec![],
            }));
        }

        let position_ids = distinct(apps.iter().map(|a| a.position_id));
        let positions_by_id: HashMap<i32, positions::Model> = positions::Entity::find()
            .filter(positions::Column::Id.is_in(position_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        // One round trip for both the flows' steps and the current steps.
        let flow_ids = distinct(positions_by_id.values().map(|p| p.interview_flow_id));
        let current_step_ids = distinct(apps.iter().map(|a| a.current_interview_step));
        let steps = interview_steps::Entity::find()
            .filter(
                Condition::any()
                    .add(interview_steps::Column::InterviewFlowId.is_in(flow_ids))
                    .add(interview_steps::Column::Id.is_in(current_step_ids)),
            )
            .order_by_asc(interview_steps::Column::OrderIndex)
            .order_by_asc(interview_steps::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut steps_by_flow: HashMap<i32, Vec<InterviewStepSnapshot>> = HashMap::new();
        let mut steps_by_id: HashMap<i32, InterviewStepSnapshot> = HashMap::new();
        for step in &steps {
            steps_by_flow
                .entry(step.interview_flow_id)
                .or_default()
                .push(step.to_snapshot());
            steps_by_id.insert(step.id, step.to_snapshot());
        }

        let applications = apps
            .into_iter()
            .map(|app| ApplicationSnapshot {
                id: app.id,
                position: positions_by_id.get(&app.position_id).map(|p| PositionFlow {
                    position_id: p.id,
                    steps: steps_by_flow
                        .get(&p.interview_flow_id)
                        .cloned()
                        .unwrap_or_default(),
                }),
                current_step: steps_by_id.get(&app.current_interview_step).cloned(),
            })
            .collect();

        Ok(Some(CandidateApplications {
            candidate: candidate.to_identity(),
            applications,
        }))
    }
}

fn distinct(ids: impl Iterator<Item = i32>) -> Vec<i32> {
    ids.collect::<BTreeSet<_>>().into_iter().collect()
}

fn map_db_err(e: DbErr) -> CandidateQueryError {
    CandidateQueryError::DatabaseError(e.to_string())
}
