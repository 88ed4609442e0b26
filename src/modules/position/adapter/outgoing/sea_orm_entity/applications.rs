use sea_orm::entity::prelude::*;

use crate::modules::candidate::adapter::outgoing::sea_orm_entity::candidates;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_name = "position_id")]
    pub position_id: i32,

    #[sea_orm(column_name = "candidate_id")]
    pub candidate_id: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub application_date: DateTimeWithTimeZone,

    /// FK to interview_steps; must belong to the position's flow.
    #[sea_orm(column_name = "current_interview_step")]
    pub current_interview_step: i32,

    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::positions::Entity",
        from = "Column::PositionId",
        to = "super::positions::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Positions,

    #[sea_orm(
        belongs_to = "crate::modules::candidate::adapter::outgoing::sea_orm_entity::candidates::Entity",
        from = "Column::CandidateId",
        to = "crate::modules::candidate::adapter::outgoing::sea_orm_entity::candidates::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Candidates,

    #[sea_orm(
        belongs_to = "super::interview_steps::Entity",
        from = "Column::CurrentInterviewStep",
        to = "super::interview_steps::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    InterviewSteps,

    #[sea_orm(has_many = "super::interviews::Entity")]
    Interviews,
}

impl Related<super::positions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Positions.def()
    }
}

impl Related<candidates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Candidates.def()
    }
}

impl Related<super::interview_steps::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InterviewSteps.def()
    }
}

impl Related<super::interviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Interviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
