use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "interviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_name = "application_id")]
    pub application_id: i32,

    #[sea_orm(column_name = "interview_step_id")]
    pub interview_step_id: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub interview_date: DateTimeWithTimeZone,

    #[sea_orm(column_type = "Text", nullable)]
    pub result: Option<String>,

    /// NULL until the interviewer records a score.
    #[sea_orm(nullable)]
    pub score: Option<i32>,

    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::applications::Entity",
        from = "Column::ApplicationId",
        to = "super::applications::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Applications,

    #[sea_orm(
        belongs_to = "super::interview_steps::Entity",
        from = "Column::InterviewStepId",
        to = "super::interview_steps::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    InterviewSteps,
}

impl Related<super::applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
