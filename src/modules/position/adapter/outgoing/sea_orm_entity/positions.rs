use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "positions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_name = "interview_flow_id")]
    pub interview_flow_id: i32,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(column_type = "Text", string_len = 30)]
    pub status: String,

    pub is_visible: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::interview_flows::Entity",
        from = "Column::InterviewFlowId",
        to = "super::interview_flows::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    InterviewFlows,

    #[sea_orm(has_many = "super::applications::Entity")]
    Applications,
}

impl Related<super::interview_flows::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InterviewFlows.def()
    }
}

impl Related<super::applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
