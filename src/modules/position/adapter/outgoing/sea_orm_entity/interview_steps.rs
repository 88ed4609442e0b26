use sea_orm::entity::prelude::*;

use crate::modules::position::application::domain::entities::InterviewStepSnapshot;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "interview_steps")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_name = "interview_flow_id")]
    pub interview_flow_id: i32,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub name: String,

    // unique per flow, enforced by idx_interview_steps_flow_order_unique
    pub order_index: i32,
}

impl Model {
    pub fn to_snapshot(&self) -> InterviewStepSnapshot {
        InterviewStepSnapshot {
            id: self.id,
            name: self.name.clone(),
            order_index: self.order_index,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::interview_flows::Entity",
        from = "Column::InterviewFlowId",
        to = "super::interview_flows::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    InterviewFlows,
}

impl Related<super::interview_flows::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InterviewFlows.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
