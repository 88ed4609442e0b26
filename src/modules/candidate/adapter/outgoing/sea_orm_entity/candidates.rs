use sea_orm::entity::prelude::*;

use crate::modules::position::application::domain::entities::CandidateIdentity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "candidates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub first_name: String,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub last_name: String,

    #[sea_orm(column_type = "Text", string_len = 255, unique)]
    pub email: String,

    #[sea_orm(column_type = "Text", string_len = 15, nullable)]
    pub phone: Option<String>,

    #[sea_orm(column_type = "Text", string_len = 100, nullable)]
    pub address: Option<String>,
}

impl Model {
    pub fn to_identity(&self) -> CandidateIdentity {
        CandidateIdentity {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::modules::position::adapter::outgoing::sea_orm_entity::applications::Entity"
    )]
    Applications,
}

impl Related<crate::modules::position::adapter::outgoing::sea_orm_entity::applications::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
