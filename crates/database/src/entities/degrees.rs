use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "degrees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub level: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::degree_courses::Entity")]
    DegreeCourses,
}

impl Related<super::degree_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DegreeCourses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
