use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "learning_objectives")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_learning_objectives::Entity")]
    CourseLearningObjectives,
}

impl Related<super::course_learning_objectives::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseLearningObjectives.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
