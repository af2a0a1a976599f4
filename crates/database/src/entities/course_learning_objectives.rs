use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Junction table for many-to-many relationship between courses and learning objectives
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course_learning_objectives")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_number: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub objective_code: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseNumber",
        to = "super::courses::Column::CourseNumber"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::learning_objectives::Entity",
        from = "Column::ObjectiveCode",
        to = "super::learning_objectives::Column::Code"
    )]
    LearningObjective,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::learning_objectives::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LearningObjective.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
