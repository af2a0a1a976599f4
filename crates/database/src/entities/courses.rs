use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_number: String, // e.g. CS5330
    #[sea_orm(unique)]
    pub name: String,
    pub department_code: String,
    pub course_code: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sections::Entity")]
    Sections,
    #[sea_orm(has_many = "super::degree_courses::Entity")]
    DegreeCourses,
    #[sea_orm(has_many = "super::course_learning_objectives::Entity")]
    CourseLearningObjectives,
}

impl Related<super::sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sections.def()
    }
}

impl Related<super::degree_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DegreeCourses.def()
    }
}

impl Related<super::course_learning_objectives::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseLearningObjectives.def()
    }
}

// Many-to-many relationship with learning objectives
impl Related<super::learning_objectives::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_learning_objectives::Relation::LearningObjective.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_learning_objectives::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
