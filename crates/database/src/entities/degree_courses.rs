use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Junction table placing a course in a degree's curriculum
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "degree_courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub degree_name: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub degree_level: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_number: String,
    pub core_course: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::degrees::Entity",
        from = "(Column::DegreeName, Column::DegreeLevel)",
        to = "(super::degrees::Column::Name, super::degrees::Column::Level)"
    )]
    Degree,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseNumber",
        to = "super::courses::Column::CourseNumber"
    )]
    Course,
}

impl Related<super::degrees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Degree.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
