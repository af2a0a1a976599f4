use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Time-scoped assignment of a section to a course
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sections_courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_number: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub section_number: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub semester_year: String, // "2024 Fall"
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
        belongs_to = "super::sections::Entity",
        from = "Column::SectionNumber",
        to = "super::sections::Column::SectionNumber"
    )]
    Section,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
