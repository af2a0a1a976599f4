use models::{Semester, Term};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One scheduled offering of a course in a specific term
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub section_number: i32,
    pub number_of_students: i32,
    pub instructor_id: i32,
    pub course_number: String,
    pub year: i32,
    pub semester: Semester,
}

impl Model {
    pub fn term(&self) -> Term {
        Term::new(self.year, self.semester)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::instructors::Entity",
        from = "Column::InstructorId",
        to = "super::instructors::Column::InstructorId"
    )]
    Instructor,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseNumber",
        to = "super::courses::Column::CourseNumber"
    )]
    Course,
    #[sea_orm(has_one = "super::course_evaluations::Entity")]
    Evaluation,
}

impl Related<super::instructors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::course_evaluations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
