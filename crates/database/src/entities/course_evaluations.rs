use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Grade distribution and feedback for a section, at most one per section
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course_evaluations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub section_id: i32,
    pub objective_code: i32,
    pub eval_criteria: String,
    pub eval_a_count: i32,
    pub eval_b_count: i32,
    pub eval_c_count: i32,
    pub eval_f_count: i32,
    #[sea_orm(column_type = "Text")]
    pub improvements: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sections::Entity",
        from = "Column::SectionId",
        to = "super::sections::Column::SectionNumber"
    )]
    Section,
    #[sea_orm(
        belongs_to = "super::learning_objectives::Entity",
        from = "Column::ObjectiveCode",
        to = "super::learning_objectives::Column::Code"
    )]
    LearningObjective,
}

impl Related<super::sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
    }
}

impl Related<super::learning_objectives::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LearningObjective.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
