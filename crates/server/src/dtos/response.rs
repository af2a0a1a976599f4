use database::{
    entities::{learning_objectives, sections},
    services::{degree::CourseSummary, section::SectionDetail},
};
use models::Semester;
use serde::Serialize;
use utoipa::ToSchema;

use super::evaluation::EvaluationResponse;

/// Acknowledgement of a successful write
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub course_number: String,
    pub course_name: String,
    pub is_core_course: bool,
}

impl From<CourseSummary> for CourseResponse {
    fn from(summary: CourseSummary) -> Self {
        Self {
            course_number: summary.course_number,
            course_name: summary.course_name,
            is_core_course: summary.is_core_course,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SectionResponse {
    pub section_number: i32,
    pub number_of_students: i32,
    pub instructor_id: i32,
    pub course_number: String,
    pub year: i32,
    pub semester: Semester,
}

impl From<sections::Model> for SectionResponse {
    fn from(section: sections::Model) -> Self {
        Self {
            section_number: section.section_number,
            number_of_students: section.number_of_students,
            instructor_id: section.instructor_id,
            course_number: section.course_number,
            year: section.year,
            semester: section.semester,
        }
    }
}

/// A section with a flag telling whether it has been evaluated
#[derive(Debug, Serialize, ToSchema)]
pub struct SectionDetailsResponse {
    pub section_number: i32,
    pub course_number: String,
    pub course_name: String,
    pub number_of_students: i32,
    pub year: i32,
    pub semester: Semester,
    pub has_evaluation: bool,
}

impl From<SectionDetail> for SectionDetailsResponse {
    fn from(detail: SectionDetail) -> Self {
        let has_evaluation = detail.has_evaluation();
        Self {
            section_number: detail.section.section_number,
            course_number: detail.section.course_number,
            course_name: detail.course_name,
            number_of_students: detail.section.number_of_students,
            year: detail.section.year,
            semester: detail.section.semester,
            has_evaluation,
        }
    }
}

/// A section with its evaluation embedded
#[derive(Debug, Serialize, ToSchema)]
pub struct SectionEvaluationResponse {
    pub section_number: i32,
    pub course_number: String,
    pub course_name: String,
    pub number_of_students: i32,
    pub year: i32,
    pub semester: Semester,
    pub instructor_id: i32,
    pub evaluation: Option<EvaluationResponse>,
}

impl From<SectionDetail> for SectionEvaluationResponse {
    fn from(detail: SectionDetail) -> Self {
        Self {
            section_number: detail.section.section_number,
            course_number: detail.section.course_number,
            course_name: detail.course_name,
            number_of_students: detail.section.number_of_students,
            year: detail.section.year,
            semester: detail.section.semester,
            instructor_id: detail.section.instructor_id,
            evaluation: detail.evaluation.map(EvaluationResponse::from),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LearningObjectiveResponse {
    pub code: i32,
    pub title: String,
    pub description: String,
}

impl From<learning_objectives::Model> for LearningObjectiveResponse {
    fn from(objective: learning_objectives::Model) -> Self {
        Self {
            code: objective.code,
            title: objective.title,
            description: objective.description,
        }
    }
}
