use database::{
    entities::{degrees, instructors},
    services::options::AvailableOptions,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct DegreeOption {
    pub name: String,
    pub level: String,
}

impl From<degrees::Model> for DegreeOption {
    fn from(degree: degrees::Model) -> Self {
        Self {
            name: degree.name,
            level: degree.level,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InstructorOption {
    pub id: i32,
    pub name: String,
}

impl From<instructors::Model> for InstructorOption {
    fn from(instructor: instructors::Model) -> Self {
        Self {
            id: instructor.instructor_id,
            name: instructor.name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SemesterOption {
    /// e.g. "2024 Fall"
    pub semester_year: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AvailableOptionsResponse {
    pub degrees: Vec<DegreeOption>,
    pub semesters: Vec<String>,
    pub instructors: Vec<InstructorOption>,
}

impl From<AvailableOptions> for AvailableOptionsResponse {
    fn from(options: AvailableOptions) -> Self {
        Self {
            degrees: options.degrees.into_iter().map(DegreeOption::from).collect(),
            semesters: options.semesters,
            instructors: options
                .instructors
                .into_iter()
                .map(InstructorOption::from)
                .collect(),
        }
    }
}
