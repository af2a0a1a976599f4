//! Caller-supplied records, validated before any store access.

use crate::{
    term::{Semester, Term},
    validation::{
        MAX_COURSE_NUMBER_LEN, MAX_NAME_LEN, ValidationError, require_non_negative, require_text,
    },
};
use serde::{Deserialize, Serialize};
use std::{ops::RangeInclusive, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewDegree {
    pub name: String,
    pub level: String,
}

impl NewDegree {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, MAX_NAME_LEN)?;
        require_text("level", &self.level, MAX_NAME_LEN)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewCourse {
    pub name: String,
    /// Two to four alphanumeric characters, e.g. "CS"
    pub department_code: String,
    /// Four-digit catalogue code, 1000 through 9999
    pub course_code: i32,
}

impl NewCourse {
    pub const COURSE_CODES: RangeInclusive<i32> = 1000..=9999;
    pub const DEPARTMENT_CODE_LENGTHS: RangeInclusive<usize> = 2..=4;

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, MAX_NAME_LEN)?;

        let department = self.department_code.trim();
        if !Self::DEPARTMENT_CODE_LENGTHS.contains(&department.chars().count()) {
            return Err(ValidationError::new(
                "department_code",
                format!("must be 2 to 4 characters long, got '{department}'"),
            ));
        }
        if !department.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::new(
                "department_code",
                format!("must be alphanumeric, got '{department}'"),
            ));
        }

        if !Self::COURSE_CODES.contains(&self.course_code) {
            return Err(ValidationError::new(
                "course_code",
                format!("must be between 1000 and 9999, got {}", self.course_code),
            ));
        }

        Ok(())
    }

    /// The course key, e.g. "CS5330"
    pub fn course_number(&self) -> String {
        format!(
            "{}{}",
            self.department_code.trim().to_ascii_uppercase(),
            self.course_code
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewInstructor {
    pub instructor_id: i32,
    pub name: String,
}

impl NewInstructor {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, MAX_NAME_LEN)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewSection {
    pub section_number: i32,
    pub number_of_students: i32,
    pub instructor_id: i32,
    pub course_number: String,
    pub year: i32,
    pub semester: Semester,
}

impl NewSection {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_negative("number_of_students", self.number_of_students)?;
        require_text("course_number", &self.course_number, MAX_COURSE_NUMBER_LEN)?;
        if self.year <= 0 {
            return Err(ValidationError::new(
                "year",
                format!("must be positive, got {}", self.year),
            ));
        }
        Ok(())
    }

    pub fn term(&self) -> Term {
        Term::new(self.year, self.semester)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewLearningObjective {
    pub code: i32,
    pub title: String,
    pub description: String,
}

impl NewLearningObjective {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title, MAX_NAME_LEN)
    }
}

/// Links a course to a learning objective it satisfies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourseObjectiveLink {
    pub course_number: String,
    pub objective_code: i32,
}

/// Links a section offering to a course within a specific term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourseSectionLink {
    pub course_number: String,
    pub section_number: i32,
    /// Term in the form "2024 Fall"
    pub semester_year: String,
}

impl CourseSectionLink {
    pub fn term(&self) -> Result<Term, ValidationError> {
        Term::from_str(&self.semester_year)
    }
}

/// Places a course in a degree's curriculum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DegreeCourseLink {
    pub degree_name: String,
    pub degree_level: String,
    pub course_number: String,
    pub core_course: bool,
}

impl DegreeCourseLink {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("degree_name", &self.degree_name, MAX_NAME_LEN)?;
        require_text("degree_level", &self.degree_level, MAX_NAME_LEN)?;
        require_text("course_number", &self.course_number, MAX_COURSE_NUMBER_LEN)
    }
}

/// Grade distribution and feedback recorded for one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EvaluationInput {
    #[serde(rename = "section_ID", alias = "section_id")]
    pub section_id: i32,
    pub objective_code: i32,
    pub eval_criteria: String,
    #[serde(rename = "eval_A_count", alias = "eval_a_count")]
    pub eval_a_count: i32,
    #[serde(rename = "eval_B_count", alias = "eval_b_count")]
    pub eval_b_count: i32,
    #[serde(rename = "eval_C_count", alias = "eval_c_count")]
    pub eval_c_count: i32,
    #[serde(rename = "eval_F_count", alias = "eval_f_count")]
    pub eval_f_count: i32,
    pub improvements: String,
}

impl EvaluationInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("eval_criteria", &self.eval_criteria, MAX_NAME_LEN)?;
        require_non_negative("eval_A_count", self.eval_a_count)?;
        require_non_negative("eval_B_count", self.eval_b_count)?;
        require_non_negative("eval_C_count", self.eval_c_count)?;
        require_non_negative("eval_F_count", self.eval_f_count)
    }
}
