use database::services::section::InstructorTermQuery;
use models::{Semester, Term, TermRange, ValidationError};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct DegreeQuery {
    pub degree_name: String,
    /// e.g. "Bachelor" or "Master"
    pub degree_level: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct TermRangeQuery {
    pub start_year: i32,
    pub start_semester: Semester,
    pub end_year: i32,
    pub end_semester: Semester,
}

impl TermRangeQuery {
    pub fn range(&self) -> Result<TermRange, ValidationError> {
        term_range(
            self.start_year,
            self.start_semester,
            self.end_year,
            self.end_semester,
        )
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SectionsByCourseQuery {
    pub course_number: String,
    pub start_year: i32,
    pub start_semester: Semester,
    pub end_year: i32,
    pub end_semester: Semester,
}

impl SectionsByCourseQuery {
    pub fn range(&self) -> Result<TermRange, ValidationError> {
        term_range(
            self.start_year,
            self.start_semester,
            self.end_year,
            self.end_semester,
        )
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SectionsByInstructorQuery {
    pub instructor_id: i32,
    pub start_year: i32,
    pub start_semester: Semester,
    pub end_year: i32,
    pub end_semester: Semester,
}

impl SectionsByInstructorQuery {
    pub fn range(&self) -> Result<TermRange, ValidationError> {
        term_range(
            self.start_year,
            self.start_semester,
            self.end_year,
            self.end_semester,
        )
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SectionsByDegreeQuery {
    pub degree_name: String,
    pub degree_level: String,
    pub start_year: i32,
    pub start_semester: Semester,
    pub end_year: i32,
    pub end_semester: Semester,
}

impl SectionsByDegreeQuery {
    pub fn range(&self) -> Result<TermRange, ValidationError> {
        term_range(
            self.start_year,
            self.start_semester,
            self.end_year,
            self.end_semester,
        )
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct InstructorSectionsQuery {
    pub instructor_id: i32,
    pub degree_name: String,
    /// Omit to include the degree at every level
    pub degree_level: Option<String>,
    pub year: i32,
    pub semester: Semester,
}

impl From<InstructorSectionsQuery> for InstructorTermQuery {
    fn from(query: InstructorSectionsQuery) -> Self {
        Self {
            instructor_id: query.instructor_id,
            degree_name: query.degree_name,
            degree_level: query.degree_level.filter(|level| !level.trim().is_empty()),
            term: Term::new(query.year, query.semester),
        }
    }
}

fn term_range(
    start_year: i32,
    start_semester: Semester,
    end_year: i32,
    end_semester: Semester,
) -> Result<TermRange, ValidationError> {
    TermRange::new(
        Term::new(start_year, start_semester),
        Term::new(end_year, end_semester),
    )
}

/// Collects `objective_codes` given either as repeated keys or comma-separated
pub fn objective_codes(pairs: &[(String, String)]) -> Result<Vec<i32>, ValidationError> {
    let mut codes = Vec::new();

    for (key, value) in pairs {
        if key != "objective_codes" && key != "objective_codes[]" {
            continue;
        }

        for raw in value.split(',').map(str::trim).filter(|raw| !raw.is_empty()) {
            let code = raw.parse().map_err(|_| {
                ValidationError::new("objective_codes", format!("'{raw}' is not an integer"))
            })?;
            if !codes.contains(&code) {
                codes.push(code);
            }
        }
    }

    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_objective_codes_repeated_and_comma_separated() {
        let codes = objective_codes(&pairs(&[
            ("objective_codes", "1"),
            ("objective_codes", "2,3"),
            ("other", "9"),
            ("objective_codes", "3"),
        ]))
        .unwrap();
        assert_eq!(codes, vec![1, 2, 3]);
    }

    #[test]
    fn test_objective_codes_rejects_non_integers() {
        let err = objective_codes(&pairs(&[("objective_codes", "1,two")])).unwrap_err();
        assert_eq!(err.field, "objective_codes");
    }

    #[test]
    fn test_objective_codes_may_be_empty() {
        assert!(objective_codes(&pairs(&[("objective_codes", "")])).unwrap().is_empty());
    }

    #[test]
    fn test_inverted_range_query() {
        let query = TermRangeQuery {
            start_year: 2024,
            start_semester: Semester::Fall,
            end_year: 2024,
            end_semester: Semester::Spring,
        };
        assert_eq!(query.range().unwrap_err().field, "term_range");
    }

    #[test]
    fn test_blank_degree_level_means_every_level() {
        let query: InstructorTermQuery = InstructorSectionsQuery {
            instructor_id: 1,
            degree_name: "Computer Science".to_string(),
            degree_level: Some(" ".to_string()),
            year: 2024,
            semester: Semester::Fall,
        }
        .into();
        assert_eq!(query.degree_level, None);
    }
}
