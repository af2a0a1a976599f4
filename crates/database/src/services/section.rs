use super::{degree::DegreeService, require_row};
use crate::{
    entities::{course_evaluations, courses, instructors, sections, sections_courses, semesters},
    error::StoreError,
};
use log::{debug, info};
use models::{
    Term, TermRange,
    records::{CourseSectionLink, NewSection},
};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    Insert, QueryFilter, TransactionTrait, sea_query::OnConflict,
};
use serde::Serialize;
use std::collections::HashMap;

/// A section together with its course name and evaluation, if one was recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionDetail {
    pub section: sections::Model,
    pub course_name: String,
    pub evaluation: Option<course_evaluations::Model>,
}

impl SectionDetail {
    pub fn has_evaluation(&self) -> bool {
        self.evaluation.is_some()
    }
}

/// Ordering of instructor section listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionOrder {
    CourseNumber,
    SectionNumber,
}

/// Sections taught by one instructor for a degree in one term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructorTermQuery {
    pub instructor_id: i32,
    pub degree_name: String,
    /// When absent, courses of the degree at every level are included
    pub degree_level: Option<String>,
    pub term: Term,
}

pub struct SectionService;

impl SectionService {
    /// Records a section offering, creating its semester row on first use
    pub async fn add_section(db: &DatabaseConnection, section: NewSection) -> Result<(), StoreError> {
        section.validate()?;
        let term = section.term();

        let txn = db.begin().await?;

        require_row::<instructors::Entity, _, _>(
            &txn,
            section.instructor_id,
            "sections",
            "instructor_id",
            section.instructor_id,
        )
        .await?;
        require_row::<courses::Entity, _, _>(
            &txn,
            section.course_number.clone(),
            "sections",
            "course_number",
            &section.course_number,
        )
        .await?;

        semester_row(term)
            .exec_without_returning(&txn)
            .await
            .map_err(StoreError::on("semesters"))?;
        debug!("Ensured semester {term}");

        sections::Entity::insert(sections::ActiveModel {
            section_number: Set(section.section_number),
            number_of_students: Set(section.number_of_students),
            instructor_id: Set(section.instructor_id),
            course_number: Set(section.course_number.clone()),
            year: Set(term.year),
            semester: Set(term.semester),
        })
        .exec_without_returning(&txn)
        .await
        .map_err(StoreError::on("sections"))?;

        txn.commit().await?;

        info!(
            "Added section {} of {} for {term}",
            section.section_number, section.course_number
        );
        Ok(())
    }

    pub async fn associate_course_section(
        db: &DatabaseConnection,
        link: CourseSectionLink,
    ) -> Result<(), StoreError> {
        let term = link.term()?;

        let txn = db.begin().await?;

        require_row::<courses::Entity, _, _>(
            &txn,
            link.course_number.clone(),
            "sections_courses",
            "course_number",
            &link.course_number,
        )
        .await?;
        require_row::<sections::Entity, _, _>(
            &txn,
            link.section_number,
            "sections_courses",
            "section_number",
            link.section_number,
        )
        .await?;

        sections_courses::Entity::insert(sections_courses::ActiveModel {
            course_number: Set(link.course_number.clone()),
            section_number: Set(link.section_number),
            semester_year: Set(term.to_string()),
        })
        .exec_without_returning(&txn)
        .await
        .map_err(StoreError::on("sections_courses"))?;

        txn.commit().await?;

        info!(
            "Linked section {} to {} for {term}",
            link.section_number, link.course_number
        );
        Ok(())
    }

    pub async fn list_sections(
        db: &DatabaseConnection,
        range: &TermRange,
    ) -> Result<Vec<sections::Model>, StoreError> {
        Self::find_in_range(db, Condition::all(), range).await
    }

    pub async fn sections_by_course(
        db: &DatabaseConnection,
        course_number: &str,
        range: &TermRange,
    ) -> Result<Vec<sections::Model>, StoreError> {
        let filter = Condition::all().add(sections::Column::CourseNumber.eq(course_number));
        Self::find_in_range(db, filter, range).await
    }

    pub async fn sections_by_instructor(
        db: &DatabaseConnection,
        instructor_id: i32,
        range: &TermRange,
    ) -> Result<Vec<sections::Model>, StoreError> {
        let filter = Condition::all().add(sections::Column::InstructorId.eq(instructor_id));
        Self::find_in_range(db, filter, range).await
    }

    /// Sections of any course in the degree's curriculum
    pub async fn sections_by_degree(
        db: &DatabaseConnection,
        degree_name: &str,
        degree_level: &str,
        range: &TermRange,
    ) -> Result<Vec<sections::Model>, StoreError> {
        let txn = db.begin().await?;

        let course_numbers =
            DegreeService::course_numbers(&txn, degree_name, Some(degree_level)).await?;
        if course_numbers.is_empty() {
            return Ok(Vec::new());
        }

        let filter = Condition::all().add(sections::Column::CourseNumber.is_in(course_numbers));
        let sections = Self::find_in_range(&txn, filter, range).await?;
        txn.commit().await?;

        Ok(sections)
    }

    /// Sections an instructor teaches in one term for courses of a degree.
    ///
    /// Each section appears once even when its course is in the degree at
    /// several levels.
    pub async fn instructor_degree_semester_sections(
        db: &DatabaseConnection,
        query: &InstructorTermQuery,
        order: SectionOrder,
    ) -> Result<Vec<SectionDetail>, StoreError> {
        debug!(
            "Querying sections of instructor {} for {} in {}",
            query.instructor_id, query.degree_name, query.term
        );

        let txn = db.begin().await?;

        let course_numbers = DegreeService::course_numbers(
            &txn,
            &query.degree_name,
            query.degree_level.as_deref(),
        )
        .await?;
        if course_numbers.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sections::Entity::find()
            .filter(sections::Column::InstructorId.eq(query.instructor_id))
            .filter(sections::Column::Year.eq(query.term.year))
            .filter(sections::Column::Semester.eq(query.term.semester))
            .filter(sections::Column::CourseNumber.is_in(course_numbers))
            .find_also_related(courses::Entity)
            .all(&txn)
            .await?;

        let section_ids: Vec<i32> = rows.iter().map(|(s, _)| s.section_number).collect();
        let mut evaluations: HashMap<i32, course_evaluations::Model> =
            course_evaluations::Entity::find()
                .filter(course_evaluations::Column::SectionId.is_in(section_ids))
                .all(&txn)
                .await?
                .into_iter()
                .map(|e| (e.section_id, e))
                .collect();
        txn.commit().await?;

        let mut details: Vec<SectionDetail> = rows
            .into_iter()
            .map(|(section, course)| SectionDetail {
                course_name: course.map(|c| c.name).unwrap_or_default(),
                evaluation: evaluations.remove(&section.section_number),
                section,
            })
            .collect();

        match order {
            SectionOrder::CourseNumber => details.sort_by(|a, b| {
                a.section
                    .course_number
                    .cmp(&b.section.course_number)
                    .then(a.section.section_number.cmp(&b.section.section_number))
            }),
            SectionOrder::SectionNumber => details.sort_by_key(|d| d.section.section_number),
        }

        Ok(details)
    }

    async fn find_in_range<C: ConnectionTrait>(
        db: &C,
        filter: Condition,
        range: &TermRange,
    ) -> Result<Vec<sections::Model>, StoreError> {
        debug!("Querying sections from {} to {}", range.start(), range.end());

        let mut sections = sections::Entity::find()
            .filter(filter)
            .filter(term_range_condition(range))
            .all(db)
            .await?;

        sections.sort_by_key(|s| (s.term(), s.section_number));
        Ok(sections)
    }
}

/// Inserts the semester row, leaving an existing row untouched so that
/// concurrent first sections of a term both succeed
fn semester_row(term: Term) -> Insert<semesters::ActiveModel> {
    semesters::Entity::insert(semesters::ActiveModel {
        year: Set(term.year),
        semester: Set(term.semester),
    })
    .on_conflict(
        OnConflict::columns([semesters::Column::Year, semesters::Column::Semester])
            .update_column(semesters::Column::Year)
            .to_owned(),
    )
}

/// Matches sections whose term lies in `range`, comparing semesters by rank
fn term_range_condition(range: &TermRange) -> Condition {
    let start = range.start();
    let end = range.end();

    let after_start = Condition::any()
        .add(sections::Column::Year.gt(start.year))
        .add(
            Condition::all()
                .add(sections::Column::Year.eq(start.year))
                .add(sections::Column::Semester.is_in(start.semester.at_or_after())),
        );
    let before_end = Condition::any()
        .add(sections::Column::Year.lt(end.year))
        .add(
            Condition::all()
                .add(sections::Column::Year.eq(end.year))
                .add(sections::Column::Semester.is_in(end.semester.at_or_before())),
        );

    Condition::all().add(after_start).add(before_end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Semester;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn test_term_range_condition_compares_by_rank() {
        let range = TermRange::new(
            Term::new(2024, Semester::Spring),
            Term::new(2025, Semester::Winter),
        )
        .unwrap();

        let sql = sections::Entity::find()
            .filter(term_range_condition(&range))
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""sections"."semester" IN ('Spring', 'Summer', 'Fall')"#));
        assert!(sql.contains(r#""sections"."semester" IN ('Winter')"#));
        assert!(!sql.contains(r#""sections"."semester" >"#));
        assert!(!sql.contains(r#""sections"."semester" <"#));
    }

    #[test]
    fn test_semester_row_tolerates_existing_term() {
        let sql = semester_row(Term::new(2030, Semester::Fall))
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#"ON CONFLICT ("year", "semester") DO UPDATE"#));
    }
}
