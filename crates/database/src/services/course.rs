use super::degree::CourseSummary;
use crate::{
    entities::{course_learning_objectives, courses, degree_courses},
    error::StoreError,
};
use log::{debug, info};
use models::{ValidationError, records::NewCourse};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};
use std::collections::HashSet;

pub struct CourseService;

impl CourseService {
    /// Registers a course and returns its derived course number
    pub async fn add_course(db: &DatabaseConnection, course: NewCourse) -> Result<String, StoreError> {
        course.validate()?;
        let course_number = course.course_number();

        courses::Entity::insert(courses::ActiveModel {
            course_number: Set(course_number.clone()),
            name: Set(course.name.clone()),
            department_code: Set(course.department_code.trim().to_ascii_uppercase()),
            course_code: Set(course.course_code),
        })
        .exec_without_returning(db)
        .await
        .map_err(StoreError::on("courses"))?;

        info!("Added course {course_number}: {}", course.name);
        Ok(course_number)
    }

    pub async fn get_course(
        db: &DatabaseConnection,
        course_number: &str,
    ) -> Result<Option<courses::Model>, StoreError> {
        Ok(courses::Entity::find_by_id(course_number.to_owned())
            .one(db)
            .await?)
    }

    /// Courses associated with any of the given learning objectives.
    ///
    /// Each course appears once. `is_core_course` is set when the course is
    /// core in at least one degree.
    pub async fn courses_by_objectives(
        db: &DatabaseConnection,
        objective_codes: &[i32],
    ) -> Result<Vec<CourseSummary>, StoreError> {
        if objective_codes.is_empty() {
            return Err(ValidationError::new(
                "objective_codes",
                "at least one objective code is required",
            )
            .into());
        }

        debug!("Querying courses for objectives {objective_codes:?}");

        let txn = db.begin().await?;

        let course_numbers: Vec<String> = course_learning_objectives::Entity::find()
            .select_only()
            .column(course_learning_objectives::Column::CourseNumber)
            .filter(
                course_learning_objectives::Column::ObjectiveCode
                    .is_in(objective_codes.iter().copied()),
            )
            .distinct()
            .into_tuple()
            .all(&txn)
            .await?;

        if course_numbers.is_empty() {
            return Err(StoreError::NotFound("courses for these objectives"));
        }

        let core_courses: HashSet<String> = degree_courses::Entity::find()
            .select_only()
            .column(degree_courses::Column::CourseNumber)
            .filter(degree_courses::Column::CourseNumber.is_in(course_numbers.clone()))
            .filter(degree_courses::Column::CoreCourse.eq(true))
            .distinct()
            .into_tuple::<String>()
            .all(&txn)
            .await?
            .into_iter()
            .collect();

        let courses = courses::Entity::find()
            .filter(courses::Column::CourseNumber.is_in(course_numbers))
            .order_by_asc(courses::Column::CourseNumber)
            .all(&txn)
            .await?;
        txn.commit().await?;

        Ok(courses
            .into_iter()
            .map(|course| CourseSummary {
                is_core_course: core_courses.contains(&course.course_number),
                course_number: course.course_number,
                course_name: course.name,
            })
            .collect())
    }
}
