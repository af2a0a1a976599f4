use super::require_row;
use crate::{
    entities::{courses, degree_courses, degrees},
    error::StoreError,
};
use log::{debug, info};
use models::records::{DegreeCourseLink, NewDegree};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    FromQueryResult, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
    sea_query::OnConflict,
};
use serde::Serialize;

/// A course as seen from a degree or objective listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromQueryResult)]
pub struct CourseSummary {
    pub course_number: String,
    pub course_name: String,
    pub is_core_course: bool,
}

pub struct DegreeService;

impl DegreeService {
    pub async fn add_degree(db: &DatabaseConnection, degree: NewDegree) -> Result<(), StoreError> {
        degree.validate()?;

        degrees::Entity::insert(degrees::ActiveModel {
            name: Set(degree.name.clone()),
            level: Set(degree.level.clone()),
        })
        .exec_without_returning(db)
        .await
        .map_err(StoreError::on("degrees"))?;

        info!("Added degree {} ({})", degree.name, degree.level);
        Ok(())
    }

    /// Places a course in a degree's curriculum, replacing the core flag if
    /// the pair is already linked
    pub async fn associate_course(
        db: &DatabaseConnection,
        link: DegreeCourseLink,
    ) -> Result<(), StoreError> {
        link.validate()?;

        let txn = db.begin().await?;

        require_row::<degrees::Entity, _, _>(
            &txn,
            (link.degree_name.clone(), link.degree_level.clone()),
            "degree_courses",
            "degree_name, degree_level",
            format!("{} / {}", link.degree_name, link.degree_level),
        )
        .await?;
        require_row::<courses::Entity, _, _>(
            &txn,
            link.course_number.clone(),
            "degree_courses",
            "course_number",
            &link.course_number,
        )
        .await?;

        degree_courses::Entity::insert(degree_courses::ActiveModel {
            degree_name: Set(link.degree_name.clone()),
            degree_level: Set(link.degree_level.clone()),
            course_number: Set(link.course_number.clone()),
            core_course: Set(link.core_course),
        })
        .on_conflict(
            OnConflict::columns([
                degree_courses::Column::DegreeName,
                degree_courses::Column::DegreeLevel,
                degree_courses::Column::CourseNumber,
            ])
            .update_column(degree_courses::Column::CoreCourse)
            .to_owned(),
        )
        .exec_without_returning(&txn)
        .await
        .map_err(StoreError::on("degree_courses"))?;

        txn.commit().await?;

        info!(
            "Linked {} to {} ({}), core: {}",
            link.course_number, link.degree_name, link.degree_level, link.core_course
        );
        Ok(())
    }

    /// All courses in a degree, ordered by course number
    pub async fn courses_by_degree(
        db: &DatabaseConnection,
        name: &str,
        level: &str,
    ) -> Result<Vec<CourseSummary>, StoreError> {
        debug!("Querying courses for degree {name} ({level})");

        let summaries = courses::Entity::find()
            .select_only()
            .column(courses::Column::CourseNumber)
            .column_as(courses::Column::Name, "course_name")
            .column_as(degree_courses::Column::CoreCourse, "is_core_course")
            .inner_join(degree_courses::Entity)
            .filter(degree_courses::Column::DegreeName.eq(name))
            .filter(degree_courses::Column::DegreeLevel.eq(level))
            .order_by_asc(courses::Column::CourseNumber)
            .into_model::<CourseSummary>()
            .all(db)
            .await?;

        if summaries.is_empty() {
            return Err(StoreError::NotFound("courses for this degree"));
        }

        Ok(summaries)
    }

    /// Course numbers in degrees named `name`, optionally narrowed to one level
    pub(crate) async fn course_numbers<C: ConnectionTrait>(
        db: &C,
        name: &str,
        level: Option<&str>,
    ) -> Result<Vec<String>, StoreError> {
        let mut query = degree_courses::Entity::find()
            .select_only()
            .column(degree_courses::Column::CourseNumber)
            .filter(degree_courses::Column::DegreeName.eq(name));

        if let Some(level) = level {
            query = query.filter(degree_courses::Column::DegreeLevel.eq(level));
        }

        Ok(query.distinct().into_tuple::<String>().all(db).await?)
    }

    pub async fn list_degrees<C: ConnectionTrait>(db: &C) -> Result<Vec<degrees::Model>, StoreError> {
        Ok(degrees::Entity::find()
            .order_by_asc(degrees::Column::Name)
            .order_by_asc(degrees::Column::Level)
            .all(db)
            .await?)
    }
}
