use super::{degree::DegreeService, require_row};
use crate::{
    entities::{course_learning_objectives, courses, learning_objectives},
    error::StoreError,
};
use log::{debug, info};
use models::records::{CourseObjectiveLink, NewLearningObjective};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};

pub struct ObjectiveService;

impl ObjectiveService {
    pub async fn add_learning_objective(
        db: &DatabaseConnection,
        objective: NewLearningObjective,
    ) -> Result<(), StoreError> {
        objective.validate()?;

        learning_objectives::Entity::insert(learning_objectives::ActiveModel {
            code: Set(objective.code),
            title: Set(objective.title.clone()),
            description: Set(objective.description.clone()),
        })
        .exec_without_returning(db)
        .await
        .map_err(StoreError::on("learning_objectives"))?;

        info!("Added learning objective {}: {}", objective.code, objective.title);
        Ok(())
    }

    pub async fn associate_course(
        db: &DatabaseConnection,
        link: CourseObjectiveLink,
    ) -> Result<(), StoreError> {
        let txn = db.begin().await?;

        require_row::<courses::Entity, _, _>(
            &txn,
            link.course_number.clone(),
            "course_learning_objectives",
            "course_number",
            &link.course_number,
        )
        .await?;
        require_row::<learning_objectives::Entity, _, _>(
            &txn,
            link.objective_code,
            "course_learning_objectives",
            "objective_code",
            link.objective_code,
        )
        .await?;

        course_learning_objectives::Entity::insert(course_learning_objectives::ActiveModel {
            course_number: Set(link.course_number.clone()),
            objective_code: Set(link.objective_code),
        })
        .exec_without_returning(&txn)
        .await
        .map_err(StoreError::on("course_learning_objectives"))?;

        txn.commit().await?;

        info!(
            "Linked course {} to objective {}",
            link.course_number, link.objective_code
        );
        Ok(())
    }

    pub async fn list_learning_objectives(
        db: &DatabaseConnection,
    ) -> Result<Vec<learning_objectives::Model>, StoreError> {
        Ok(learning_objectives::Entity::find()
            .order_by_asc(learning_objectives::Column::Code)
            .all(db)
            .await?)
    }

    /// Distinct objectives met by any course in the degree, ordered by code
    pub async fn objectives_by_degree(
        db: &DatabaseConnection,
        name: &str,
        level: &str,
    ) -> Result<Vec<learning_objectives::Model>, StoreError> {
        debug!("Querying learning objectives for degree {name} ({level})");

        let txn = db.begin().await?;

        let course_numbers = DegreeService::course_numbers(&txn, name, Some(level)).await?;
        if course_numbers.is_empty() {
            return Ok(Vec::new());
        }

        let objective_codes: Vec<i32> = course_learning_objectives::Entity::find()
            .select_only()
            .column(course_learning_objectives::Column::ObjectiveCode)
            .filter(course_learning_objectives::Column::CourseNumber.is_in(course_numbers))
            .distinct()
            .into_tuple()
            .all(&txn)
            .await?;

        let objectives = learning_objectives::Entity::find()
            .filter(learning_objectives::Column::Code.is_in(objective_codes))
            .order_by_asc(learning_objectives::Column::Code)
            .all(&txn)
            .await?;
        txn.commit().await?;

        Ok(objectives)
    }
}
