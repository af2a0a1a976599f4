use crate::{entities::instructors, error::StoreError};
use log::info;
use models::records::NewInstructor;
use sea_orm::{ActiveValue::Set, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder};

pub struct InstructorService;

impl InstructorService {
    pub async fn add_instructor(
        db: &DatabaseConnection,
        instructor: NewInstructor,
    ) -> Result<(), StoreError> {
        instructor.validate()?;

        instructors::Entity::insert(instructors::ActiveModel {
            instructor_id: Set(instructor.instructor_id),
            name: Set(instructor.name.clone()),
        })
        .exec_without_returning(db)
        .await
        .map_err(StoreError::on("instructors"))?;

        info!(
            "Added instructor {}: {}",
            instructor.instructor_id, instructor.name
        );
        Ok(())
    }

    pub async fn list_instructors<C: ConnectionTrait>(
        db: &C,
    ) -> Result<Vec<instructors::Model>, StoreError> {
        Ok(instructors::Entity::find()
            .order_by_asc(instructors::Column::InstructorId)
            .all(db)
            .await?)
    }
}
