use super::{degree::DegreeService, instructor::InstructorService};
use crate::{
    entities::{degrees, instructors, semesters},
    error::StoreError,
};
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, TransactionTrait};
use serde::Serialize;

/// Everything a client needs to populate its selection lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableOptions {
    pub degrees: Vec<degrees::Model>,
    pub semesters: Vec<String>,
    pub instructors: Vec<instructors::Model>,
}

pub struct OptionsService;

impl OptionsService {
    pub async fn list_degrees(db: &DatabaseConnection) -> Result<Vec<degrees::Model>, StoreError> {
        DegreeService::list_degrees(db).await
    }

    pub async fn list_instructors(
        db: &DatabaseConnection,
    ) -> Result<Vec<instructors::Model>, StoreError> {
        InstructorService::list_instructors(db).await
    }

    pub async fn list_semesters(db: &DatabaseConnection) -> Result<Vec<String>, StoreError> {
        Self::semesters_in_order(db).await
    }

    /// Degrees, semesters and instructors read from one consistent snapshot
    pub async fn available_options(db: &DatabaseConnection) -> Result<AvailableOptions, StoreError> {
        let txn = db.begin().await?;

        let degrees = DegreeService::list_degrees(&txn).await?;
        let semesters = Self::semesters_in_order(&txn).await?;
        let instructors = InstructorService::list_instructors(&txn).await?;

        txn.commit().await?;

        Ok(AvailableOptions {
            degrees,
            semesters,
            instructors,
        })
    }

    /// Semesters formatted as "2024 Fall", in academic order
    async fn semesters_in_order<C: ConnectionTrait>(db: &C) -> Result<Vec<String>, StoreError> {
        let mut terms: Vec<_> = semesters::Entity::find()
            .all(db)
            .await?
            .iter()
            .map(semesters::Model::term)
            .collect();
        terms.sort();

        Ok(terms.into_iter().map(|term| term.to_string()).collect())
    }
}
