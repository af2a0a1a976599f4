pub mod course;
pub mod degree;
pub mod evaluation;
pub mod instructor;
pub mod objective;
pub mod options;
pub mod section;

use crate::error::StoreError;
use sea_orm::{ConnectionTrait, EntityTrait, PrimaryKeyTrait};

/// Loads the row a write refers to, failing with `InvalidReference` when it is missing
pub(crate) async fn require_row<E, C, K>(
    conn: &C,
    key: K,
    table: &'static str,
    column: &'static str,
    shown: impl ToString,
) -> Result<E::Model, StoreError>
where
    E: EntityTrait,
    C: ConnectionTrait,
    K: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    match E::find_by_id(key).one(conn).await? {
        Some(model) => Ok(model),
        None => {
            let shown = shown.to_string();
            log::warn!("Rejected write to {table}: {column} '{shown}' does not exist");
            Err(StoreError::invalid_reference(table, column, shown))
        }
    }
}
