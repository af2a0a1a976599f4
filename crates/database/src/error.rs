use models::ValidationError;
use sea_orm::{
    DbErr, RuntimeErr, SqlErr,
    sqlx::{self, error::ErrorKind},
};
use thiserror::Error;

/// Failure of a store operation
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A referenced row does not exist
    #[error("{table}.{column} references missing value '{value}'")]
    InvalidReference {
        table: &'static str,
        column: &'static str,
        value: String,
    },

    /// A uniqueness, key or check constraint rejected the write
    #[error("constraint violated on {table}: {detail}")]
    ConstraintViolation { table: &'static str, detail: String },

    #[error("no {0} found")]
    NotFound(&'static str),

    #[error("database unavailable: {0}")]
    Unavailable(String),

    #[error("database error: {0}")]
    Db(DbErr),
}

impl StoreError {
    pub fn invalid_reference(
        table: &'static str,
        column: &'static str,
        value: impl ToString,
    ) -> Self {
        Self::InvalidReference {
            table,
            column,
            value: value.to_string(),
        }
    }

    /// Returns a mapper that classifies errors raised while writing to `table`
    pub fn on(table: &'static str) -> impl Fn(DbErr) -> StoreError {
        move |err| classify(err, table)
    }
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        classify(err, "unknown")
    }
}

fn classify(err: DbErr, table: &'static str) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail))
        | Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            return StoreError::ConstraintViolation { table, detail };
        }
        _ => {}
    }

    if let Some(detail) = rejected_value(&err) {
        return StoreError::ConstraintViolation { table, detail };
    }

    match err {
        DbErr::Conn(err) => StoreError::Unavailable(err.to_string()),
        DbErr::ConnectionAcquire(err) => StoreError::Unavailable(err.to_string()),
        err => StoreError::Db(err),
    }
}

/// A CHECK constraint, or a value the column cannot hold (SQLSTATE class 22)
fn rejected_value(err: &DbErr) -> Option<String> {
    let (DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(db_err)))
    | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(db_err)))) = err
    else {
        return None;
    };

    let data_exception = db_err
        .code()
        .is_some_and(|code| code.len() == 5 && code.starts_with("22"));
    (matches!(db_err.kind(), ErrorKind::CheckViolation) || data_exception)
        .then(|| db_err.message().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    #[test]
    fn test_validation_error_converts() {
        let err: StoreError = ValidationError::new("course_code", "out of range").into();
        assert!(matches!(err, StoreError::Validation(ref e) if e.field == "course_code"));
        assert_eq!(err.to_string(), "invalid course_code: out of range");
    }

    #[test]
    fn test_connection_errors_are_unavailable() {
        let err = StoreError::from(DbErr::Conn(RuntimeErr::Internal("refused".to_string())));
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[test]
    fn test_other_errors_are_passed_through() {
        let err = StoreError::on("courses")(DbErr::RecordNotFound("CS5330".to_string()));
        assert!(matches!(err, StoreError::Db(DbErr::RecordNotFound(_))));
    }

    #[test]
    fn test_invalid_reference_message() {
        let err = StoreError::invalid_reference("sections", "instructor_id", 42);
        assert_eq!(
            err.to_string(),
            "sections.instructor_id references missing value '42'"
        );
    }
}
