use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::error::StoreError;
use log::{error, warn};
use models::ValidationError;
use serde::Serialize;
use utoipa::ToSchema;

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug)]
pub struct ApiError {
    message: String,
    code: &'static str,
    status: StatusCode,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError {
            message: err.to_string(),
            code: "VALIDATION_ERROR",
            status: StatusCode::BAD_REQUEST,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let (code, status) = match &err {
            StoreError::Validation(_) => ("VALIDATION_ERROR", StatusCode::BAD_REQUEST),
            StoreError::InvalidReference { .. } => ("INVALID_REFERENCE", StatusCode::BAD_REQUEST),
            StoreError::ConstraintViolation { .. } => {
                ("CONSTRAINT_VIOLATION", StatusCode::BAD_REQUEST)
            }
            StoreError::NotFound(_) => ("NOT_FOUND", StatusCode::NOT_FOUND),
            StoreError::Unavailable(_) => ("STORE_UNAVAILABLE", StatusCode::SERVICE_UNAVAILABLE),
            StoreError::Db(_) => ("INTERNAL_ERROR", StatusCode::INTERNAL_SERVER_ERROR),
        };

        ApiError {
            message: err.to_string(),
            code,
            status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!("{} ({}): {}", self.status, self.code, self.message);
        } else {
            warn!("{} ({}): {}", self.status, self.code, self.message);
        }

        let body = Json(ApiErrorResponse {
            error: self.message,
            code: self.code.to_string(),
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    #[test]
    fn test_store_errors_map_to_statuses() {
        let cases = [
            (
                StoreError::from(ValidationError::new("course_code", "too small")),
                StatusCode::BAD_REQUEST,
            ),
            (
                StoreError::invalid_reference("sections", "instructor_id", 9),
                StatusCode::BAD_REQUEST,
            ),
            (
                StoreError::ConstraintViolation {
                    table: "courses",
                    detail: "UNIQUE constraint failed: courses.name".to_string(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (StoreError::NotFound("courses"), StatusCode::NOT_FOUND),
            (
                StoreError::Unavailable("pool timed out".to_string()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                StoreError::Db(DbErr::Custom("boom".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }

    #[test]
    fn test_invalid_reference_code() {
        let err = ApiError::from(StoreError::invalid_reference("sections", "course_number", "CS0"));
        assert_eq!(err.code(), "INVALID_REFERENCE");
    }
}
