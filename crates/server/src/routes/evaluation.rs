use crate::{
    dtos::{evaluation::EvaluationResponse, response::StatusResponse},
    error::{ApiError, ApiResult},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::{error::StoreError, services::evaluation::EvaluationService};
use models::records::EvaluationInput;

/// Record the evaluation of a section, replacing any earlier one
#[utoipa::path(
    post,
    path = "/update-evaluation",
    request_body = EvaluationInput,
    responses(
        (status = 201, description = "Evaluation updated successfully", body = StatusResponse),
        (status = 400, description = "Unknown section or objective, or negative counts", body = crate::error::ApiErrorResponse)
    ),
    tag = "Evaluations"
)]
pub async fn update_evaluation(
    State(state): State<AppState>,
    Json(evaluation): Json<EvaluationInput>,
) -> ApiResult<(StatusCode, Json<StatusResponse>)> {
    EvaluationService::upsert_evaluation(&state.db, evaluation).await?;
    Ok((
        StatusCode::CREATED,
        Json(StatusResponse::new("Evaluation updated successfully")),
    ))
}

/// Get the evaluation recorded for a section
#[utoipa::path(
    get,
    path = "/get-evaluation/{section_id}",
    params(
        ("section_id" = i32, Path, description = "Section number")
    ),
    responses(
        (status = 200, description = "Evaluation found", body = EvaluationResponse),
        (status = 404, description = "Section has no evaluation", body = crate::error::ApiErrorResponse)
    ),
    tag = "Evaluations"
)]
pub async fn get_evaluation(
    State(state): State<AppState>,
    Path(section_id): Path<i32>,
) -> ApiResult<Json<EvaluationResponse>> {
    match EvaluationService::get_evaluation(&state.db, section_id).await? {
        Some(evaluation) => Ok(Json(evaluation.into())),
        None => Err(ApiError::from(StoreError::NotFound("evaluation for this section"))),
    }
}
