use crate::{
    dtos::options::{AvailableOptionsResponse, DegreeOption, InstructorOption, SemesterOption},
    error::ApiResult,
    state::AppState,
};
use axum::{Json, extract::State};
use database::services::options::OptionsService;

/// List all degrees
#[utoipa::path(
    get,
    path = "/degrees",
    responses(
        (status = 200, description = "Degrees ordered by name and level", body = Vec<DegreeOption>)
    ),
    tag = "Options"
)]
pub async fn degrees(State(state): State<AppState>) -> ApiResult<Json<Vec<DegreeOption>>> {
    let degrees = OptionsService::list_degrees(&state.db).await?;
    Ok(Json(degrees.into_iter().map(DegreeOption::from).collect()))
}

/// List all instructors
#[utoipa::path(
    get,
    path = "/instructors",
    responses(
        (status = 200, description = "Instructors ordered by id", body = Vec<InstructorOption>)
    ),
    tag = "Options"
)]
pub async fn instructors(State(state): State<AppState>) -> ApiResult<Json<Vec<InstructorOption>>> {
    let instructors = OptionsService::list_instructors(&state.db).await?;
    Ok(Json(
        instructors
            .into_iter()
            .map(InstructorOption::from)
            .collect(),
    ))
}

/// List all semesters in academic order
#[utoipa::path(
    get,
    path = "/semesters",
    responses(
        (status = 200, description = "Semesters such as \"2024 Fall\"", body = Vec<SemesterOption>)
    ),
    tag = "Options"
)]
pub async fn semesters(State(state): State<AppState>) -> ApiResult<Json<Vec<SemesterOption>>> {
    let semesters = OptionsService::list_semesters(&state.db).await?;
    Ok(Json(
        semesters
            .into_iter()
            .map(|semester_year| SemesterOption { semester_year })
            .collect(),
    ))
}

/// Get degrees, semesters and instructors in one response
#[utoipa::path(
    get,
    path = "/available-options",
    responses(
        (status = 200, description = "All selectable options", body = AvailableOptionsResponse)
    ),
    tag = "Options"
)]
pub async fn available_options(
    State(state): State<AppState>,
) -> ApiResult<Json<AvailableOptionsResponse>> {
    let options = OptionsService::available_options(&state.db).await?;
    Ok(Json(options.into()))
}
