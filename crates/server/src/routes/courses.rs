use crate::{
    dtos::{
        query::{DegreeQuery, objective_codes},
        response::{CourseResponse, LearningObjectiveResponse},
    },
    error::ApiResult,
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
};
use database::services::{
    course::CourseService, degree::DegreeService, objective::ObjectiveService,
};

/// Get the courses of a degree
#[utoipa::path(
    get,
    path = "/courses-by-degree",
    params(DegreeQuery),
    responses(
        (status = 200, description = "List of courses for the degree", body = Vec<CourseResponse>),
        (status = 404, description = "No courses found for the degree", body = crate::error::ApiErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn courses_by_degree(
    State(state): State<AppState>,
    Query(query): Query<DegreeQuery>,
) -> ApiResult<Json<Vec<CourseResponse>>> {
    let courses =
        DegreeService::courses_by_degree(&state.db, &query.degree_name, &query.degree_level)
            .await?;
    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// Get the courses that satisfy any of the given learning objectives
#[utoipa::path(
    get,
    path = "/courses-by-objective",
    params(
        ("objective_codes" = Vec<i32>, Query, description = "Objective codes, repeated or comma-separated")
    ),
    responses(
        (status = 200, description = "List of matching courses", body = Vec<CourseResponse>),
        (status = 400, description = "Missing or malformed objective codes", body = crate::error::ApiErrorResponse),
        (status = 404, description = "No courses found for the objectives", body = crate::error::ApiErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn courses_by_objective(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<CourseResponse>>> {
    let codes = objective_codes(&pairs)?;
    let courses = CourseService::courses_by_objectives(&state.db, &codes).await?;
    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// List all learning objectives
#[utoipa::path(
    get,
    path = "/learning-objectives",
    responses(
        (status = 200, description = "All learning objectives", body = Vec<LearningObjectiveResponse>)
    ),
    tag = "Courses"
)]
pub async fn learning_objectives(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<LearningObjectiveResponse>>> {
    let objectives = ObjectiveService::list_learning_objectives(&state.db).await?;
    Ok(Json(
        objectives
            .into_iter()
            .map(LearningObjectiveResponse::from)
            .collect(),
    ))
}

/// Get the learning objectives met by the courses of a degree
#[utoipa::path(
    get,
    path = "/objectives-by-degree",
    params(DegreeQuery),
    responses(
        (status = 200, description = "Objectives covered by the degree", body = Vec<LearningObjectiveResponse>)
    ),
    tag = "Courses"
)]
pub async fn objectives_by_degree(
    State(state): State<AppState>,
    Query(query): Query<DegreeQuery>,
) -> ApiResult<Json<Vec<LearningObjectiveResponse>>> {
    let objectives =
        ObjectiveService::objectives_by_degree(&state.db, &query.degree_name, &query.degree_level)
            .await?;
    Ok(Json(
        objectives
            .into_iter()
            .map(LearningObjectiveResponse::from)
            .collect(),
    ))
}
