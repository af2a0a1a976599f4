use crate::{dtos::response::StatusResponse, error::ApiResult, state::AppState};
use axum::{Json, extract::State, http::StatusCode};
use database::services::{
    course::CourseService, degree::DegreeService, instructor::InstructorService,
    objective::ObjectiveService, section::SectionService,
};
use models::records::{NewCourse, NewDegree, NewInstructor, NewLearningObjective, NewSection};

/// Add a new degree
#[utoipa::path(
    post,
    path = "/add-degree",
    request_body = NewDegree,
    responses(
        (status = 201, description = "Degree added successfully", body = StatusResponse),
        (status = 400, description = "Invalid or duplicate degree", body = crate::error::ApiErrorResponse)
    ),
    tag = "Records"
)]
pub async fn add_degree(
    State(state): State<AppState>,
    Json(degree): Json<NewDegree>,
) -> ApiResult<(StatusCode, Json<StatusResponse>)> {
    DegreeService::add_degree(&state.db, degree).await?;
    Ok((StatusCode::CREATED, Json(StatusResponse::new("degree added"))))
}

/// Add a new course; its course number is derived from the department and code
#[utoipa::path(
    post,
    path = "/add-course",
    request_body = NewCourse,
    responses(
        (status = 201, description = "Course added successfully", body = StatusResponse),
        (status = 400, description = "Invalid or duplicate course", body = crate::error::ApiErrorResponse)
    ),
    tag = "Records"
)]
pub async fn add_course(
    State(state): State<AppState>,
    Json(course): Json<NewCourse>,
) -> ApiResult<(StatusCode, Json<StatusResponse>)> {
    let course_number = CourseService::add_course(&state.db, course).await?;
    Ok((
        StatusCode::CREATED,
        Json(StatusResponse::new(format!("course {course_number} added"))),
    ))
}

/// Add a new instructor
#[utoipa::path(
    post,
    path = "/add-instructor",
    request_body = NewInstructor,
    responses(
        (status = 201, description = "Instructor added successfully", body = StatusResponse),
        (status = 400, description = "Invalid or duplicate instructor", body = crate::error::ApiErrorResponse)
    ),
    tag = "Records"
)]
pub async fn add_instructor(
    State(state): State<AppState>,
    Json(instructor): Json<NewInstructor>,
) -> ApiResult<(StatusCode, Json<StatusResponse>)> {
    InstructorService::add_instructor(&state.db, instructor).await?;
    Ok((StatusCode::CREATED, Json(StatusResponse::new("instructor added"))))
}

/// Add a new section
#[utoipa::path(
    post,
    path = "/add-section",
    request_body = NewSection,
    responses(
        (status = 201, description = "Section added successfully", body = StatusResponse),
        (status = 400, description = "Unknown instructor or course, or duplicate section", body = crate::error::ApiErrorResponse)
    ),
    tag = "Records"
)]
pub async fn add_section(
    State(state): State<AppState>,
    Json(section): Json<NewSection>,
) -> ApiResult<(StatusCode, Json<StatusResponse>)> {
    SectionService::add_section(&state.db, section).await?;
    Ok((StatusCode::CREATED, Json(StatusResponse::new("section added"))))
}

/// Add a new learning objective
#[utoipa::path(
    post,
    path = "/add-learning-objective",
    request_body = NewLearningObjective,
    responses(
        (status = 201, description = "Learning objective added successfully", body = StatusResponse),
        (status = 400, description = "Invalid or duplicate objective", body = crate::error::ApiErrorResponse)
    ),
    tag = "Records"
)]
pub async fn add_learning_objective(
    State(state): State<AppState>,
    Json(objective): Json<NewLearningObjective>,
) -> ApiResult<(StatusCode, Json<StatusResponse>)> {
    ObjectiveService::add_learning_objective(&state.db, objective).await?;
    Ok((
        StatusCode::CREATED,
        Json(StatusResponse::new("learning objective added")),
    ))
}
