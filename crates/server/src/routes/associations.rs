use crate::{dtos::response::StatusResponse, error::ApiResult, state::AppState};
use axum::{Json, extract::State, http::StatusCode};
use database::services::{
    degree::DegreeService, objective::ObjectiveService, section::SectionService,
};
use models::records::{CourseObjectiveLink, CourseSectionLink, DegreeCourseLink};

/// Associate a course with a learning objective
#[utoipa::path(
    post,
    path = "/associate-course-objective",
    request_body = CourseObjectiveLink,
    responses(
        (status = 201, description = "Association created successfully", body = StatusResponse),
        (status = 400, description = "Unknown course or objective", body = crate::error::ApiErrorResponse)
    ),
    tag = "Associations"
)]
pub async fn associate_course_objective(
    State(state): State<AppState>,
    Json(link): Json<CourseObjectiveLink>,
) -> ApiResult<(StatusCode, Json<StatusResponse>)> {
    ObjectiveService::associate_course(&state.db, link).await?;
    Ok((
        StatusCode::CREATED,
        Json(StatusResponse::new("course learning objective added")),
    ))
}

/// Associate a course with a section for a specific semester
#[utoipa::path(
    post,
    path = "/associate-course-section",
    request_body = CourseSectionLink,
    responses(
        (status = 201, description = "Association created successfully", body = StatusResponse),
        (status = 400, description = "Unknown course or section, or malformed term", body = crate::error::ApiErrorResponse)
    ),
    tag = "Associations"
)]
pub async fn associate_course_section(
    State(state): State<AppState>,
    Json(link): Json<CourseSectionLink>,
) -> ApiResult<(StatusCode, Json<StatusResponse>)> {
    SectionService::associate_course_section(&state.db, link).await?;
    Ok((
        StatusCode::CREATED,
        Json(StatusResponse::new("section course added")),
    ))
}

/// Associate a course with a degree, updating the core flag if already linked
#[utoipa::path(
    post,
    path = "/associate-course-with-degree",
    request_body = DegreeCourseLink,
    responses(
        (status = 201, description = "Course associated with degree successfully", body = StatusResponse),
        (status = 400, description = "Unknown degree or course", body = crate::error::ApiErrorResponse)
    ),
    tag = "Associations"
)]
pub async fn associate_course_with_degree(
    State(state): State<AppState>,
    Json(link): Json<DegreeCourseLink>,
) -> ApiResult<(StatusCode, Json<StatusResponse>)> {
    DegreeService::associate_course(&state.db, link).await?;
    Ok((
        StatusCode::CREATED,
        Json(StatusResponse::new(
            "course associated with degree successfully",
        )),
    ))
}
