use crate::{
    dtos::{
        query::{
            InstructorSectionsQuery, SectionsByCourseQuery, SectionsByDegreeQuery,
            SectionsByInstructorQuery, TermRangeQuery,
        },
        response::{SectionDetailsResponse, SectionEvaluationResponse, SectionResponse},
    },
    error::ApiResult,
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
};
use database::{
    entities::sections,
    services::section::{SectionOrder, SectionService},
};

fn to_responses(sections: Vec<sections::Model>) -> Json<Vec<SectionResponse>> {
    Json(sections.into_iter().map(SectionResponse::from).collect())
}

/// List every section within a term range
#[utoipa::path(
    get,
    path = "/list-sections",
    params(TermRangeQuery),
    responses(
        (status = 200, description = "Sections in academic order", body = Vec<SectionResponse>),
        (status = 400, description = "Start term follows end term", body = crate::error::ApiErrorResponse)
    ),
    tag = "Sections"
)]
pub async fn list_sections(
    State(state): State<AppState>,
    Query(query): Query<TermRangeQuery>,
) -> ApiResult<Json<Vec<SectionResponse>>> {
    let range = query.range()?;
    let sections = SectionService::list_sections(&state.db, &range).await?;
    Ok(to_responses(sections))
}

/// List the sections of a course within a term range
#[utoipa::path(
    get,
    path = "/sections-by-course",
    params(SectionsByCourseQuery),
    responses(
        (status = 200, description = "Sections in academic order", body = Vec<SectionResponse>),
        (status = 400, description = "Start term follows end term", body = crate::error::ApiErrorResponse)
    ),
    tag = "Sections"
)]
pub async fn sections_by_course(
    State(state): State<AppState>,
    Query(query): Query<SectionsByCourseQuery>,
) -> ApiResult<Json<Vec<SectionResponse>>> {
    let range = query.range()?;
    let sections =
        SectionService::sections_by_course(&state.db, &query.course_number, &range).await?;
    Ok(to_responses(sections))
}

/// List the sections taught by an instructor within a term range
#[utoipa::path(
    get,
    path = "/sections-by-instructor",
    params(SectionsByInstructorQuery),
    responses(
        (status = 200, description = "Sections in academic order", body = Vec<SectionResponse>),
        (status = 400, description = "Start term follows end term", body = crate::error::ApiErrorResponse)
    ),
    tag = "Sections"
)]
pub async fn sections_by_instructor(
    State(state): State<AppState>,
    Query(query): Query<SectionsByInstructorQuery>,
) -> ApiResult<Json<Vec<SectionResponse>>> {
    let range = query.range()?;
    let sections =
        SectionService::sections_by_instructor(&state.db, query.instructor_id, &range).await?;
    Ok(to_responses(sections))
}

/// List the sections of a degree's courses within a term range
#[utoipa::path(
    get,
    path = "/sections-by-degree",
    params(SectionsByDegreeQuery),
    responses(
        (status = 200, description = "Sections in academic order", body = Vec<SectionResponse>),
        (status = 400, description = "Start term follows end term", body = crate::error::ApiErrorResponse)
    ),
    tag = "Sections"
)]
pub async fn sections_by_degree(
    State(state): State<AppState>,
    Query(query): Query<SectionsByDegreeQuery>,
) -> ApiResult<Json<Vec<SectionResponse>>> {
    let range = query.range()?;
    let sections = SectionService::sections_by_degree(
        &state.db,
        &query.degree_name,
        &query.degree_level,
        &range,
    )
    .await?;
    Ok(to_responses(sections))
}

/// List an instructor's sections for a degree in one term, flagging evaluated ones
#[utoipa::path(
    get,
    path = "/instructor-sections",
    params(InstructorSectionsQuery),
    responses(
        (status = 200, description = "Sections ordered by course number", body = Vec<SectionDetailsResponse>)
    ),
    tag = "Sections"
)]
pub async fn instructor_sections(
    State(state): State<AppState>,
    Query(query): Query<InstructorSectionsQuery>,
) -> ApiResult<Json<Vec<SectionDetailsResponse>>> {
    let details = SectionService::instructor_degree_semester_sections(
        &state.db,
        &query.into(),
        SectionOrder::CourseNumber,
    )
    .await?;
    Ok(Json(
        details
            .into_iter()
            .map(SectionDetailsResponse::from)
            .collect(),
    ))
}

/// List an instructor's sections for a degree in one term with their evaluations
#[utoipa::path(
    get,
    path = "/sections-with-evaluations",
    params(InstructorSectionsQuery),
    responses(
        (status = 200, description = "Sections ordered by section number", body = Vec<SectionEvaluationResponse>)
    ),
    tag = "Sections"
)]
pub async fn sections_with_evaluations(
    State(state): State<AppState>,
    Query(query): Query<InstructorSectionsQuery>,
) -> ApiResult<Json<Vec<SectionEvaluationResponse>>> {
    let details = SectionService::instructor_degree_semester_sections(
        &state.db,
        &query.into(),
        SectionOrder::SectionNumber,
    )
    .await?;
    Ok(Json(
        details
            .into_iter()
            .map(SectionEvaluationResponse::from)
            .collect(),
    ))
}
