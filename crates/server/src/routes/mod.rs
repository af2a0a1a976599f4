pub mod associations;
pub mod courses;
pub mod evaluation;
pub mod health;
pub mod options;
pub mod records;
pub mod sections;

use crate::{doc::ApiDoc, state::AppState};
use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the application router with every endpoint and the OpenAPI docs
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        // Record creation
        .route("/add-degree", post(records::add_degree))
        .route("/add-course", post(records::add_course))
        .route("/add-instructor", post(records::add_instructor))
        .route("/add-section", post(records::add_section))
        .route(
            "/add-learning-objective",
            post(records::add_learning_objective),
        )
        // Associations
        .route(
            "/associate-course-objective",
            post(associations::associate_course_objective),
        )
        .route(
            "/associate-course-section",
            post(associations::associate_course_section),
        )
        .route(
            "/associate-course-with-degree",
            post(associations::associate_course_with_degree),
        )
        // Evaluations
        .route("/update-evaluation", post(evaluation::update_evaluation))
        .route(
            "/get-evaluation/{section_id}",
            get(evaluation::get_evaluation),
        )
        // Courses and objectives
        .route("/courses-by-degree", get(courses::courses_by_degree))
        .route("/courses-by-objective", get(courses::courses_by_objective))
        .route("/learning-objectives", get(courses::learning_objectives))
        .route("/objectives-by-degree", get(courses::objectives_by_degree))
        // Sections
        .route("/list-sections", get(sections::list_sections))
        .route("/sections-by-course", get(sections::sections_by_course))
        .route(
            "/sections-by-instructor",
            get(sections::sections_by_instructor),
        )
        .route("/sections-by-degree", get(sections::sections_by_degree))
        .route("/instructor-sections", get(sections::instructor_sections))
        .route(
            "/sections-with-evaluations",
            get(sections::sections_with_evaluations),
        )
        // Options
        .route("/degrees", get(options::degrees))
        .route("/instructors", get(options::instructors))
        .route("/semesters", get(options::semesters))
        .route("/available-options", get(options::available_options))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
