use crate::routes::{associations, courses, evaluation, health, options, records, sections};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        records::add_degree,
        records::add_course,
        records::add_instructor,
        records::add_section,
        records::add_learning_objective,
        associations::associate_course_objective,
        associations::associate_course_section,
        associations::associate_course_with_degree,
        evaluation::update_evaluation,
        evaluation::get_evaluation,
        courses::courses_by_degree,
        courses::courses_by_objective,
        courses::learning_objectives,
        courses::objectives_by_degree,
        sections::list_sections,
        sections::sections_by_course,
        sections::sections_by_instructor,
        sections::sections_by_degree,
        sections::instructor_sections,
        sections::sections_with_evaluations,
        options::degrees,
        options::instructors,
        options::semesters,
        options::available_options
    ),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Records", description = "Degree, course, instructor, section and objective creation"),
        (name = "Associations", description = "Links between courses, degrees, objectives and sections"),
        (name = "Evaluations", description = "Per-section grade distributions and feedback"),
        (name = "Courses", description = "Course and learning objective queries"),
        (name = "Sections", description = "Section queries over academic terms"),
        (name = "Options", description = "Selectable degrees, semesters and instructors"),
    ),
    info(
        title = "Academic Records API",
        version = "1.0.0",
        description = "Degrees, courses, sections, learning objectives and course evaluations",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
