#![allow(dead_code)]

use database::{
    db::{DatabaseConfig, create_connection, create_schema},
    services::{
        course::CourseService, degree::DegreeService, instructor::InstructorService,
        objective::ObjectiveService, section::SectionService,
    },
};
use models::{
    Semester, Term, TermRange,
    records::{
        CourseObjectiveLink, DegreeCourseLink, NewCourse, NewDegree, NewInstructor,
        NewLearningObjective, NewSection,
    },
};
use sea_orm::DatabaseConnection;

pub async fn setup() -> DatabaseConnection {
    let db = create_connection(&DatabaseConfig::sqlite_in_memory())
        .await
        .expect("in-memory store should open");
    create_schema(&db).await.expect("schema should apply");
    db
}

pub fn term(year: i32, semester: Semester) -> Term {
    Term::new(year, semester)
}

pub fn range(start: Term, end: Term) -> TermRange {
    TermRange::new(start, end).expect("range should be ordered")
}

pub async fn add_course(db: &DatabaseConnection, department: &str, code: i32, name: &str) -> String {
    CourseService::add_course(
        db,
        NewCourse {
            name: name.to_string(),
            department_code: department.to_string(),
            course_code: code,
        },
    )
    .await
    .expect("course should be added")
}

pub async fn add_instructor(db: &DatabaseConnection, instructor_id: i32, name: &str) {
    InstructorService::add_instructor(
        db,
        NewInstructor {
            instructor_id,
            name: name.to_string(),
        },
    )
    .await
    .expect("instructor should be added");
}

pub async fn add_degree(db: &DatabaseConnection, name: &str, level: &str) {
    DegreeService::add_degree(
        db,
        NewDegree {
            name: name.to_string(),
            level: level.to_string(),
        },
    )
    .await
    .expect("degree should be added");
}

pub async fn link_degree(db: &DatabaseConnection, name: &str, level: &str, course: &str, core: bool) {
    DegreeService::associate_course(
        db,
        DegreeCourseLink {
            degree_name: name.to_string(),
            degree_level: level.to_string(),
            course_number: course.to_string(),
            core_course: core,
        },
    )
    .await
    .expect("course should be linked to degree");
}

pub async fn add_objective(db: &DatabaseConnection, code: i32, title: &str) {
    ObjectiveService::add_learning_objective(
        db,
        NewLearningObjective {
            code,
            title: title.to_string(),
            description: format!("Students can {}", title.to_lowercase()),
        },
    )
    .await
    .expect("objective should be added");
}

pub async fn link_objective(db: &DatabaseConnection, course: &str, objective_code: i32) {
    ObjectiveService::associate_course(
        db,
        CourseObjectiveLink {
            course_number: course.to_string(),
            objective_code,
        },
    )
    .await
    .expect("course should be linked to objective");
}

pub async fn add_section(
    db: &DatabaseConnection,
    section_number: i32,
    course: &str,
    instructor_id: i32,
    term: Term,
) {
    SectionService::add_section(
        db,
        NewSection {
            section_number,
            number_of_students: 30,
            instructor_id,
            course_number: course.to_string(),
            year: term.year,
            semester: term.semester,
        },
    )
    .await
    .expect("section should be added");
}
