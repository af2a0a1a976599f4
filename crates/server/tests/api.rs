use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use database::db::{DatabaseConfig, create_connection, create_schema};
use serde_json::{Value, json};
use server::{AppState, create_router};
use tower::ServiceExt;

async fn app() -> Router {
    let db = create_connection(&DatabaseConfig::sqlite_in_memory())
        .await
        .unwrap();
    create_schema(&db).await.unwrap();
    create_router(AppState::new(db))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// A course in a degree, one instructor and two sections of the course
async fn seed(app: &Router) {
    let writes = [
        ("/add-degree", json!({ "name": "Computer Science", "level": "Master" })),
        (
            "/add-course",
            json!({ "name": "Machine Learning", "department_code": "CS", "course_code": 6375 }),
        ),
        ("/add-instructor", json!({ "instructor_id": 1, "name": "Ada Lovelace" })),
        (
            "/add-learning-objective",
            json!({ "code": 1, "title": "Analyze", "description": "Analyze complex problems" }),
        ),
        (
            "/associate-course-with-degree",
            json!({
                "degree_name": "Computer Science",
                "degree_level": "Master",
                "course_number": "CS6375",
                "core_course": true
            }),
        ),
        (
            "/associate-course-objective",
            json!({ "course_number": "CS6375", "objective_code": 1 }),
        ),
        (
            "/add-section",
            json!({
                "section_number": 1,
                "number_of_students": 40,
                "instructor_id": 1,
                "course_number": "CS6375",
                "year": 2024,
                "semester": "Fall"
            }),
        ),
        (
            "/add-section",
            json!({
                "section_number": 2,
                "number_of_students": 35,
                "instructor_id": 1,
                "course_number": "CS6375",
                "year": 2024,
                "semester": "winter"
            }),
        ),
    ];

    for (uri, body) in writes {
        let (status, response) = post(app, uri, body).await;
        assert_eq!(status, StatusCode::CREATED, "{uri}: {response}");
    }
}

#[tokio::test]
async fn test_health() {
    let app = app().await;
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn test_add_course_reports_course_number() {
    let app = app().await;

    let (status, body) = post(
        &app,
        "/add-course",
        json!({ "name": "Algorithms", "department_code": "cs", "course_code": 5343 }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "course CS5343 added");
}

#[tokio::test]
async fn test_out_of_range_course_code_is_bad_request() {
    let app = app().await;

    let (status, body) = post(
        &app,
        "/add-course",
        json!({ "name": "Intro", "department_code": "CS", "course_code": 999 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["error"].as_str().unwrap().contains("course_code"));
}

#[tokio::test]
async fn test_unknown_instructor_is_bad_request() {
    let app = app().await;
    seed(&app).await;

    let (status, body) = post(
        &app,
        "/add-section",
        json!({
            "section_number": 3,
            "number_of_students": 20,
            "instructor_id": 42,
            "course_number": "CS6375",
            "year": 2024,
            "semester": "Spring"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_REFERENCE");
}

#[tokio::test]
async fn test_duplicate_degree_is_bad_request() {
    let app = app().await;
    seed(&app).await;

    let (status, body) = post(
        &app,
        "/add-degree",
        json!({ "name": "Computer Science", "level": "Master" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "CONSTRAINT_VIOLATION");
}

#[tokio::test]
async fn test_courses_by_degree() {
    let app = app().await;
    seed(&app).await;

    let (status, body) = get(
        &app,
        "/courses-by-degree?degree_name=Computer%20Science&degree_level=Master",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "course_number": "CS6375", "course_name": "Machine Learning", "is_core_course": true }])
    );

    let (status, body) = get(
        &app,
        "/courses-by-degree?degree_name=Computer%20Science&degree_level=Bachelor",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_courses_by_objective_query_forms() {
    let app = app().await;
    seed(&app).await;

    for uri in [
        "/courses-by-objective?objective_codes=1",
        "/courses-by-objective?objective_codes=1&objective_codes=2",
        "/courses-by-objective?objective_codes=2,1",
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body.as_array().unwrap().len(), 1, "{uri}");
        assert_eq!(body[0]["course_number"], "CS6375");
    }

    let (status, _) = get(&app, "/courses-by-objective").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/courses-by-objective?objective_codes=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/courses-by-objective?objective_codes=7").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_sections_in_academic_order() {
    let app = app().await;
    seed(&app).await;

    let (status, body) = get(
        &app,
        "/list-sections?start_year=2024&start_semester=Winter&end_year=2024&end_semester=Fall",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let numbers: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["section_number"].as_i64().unwrap())
        .collect();
    assert_eq!(numbers, vec![2, 1]);
    assert_eq!(body[0]["semester"], "Winter");
}

#[tokio::test]
async fn test_inverted_range_is_bad_request() {
    let app = app().await;

    let (status, body) = get(
        &app,
        "/list-sections?start_year=2024&start_semester=Fall&end_year=2024&end_semester=Spring",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_evaluation_round_trip() {
    let app = app().await;
    seed(&app).await;

    let (status, body) = get(&app, "/get-evaluation/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let evaluation = json!({
        "section_ID": 1,
        "objective_code": 1,
        "eval_criteria": "Final project",
        "eval_A_count": 15,
        "eval_B_count": 12,
        "eval_C_count": 5,
        "eval_F_count": 1,
        "improvements": "Earlier project checkpoints"
    });
    let (status, body) = post(&app, "/update-evaluation", evaluation.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "Evaluation updated successfully");

    let (status, body) = get(&app, "/get-evaluation/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, evaluation);
}

#[tokio::test]
async fn test_instructor_section_views() {
    let app = app().await;
    seed(&app).await;

    let (status, _) = post(
        &app,
        "/update-evaluation",
        json!({
            "section_ID": 1,
            "objective_code": 1,
            "eval_criteria": "Final project",
            "eval_A_count": 15,
            "eval_B_count": 12,
            "eval_C_count": 5,
            "eval_F_count": 1,
            "improvements": ""
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let query = "instructor_id=1&degree_name=Computer%20Science&year=2024&semester=Fall";

    let (status, body) = get(&app, &format!("/instructor-sections?{query}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["section_number"], 1);
    assert_eq!(body[0]["course_name"], "Machine Learning");
    assert_eq!(body[0]["has_evaluation"], true);

    let (status, body) = get(
        &app,
        &format!("/sections-with-evaluations?{query}&degree_level=Master"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["evaluation"]["eval_A_count"], 15);
}

#[tokio::test]
async fn test_available_options() {
    let app = app().await;
    seed(&app).await;

    let (status, body) = get(&app, "/available-options").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "degrees": [{ "name": "Computer Science", "level": "Master" }],
            "semesters": ["2024 Winter", "2024 Fall"],
            "instructors": [{ "id": 1, "name": "Ada Lovelace" }]
        })
    );

    let (status, body) = get(&app, "/semesters").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[1]["semester_year"], "2024 Fall");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = app().await;

    let (status, body) = get(&app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/courses-by-objective"].is_object());
    assert!(body["paths"]["/get-evaluation/{section_id}"].is_object());
}
