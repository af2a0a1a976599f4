mod common;

use common::{add_course, setup};
use database::{
    db::{create_schema, drop_schema},
    services::course::CourseService,
};

#[tokio::test]
async fn test_schema_creation_is_idempotent() {
    let db = setup().await;
    add_course(&db, "CS", 5330, "Pattern Recognition").await;

    create_schema(&db).await.unwrap();
    create_schema(&db).await.unwrap();

    let course = CourseService::get_course(&db, "CS5330").await.unwrap();
    assert!(course.is_some());
}

#[tokio::test]
async fn test_schema_can_be_dropped_and_recreated() {
    let db = setup().await;
    add_course(&db, "CS", 5330, "Pattern Recognition").await;

    drop_schema(&db).await.unwrap();
    create_schema(&db).await.unwrap();

    let course = CourseService::get_course(&db, "CS5330").await.unwrap();
    assert!(course.is_none());
}
