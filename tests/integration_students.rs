mod common;

use axum::http::StatusCode;
use common::{
    create_test_house, create_test_student, empty_request, json_request, send, setup_test_app,
};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_create_student(pool: PgPool) {
    let house = create_test_house(&pool, "Gryffindor").await;
    let app = setup_test_app(pool.clone());

    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/students",
            &json!({
                "name": "Harry Potter",
                "class": 1,
                "house_id": house.id
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["name"], "Harry Potter");
    assert_eq!(body["class"], 1);
    assert_eq!(body["house_id"], house.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_student_with_unknown_house(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/students",
            &json!({ "name": "Luna Lovegood", "class": 4, "house_id": 777 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["house_id"], 777);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_student_name_too_long(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/students",
            &json!({ "name": "x".repeat(51), "class": 1, "house_id": 1 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "name must be between 1 and 50 characters");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_students(pool: PgPool) {
    let gryffindor = create_test_house(&pool, "Gryffindor").await;
    let slytherin = create_test_house(&pool, "Slytherin").await;
    let harry = create_test_student(&pool, "Harry Potter", 1, gryffindor.id).await;
    let draco = create_test_student(&pool, "Draco Malfoy", 1, slytherin.id).await;
    let app = setup_test_app(pool.clone());

    let (status, body) = send(app, empty_request("GET", "/api/students")).await;

    assert_eq!(status, StatusCode::OK);
    let students = body.as_array().unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(students[0]["id"], harry.id);
    assert_eq!(students[0]["name"], harry.name);
    assert_eq!(students[1]["id"], draco.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_students_filtered_by_house(pool: PgPool) {
    let gryffindor = create_test_house(&pool, "Gryffindor").await;
    let slytherin = create_test_house(&pool, "Slytherin").await;
    create_test_student(&pool, "Harry Potter", 1, gryffindor.id).await;
    let draco = create_test_student(&pool, "Draco Malfoy", 1, slytherin.id).await;
    let app = setup_test_app(pool.clone());

    let (status, body) = send(
        app,
        empty_request("GET", &format!("/api/students?house_id={}", slytherin.id)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let students = body.as_array().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["id"], draco.id);
    assert_eq!(students[0]["house_id"], draco.house_id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_student_by_id(pool: PgPool) {
    let student = create_test_student(&pool, "Cedric Diggory", 6, 2).await;
    let app = setup_test_app(pool.clone());

    let (status, body) = send(
        app,
        empty_request("GET", &format!("/api/students/{}", student.id)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], student.id);
    assert_eq!(body["name"], "Cedric Diggory");
    assert_eq!(body["class"], 6);
    assert_eq!(body["house_id"], 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_student_not_found(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let (status, body) = send(app, empty_request("GET", "/api/students/9999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Student not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_student_replaces_fields(pool: PgPool) {
    let gryffindor = create_test_house(&pool, "Gryffindor").await;
    let ravenclaw = create_test_house(&pool, "Ravenclaw").await;
    let student = create_test_student(&pool, "Ginny Weasly", 1, ravenclaw.id).await;
    let app = setup_test_app(pool.clone());

    let (status, body) = send(
        app,
        json_request(
            "PUT",
            &format!("/api/students/{}", student.id),
            &json!({
                "id": 4242,
                "name": "Ginny Weasley",
                "class": 2,
                "house_id": gryffindor.id
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], student.id);
    assert_eq!(body["name"], "Ginny Weasley");
    assert_eq!(body["class"], 2);
    assert_eq!(body["house_id"], gryffindor.id);

    let (name, class, house_id): (String, i32, i32) =
        sqlx::query_as("SELECT name, class, house_id FROM students WHERE id = $1")
            .bind(student.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(name, "Ginny Weasley");
    assert_eq!(class, 2);
    assert_eq!(house_id, gryffindor.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_student_requires_full_body(pool: PgPool) {
    let student = create_test_student(&pool, "Ron Weasley", 1, 1).await;
    let app = setup_test_app(pool.clone());

    let (status, body) = send(
        app,
        json_request(
            "PUT",
            &format!("/api/students/{}", student.id),
            &json!({ "name": "Ronald Weasley" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().ends_with("is required"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_student_not_found(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let (status, body) = send(
        app,
        json_request(
            "PUT",
            "/api/students/9999",
            &json!({ "name": "Nobody", "class": 1, "house_id": 1 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Student not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_student_returns_remaining(pool: PgPool) {
    let doomed = create_test_student(&pool, "Quirinus Quirrell", 7, 1).await;
    let kept = create_test_student(&pool, "Seamus Finnigan", 1, 1).await;
    let app = setup_test_app(pool.clone());

    let (status, body) = send(
        app,
        empty_request("DELETE", &format!("/api/students/{}", doomed.id)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let students = body.as_array().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["id"], kept.id);

    let app = setup_test_app(pool.clone());
    let (status, _) = send(
        app,
        empty_request("GET", &format!("/api/students/{}", doomed.id)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_missing_student_is_not_an_error(pool: PgPool) {
    let kept = create_test_student(&pool, "Dean Thomas", 1, 1).await;
    let app = setup_test_app(pool.clone());

    let (status, body) = send(app, empty_request("DELETE", "/api/students/9999")).await;

    assert_eq!(status, StatusCode::OK);
    let students = body.as_array().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["id"], kept.id);
}
