mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_test_class, create_test_faculty, create_test_student, get_request,
    location, login_cookie, mark_attendance, send, setup_test_app,
};
use rollcall::modules::attendance::model::AttendanceStatus::{Absent, Present};
use rollcall::modules::summaries::service::SummaryService;
use sqlx::SqlitePool;

async fn summary_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM summaries")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_summarize_month_computes_percentages(pool: SqlitePool) {
    let alice = create_test_student(&pool, "alice").await;
    let bob = create_test_student(&pool, "bob").await;
    create_test_class(&pool, 101, "Mathematics", None).await;
    create_test_class(&pool, 102, "Physics", None).await;

    mark_attendance(&pool, alice.id, 101, "2024-01-08", Present).await;
    mark_attendance(&pool, alice.id, 101, "2024-01-15", Present).await;
    mark_attendance(&pool, alice.id, 101, "2024-01-22", Absent).await;
    mark_attendance(&pool, alice.id, 101, "2024-01-29", Present).await;
    mark_attendance(&pool, alice.id, 102, "2024-01-09", Absent).await;
    mark_attendance(&pool, bob.id, 101, "2024-01-08", Present).await;
    // Outside the month
    mark_attendance(&pool, alice.id, 101, "2024-02-01", Absent).await;
    mark_attendance(&pool, bob.id, 101, "2023-12-31", Absent).await;

    let summaries = SummaryService::summarize_month(&pool, 1, 2024).await.unwrap();
    assert_eq!(summaries.len(), 3);

    let find = |student_id: i64, class_id: i64| {
        summaries
            .iter()
            .find(|s| s.student_id == student_id && s.class_id == class_id)
            .unwrap()
    };

    assert_eq!(find(alice.id, 101).attendance_percentage, 75.0);
    assert_eq!(find(alice.id, 102).attendance_percentage, 0.0);
    assert_eq!(find(bob.id, 101).attendance_percentage, 100.0);
    assert!(summaries.iter().all(|s| s.month == 1 && s.year == 2024));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_summarize_month_is_idempotent(pool: SqlitePool) {
    let alice = create_test_student(&pool, "alice").await;
    create_test_class(&pool, 101, "Mathematics", None).await;
    mark_attendance(&pool, alice.id, 101, "2024-03-04", Present).await;
    mark_attendance(&pool, alice.id, 101, "2024-03-05", Absent).await;

    let first = SummaryService::summarize_month(&pool, 3, 2024).await.unwrap();
    let second = SummaryService::summarize_month(&pool, 3, 2024).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(summary_count(&pool).await, 1);

    // A later mark updates the existing row in place
    mark_attendance(&pool, alice.id, 101, "2024-03-06", Present).await;
    let third = SummaryService::summarize_month(&pool, 3, 2024).await.unwrap();

    assert_eq!(third[0].id, first[0].id);
    assert!((third[0].attendance_percentage - 200.0 / 3.0).abs() < 1e-9);
    assert_eq!(summary_count(&pool).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_summarize_month_rejects_invalid_month(pool: SqlitePool) {
    let err = SummaryService::summarize_month(&pool, 13, 2024)
        .await
        .unwrap_err();

    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert_eq!(summary_count(&pool).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_student_summary_lists_own_rows(pool: SqlitePool) {
    let alice = create_test_student(&pool, "alice").await;
    let bob = create_test_student(&pool, "bob").await;
    create_test_class(&pool, 101, "Mathematics", None).await;
    mark_attendance(&pool, alice.id, 101, "2024-01-08", Present).await;
    mark_attendance(&pool, alice.id, 101, "2024-02-05", Absent).await;
    mark_attendance(&pool, bob.id, 101, "2024-01-08", Present).await;

    SummaryService::summarize_month(&pool, 1, 2024).await.unwrap();
    SummaryService::summarize_month(&pool, 2, 2024).await.unwrap();

    let app = setup_test_app(pool);
    let cookie = login_cookie(&app, "alice").await;

    let response = send(&app, get_request("/student/summary", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let summaries = body["summaries"].as_array().unwrap();
    assert_eq!(summaries.len(), 2);
    assert!(summaries.iter().all(|s| s["student_id"] == alice.id));
    assert_eq!(summaries[0]["month"], 2);
    assert_eq!(summaries[0]["attendance_percentage"], 0.0);
    assert_eq!(summaries[1]["month"], 1);
    assert_eq!(summaries[1]["attendance_percentage"], 100.0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_faculty_cannot_view_student_summary(pool: SqlitePool) {
    create_test_faculty(&pool, "prof").await;
    let app = setup_test_app(pool);
    let cookie = login_cookie(&app, "prof").await;

    let response = send(&app, get_request("/student/summary", Some(&cookie))).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/faculty/dashboard");
}
