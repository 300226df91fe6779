mod common;

use axum::http::StatusCode;
use chrono::NaiveDate;
use common::{
    body_json, create_test_faculty, create_test_student, form_request, get_request, location,
    login_cookie, send, setup_test_app,
};
use rollcall::modules::leave::model::{LeaveApplication, LeaveDecision, LeaveForm, LeaveStatus};
use rollcall::modules::leave::service::LeaveService;
use sqlx::SqlitePool;

fn leave_form(start_date: &str, end_date: &str) -> LeaveForm {
    LeaveForm {
        start_date: NaiveDate::parse_from_str(start_date, "%Y-%m-%d").unwrap(),
        end_date: NaiveDate::parse_from_str(end_date, "%Y-%m-%d").unwrap(),
    }
}

async fn leave_rows(pool: &SqlitePool) -> Vec<LeaveApplication> {
    sqlx::query_as::<_, LeaveApplication>(
        "SELECT id, student_id, start_date, end_date, status, reviewed_by, reviewed_at, created_at FROM leave_applications ORDER BY id",
    )
    .fetch_all(pool)
    .await
    .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_apply_leave_creates_pending_application(pool: SqlitePool) {
    let student = create_test_student(&pool, "alice").await;
    let app = setup_test_app(pool.clone());
    let cookie = login_cookie(&app, "alice").await;

    let response = send(
        &app,
        form_request(
            "/student/apply_leave",
            "start_date=2024-01-10&end_date=2024-01-12",
            Some(&cookie),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/student_dashboard");

    let rows = leave_rows(&pool).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].student_id, student.id);
    assert_eq!(rows[0].status, LeaveStatus::Pending);
    assert_eq!(rows[0].start_date.to_string(), "2024-01-10");
    assert_eq!(rows[0].end_date.to_string(), "2024-01-12");
    assert!(rows[0].reviewed_by.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_apply_leave_accepts_reversed_dates(pool: SqlitePool) {
    create_test_student(&pool, "alice").await;
    let app = setup_test_app(pool.clone());
    let cookie = login_cookie(&app, "alice").await;

    let response = send(
        &app,
        form_request(
            "/student/apply_leave",
            "start_date=2024-02-10&end_date=2024-02-01",
            Some(&cookie),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(leave_rows(&pool).await.len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_apply_leave_rejects_malformed_date(pool: SqlitePool) {
    create_test_student(&pool, "alice").await;
    let app = setup_test_app(pool.clone());
    let cookie = login_cookie(&app, "alice").await;

    let response = send(
        &app,
        form_request(
            "/student/apply_leave",
            "start_date=tomorrow&end_date=2024-01-12",
            Some(&cookie),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(leave_rows(&pool).await.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_apply_leave_page_lists_own_applications(pool: SqlitePool) {
    create_test_student(&pool, "alice").await;
    create_test_student(&pool, "bob").await;
    let app = setup_test_app(pool);

    let alice = login_cookie(&app, "alice").await;
    let bob = login_cookie(&app, "bob").await;

    send(
        &app,
        form_request(
            "/student/apply_leave",
            "start_date=2024-01-10&end_date=2024-01-12",
            Some(&alice),
        ),
    )
    .await;
    send(
        &app,
        form_request(
            "/student/apply_leave",
            "start_date=2024-03-01&end_date=2024-03-02",
            Some(&bob),
        ),
    )
    .await;

    let response = send(&app, get_request("/student/apply_leave", Some(&alice))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let applications = body["leave_applications"].as_array().unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0]["start_date"], "2024-01-10");
    assert_eq!(applications[0]["status"], "Pending");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_faculty_sees_all_and_only_pending(pool: SqlitePool) {
    let alice = create_test_student(&pool, "alice").await;
    let bob = create_test_student(&pool, "bob").await;
    let prof = create_test_faculty(&pool, "prof").await;

    let first = LeaveService::apply(&pool, alice.id, &leave_form("2024-01-10", "2024-01-12"))
        .await
        .unwrap();
    LeaveService::apply(&pool, bob.id, &leave_form("2024-02-01", "2024-02-03"))
        .await
        .unwrap();
    let resolved = LeaveService::apply(&pool, bob.id, &leave_form("2024-03-01", "2024-03-01"))
        .await
        .unwrap();
    LeaveService::review(&pool, resolved.id, prof.id, LeaveDecision::Reject)
        .await
        .unwrap();

    let app = setup_test_app(pool);
    let cookie = login_cookie(&app, "prof").await;

    let response = send(&app, get_request("/faculty/leave_applications", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let applications = body["leave_applications"].as_array().unwrap();
    assert_eq!(applications.len(), 2);
    assert!(applications.iter().all(|a| a["status"] == "Pending"));
    assert!(applications.iter().any(|a| a["id"] == first.id && a["last_name"] == "alice"));
    assert!(applications.iter().all(|a| a["id"] != resolved.id));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_student_cannot_list_leave_applications(pool: SqlitePool) {
    create_test_student(&pool, "alice").await;
    let app = setup_test_app(pool);
    let cookie = login_cookie(&app, "alice").await;

    let response = send(&app, get_request("/faculty/leave_applications", Some(&cookie))).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/student_dashboard");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_approve_leave_then_second_review_conflicts(pool: SqlitePool) {
    create_test_student(&pool, "alice").await;
    let prof = create_test_faculty(&pool, "prof").await;
    let app = setup_test_app(pool.clone());

    let student_cookie = login_cookie(&app, "alice").await;
    send(
        &app,
        form_request(
            "/student/apply_leave",
            "start_date=2024-01-10&end_date=2024-01-12",
            Some(&student_cookie),
        ),
    )
    .await;
    let id = leave_rows(&pool).await[0].id;

    let cookie = login_cookie(&app, "prof").await;
    let uri = format!("/faculty/leave_applications/{}/approve", id);

    let response = send(&app, form_request(&uri, "", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/faculty/leave_applications");

    let rows = leave_rows(&pool).await;
    let row = &rows[0];
    assert_eq!(row.status, LeaveStatus::Approved);
    assert_eq!(row.reviewed_by, Some(prof.id));
    assert!(row.reviewed_at.is_some());

    let response = send(&app, get_request("/faculty/leave_applications", Some(&cookie))).await;
    let body = body_json(response).await;
    assert!(body["leave_applications"].as_array().unwrap().is_empty());

    let reject_uri = format!("/faculty/leave_applications/{}/reject", id);
    let response = send(&app, form_request(&reject_uri, "", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        format!("Leave application {} is already Approved", id)
    );
    assert_eq!(leave_rows(&pool).await[0].status, LeaveStatus::Approved);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_reject_leave_sets_rejected(pool: SqlitePool) {
    let student = create_test_student(&pool, "alice").await;
    create_test_faculty(&pool, "prof").await;
    let application = LeaveService::apply(&pool, student.id, &leave_form("2024-05-06", "2024-05-07"))
        .await
        .unwrap();

    let app = setup_test_app(pool.clone());
    let cookie = login_cookie(&app, "prof").await;
    let uri = format!("/faculty/leave_applications/{}/reject", application.id);

    let response = send(&app, form_request(&uri, "", Some(&cookie))).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(leave_rows(&pool).await[0].status, LeaveStatus::Rejected);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_review_unknown_leave_is_not_found(pool: SqlitePool) {
    create_test_faculty(&pool, "prof").await;
    let app = setup_test_app(pool);
    let cookie = login_cookie(&app, "prof").await;

    let response = send(
        &app,
        form_request("/faculty/leave_applications/999/approve", "", Some(&cookie)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_student_cannot_review_leave(pool: SqlitePool) {
    let student = create_test_student(&pool, "alice").await;
    let application = LeaveService::apply(&pool, student.id, &leave_form("2024-01-10", "2024-01-12"))
        .await
        .unwrap();

    let app = setup_test_app(pool.clone());
    let cookie = login_cookie(&app, "alice").await;
    let uri = format!("/faculty/leave_applications/{}/approve", application.id);

    let response = send(&app, form_request(&uri, "", Some(&cookie))).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/student_dashboard");
    assert_eq!(leave_rows(&pool).await[0].status, LeaveStatus::Pending);
}
