#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use rollcall::config::cors::CorsConfig;
use rollcall::config::session::SessionConfig;
use rollcall::modules::attendance::model::{AttendanceRecord, AttendanceStatus};
use rollcall::modules::attendance::service::AttendanceService;
use rollcall::modules::classes::model::{Class, CreateClassDto};
use rollcall::modules::classes::service::ClassService;
use rollcall::modules::faculty::model::{CreateFacultyDto, Faculty};
use rollcall::modules::faculty::service::FacultyService;
use rollcall::modules::students::model::{CreateStudentDto, Student};
use rollcall::modules::students::service::StudentService;
use rollcall::router::init_router;
use rollcall::state::AppState;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "testpass123";

pub fn test_session_config() -> SessionConfig {
    SessionConfig {
        secret: "test-session-secret".to_string(),
        expiry: 3600,
        secure_cookie: false,
    }
}

pub fn setup_test_app(pool: SqlitePool) -> Router {
    let state = AppState {
        db: pool,
        session_config: test_session_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    };
    init_router(state)
}

pub async fn create_test_student(pool: &SqlitePool, username: &str) -> Student {
    let (_, student) = StudentService::create_student(
        pool,
        CreateStudentDto {
            username: username.to_string(),
            password: TEST_PASSWORD.to_string(),
            first_name: "Test".to_string(),
            last_name: username.to_string(),
        },
    )
    .await
    .unwrap();
    student
}

pub async fn create_test_faculty(pool: &SqlitePool, username: &str) -> Faculty {
    let (_, faculty) = FacultyService::create_faculty(
        pool,
        CreateFacultyDto {
            username: username.to_string(),
            password: TEST_PASSWORD.to_string(),
            first_name: "Test".to_string(),
            last_name: username.to_string(),
            taught_classes: "Mathematics".to_string(),
        },
    )
    .await
    .unwrap();
    faculty
}

pub async fn create_test_class(
    pool: &SqlitePool,
    batch: i64,
    class_name: &str,
    instructor_id: Option<i64>,
) -> Class {
    ClassService::create_class(
        pool,
        CreateClassDto {
            batch,
            class_name: class_name.to_string(),
            instructor_id,
        },
    )
    .await
    .unwrap()
}

pub async fn mark_attendance(
    pool: &SqlitePool,
    student_id: i64,
    class_id: i64,
    date: &str,
    status: AttendanceStatus,
) -> AttendanceRecord {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    AttendanceService::record(pool, student_id, class_id, date, status)
        .await
        .unwrap()
}

pub fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn form_request(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn login(app: &Router, username: &str, password: &str) -> Response<Body> {
    let body = format!("username={}&password={}", username, password);
    send(app, form_request("/login", &body, None)).await
}

/// The `name=value` pair of the session cookie set by a response.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("session="))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

pub async fn login_cookie(app: &Router, username: &str) -> String {
    let response = login(app, username, TEST_PASSWORD).await;
    session_cookie(&response).expect("login did not set a session cookie")
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
