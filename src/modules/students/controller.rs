use crate::middleware::role::StudentSession;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::students::model::{ClassSelectionForm, StudentDashboard};
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedForm;
use axum::{Json, extract::State};
use tracing::instrument;

/// Show the student dashboard
#[utoipa::path(
    get,
    path = "/student_dashboard",
    responses(
        (status = 200, description = "Class options and registered classes", body = StudentDashboard),
        (status = 303, description = "No session, or a faculty session"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state, session), fields(student_id = session.student.id))]
pub async fn student_dashboard(
    State(state): State<AppState>,
    session: StudentSession,
) -> Result<Json<StudentDashboard>, AppError> {
    let dashboard = StudentService::dashboard(&state.db, session.student).await?;
    Ok(Json(dashboard))
}

/// Select a class and view own attendance in it
#[utoipa::path(
    post,
    path = "/student_dashboard",
    request_body(content = ClassSelectionForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Attendance records, or a warning when there are none", body = StudentDashboard),
        (status = 303, description = "No session, or a faculty session"),
        (status = 400, description = "Malformed form", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state, session), fields(student_id = session.student.id))]
pub async fn select_class(
    State(state): State<AppState>,
    session: StudentSession,
    ValidatedForm(form): ValidatedForm<ClassSelectionForm>,
) -> Result<Json<StudentDashboard>, AppError> {
    let dashboard = StudentService::select_class(&state.db, session.student, form.subject).await?;
    Ok(Json(dashboard))
}
