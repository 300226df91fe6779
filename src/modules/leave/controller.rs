use crate::metrics::{track_leave_reviewed, track_leave_submitted};
use crate::middleware::role::{FacultySession, StudentSession};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::Role;
use crate::modules::leave::model::{
    ApplyLeavePage, FacultyLeaveApplications, LeaveDecision, LeaveForm,
};
use crate::modules::leave::service::LeaveService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedForm;
use axum::{
    Json,
    extract::{Path, State},
    response::Redirect,
};
use tracing::{info, instrument};

pub const LEAVE_APPLICATIONS_PATH: &str = "/faculty/leave_applications";

/// Show the leave form with the caller's own applications
#[utoipa::path(
    get,
    path = "/student/apply_leave",
    responses(
        (status = 200, description = "The student's leave applications", body = ApplyLeavePage),
        (status = 303, description = "No session, or a faculty session"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Leave"
)]
#[instrument(skip(state, session), fields(student_id = session.student.id))]
pub async fn apply_leave_page(
    State(state): State<AppState>,
    session: StudentSession,
) -> Result<Json<ApplyLeavePage>, AppError> {
    let leave_applications = LeaveService::list_for_student(&state.db, session.student.id).await?;

    Ok(Json(ApplyLeavePage {
        student: session.student,
        leave_applications,
    }))
}

/// Submit a leave application
#[utoipa::path(
    post,
    path = "/student/apply_leave",
    request_body(content = LeaveForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Application stored as Pending; redirected to the dashboard"),
        (status = 400, description = "Missing or malformed dates", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Leave"
)]
#[instrument(skip(state, session), fields(student_id = session.student.id))]
pub async fn apply_leave(
    State(state): State<AppState>,
    session: StudentSession,
    ValidatedForm(form): ValidatedForm<LeaveForm>,
) -> Result<Redirect, AppError> {
    let application = LeaveService::apply(&state.db, session.student.id, &form).await?;

    track_leave_submitted();
    info!(leave_id = application.id, "Leave application submitted");

    Ok(Redirect::to(Role::Student.dashboard_path()))
}

/// List every pending leave application
#[utoipa::path(
    get,
    path = "/faculty/leave_applications",
    responses(
        (status = 200, description = "Pending applications with student names", body = FacultyLeaveApplications),
        (status = 303, description = "No session, or a student session"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Leave"
)]
#[instrument(skip(state, _session))]
pub async fn faculty_leave_applications(
    State(state): State<AppState>,
    _session: FacultySession,
) -> Result<Json<FacultyLeaveApplications>, AppError> {
    let leave_applications = LeaveService::list_pending(&state.db).await?;
    Ok(Json(FacultyLeaveApplications { leave_applications }))
}

async fn review_leave(
    state: &AppState,
    session: &FacultySession,
    id: i64,
    decision: LeaveDecision,
) -> Result<Redirect, AppError> {
    let application = LeaveService::review(&state.db, id, session.faculty.id, decision).await?;

    track_leave_reviewed(application.status);
    info!(
        leave_id = application.id,
        status = application.status.as_str(),
        "Leave application reviewed"
    );

    Ok(Redirect::to(LEAVE_APPLICATIONS_PATH))
}

/// Approve a pending leave application
#[utoipa::path(
    post,
    path = "/faculty/leave_applications/{id}/approve",
    params(
        ("id" = i64, Path, description = "Leave application ID")
    ),
    responses(
        (status = 303, description = "Approved; redirected to the listing"),
        (status = 404, description = "Leave application not found", body = ErrorResponse),
        (status = 409, description = "Leave application already resolved", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Leave"
)]
#[instrument(skip(state, session), fields(faculty_id = session.faculty.id))]
pub async fn approve_leave(
    State(state): State<AppState>,
    session: FacultySession,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    review_leave(&state, &session, id, LeaveDecision::Approve).await
}

/// Reject a pending leave application
#[utoipa::path(
    post,
    path = "/faculty/leave_applications/{id}/reject",
    params(
        ("id" = i64, Path, description = "Leave application ID")
    ),
    responses(
        (status = 303, description = "Rejected; redirected to the listing"),
        (status = 404, description = "Leave application not found", body = ErrorResponse),
        (status = 409, description = "Leave application already resolved", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Leave"
)]
#[instrument(skip(state, session), fields(faculty_id = session.faculty.id))]
pub async fn reject_leave(
    State(state): State<AppState>,
    session: FacultySession,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    review_leave(&state, &session, id, LeaveDecision::Reject).await
}
