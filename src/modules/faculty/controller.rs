use crate::middleware::role::FacultySession;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::classes::service::ClassService;
use crate::modules::faculty::model::FacultyDashboard;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{Json, extract::State};
use tracing::instrument;

/// Show the faculty dashboard with the classes the caller instructs
#[utoipa::path(
    get,
    path = "/faculty/dashboard",
    responses(
        (status = 200, description = "Classes instructed by the faculty member", body = FacultyDashboard),
        (status = 303, description = "No session, or a student session"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Faculty"
)]
#[instrument(skip(state, session), fields(faculty_id = session.faculty.id))]
pub async fn faculty_dashboard(
    State(state): State<AppState>,
    session: FacultySession,
) -> Result<Json<FacultyDashboard>, AppError> {
    let class_options = ClassService::list_by_instructor(&state.db, session.faculty.id).await?;

    Ok(Json(FacultyDashboard {
        faculty: session.faculty,
        class_options,
    }))
}
