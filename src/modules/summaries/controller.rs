use crate::middleware::role::StudentSession;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::summaries::model::SummaryPage;
use crate::modules::summaries::service::SummaryService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{Json, extract::State};
use tracing::instrument;

/// List the caller's monthly attendance summaries
#[utoipa::path(
    get,
    path = "/student/summary",
    responses(
        (status = 200, description = "Summaries, newest month first", body = SummaryPage),
        (status = 303, description = "No session, or a faculty session"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Summaries"
)]
#[instrument(skip(state, session), fields(student_id = session.student.id))]
pub async fn student_summary(
    State(state): State<AppState>,
    session: StudentSession,
) -> Result<Json<SummaryPage>, AppError> {
    let summaries = SummaryService::list_for_student(&state.db, session.student.id).await?;
    Ok(Json(SummaryPage { summaries }))
}
