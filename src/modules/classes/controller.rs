use crate::modules::auth::controller::ErrorResponse;
use crate::modules::classes::model::{ClassOption, SubjectsPage};
use crate::modules::classes::service::ClassService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{Json, extract::State};
use tracing::instrument;

/// List every class; no session required
#[utoipa::path(
    get,
    path = "/subjects.html",
    responses(
        (status = 200, description = "All classes as selection options", body = SubjectsPage),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn subjects(State(state): State<AppState>) -> Result<Json<SubjectsPage>, AppError> {
    let class_options = ClassService::list_all(&state.db)
        .await?
        .into_iter()
        .map(ClassOption::from)
        .collect();

    Ok(Json(SubjectsPage { class_options }))
}
