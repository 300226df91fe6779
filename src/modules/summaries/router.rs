use crate::modules::summaries::controller::student_summary;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_summaries_router() -> Router<AppState> {
    Router::new().route("/student/summary", get(student_summary))
}
