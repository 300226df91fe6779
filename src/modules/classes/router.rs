use crate::modules::classes::controller::subjects;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_classes_router() -> Router<AppState> {
    Router::new().route("/subjects.html", get(subjects))
}
