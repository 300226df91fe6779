use crate::modules::students::controller::{select_class, student_dashboard};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_students_router() -> Router<AppState> {
    Router::new().route("/student_dashboard", get(student_dashboard).post(select_class))
}
