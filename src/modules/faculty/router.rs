use crate::modules::faculty::controller::faculty_dashboard;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_faculty_router() -> Router<AppState> {
    Router::new().route("/faculty/dashboard", get(faculty_dashboard))
}
