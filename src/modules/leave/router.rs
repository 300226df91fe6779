use crate::modules::leave::controller::{
    apply_leave, apply_leave_page, approve_leave, faculty_leave_applications, reject_leave,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_leave_router() -> Router<AppState> {
    Router::new()
        .route("/student/apply_leave", get(apply_leave_page).post(apply_leave))
        .route("/faculty/leave_applications", get(faculty_leave_applications))
        .route("/faculty/leave_applications/{id}/approve", post(approve_leave))
        .route("/faculty/leave_applications/{id}/reject", post(reject_leave))
}
