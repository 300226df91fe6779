use crate::state::AppState;
use axum::{Router, routing::get};

use super::controller::{login, login_page, logout};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/", get(login_page).post(login))
        .route("/login", get(login_page).post(login))
        .route("/logout", get(logout))
}
