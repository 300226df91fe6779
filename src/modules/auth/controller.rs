use anyhow::anyhow;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::{info, instrument};
use utoipa::ToSchema;

use super::model::{LoginForm, LoginPage};
use super::service::AuthService;
use crate::metrics::{track_user_login_failure, track_user_login_success};
use crate::middleware::auth::{LOGIN_PATH, session_cookie, session_removal_cookie};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_session_token;
use crate::validator::ValidatedForm;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Show the login page
#[utoipa::path(
    get,
    path = "/login",
    responses(
        (status = 200, description = "Empty login form", body = LoginPage)
    ),
    tag = "Authentication"
)]
pub async fn login_page() -> Json<LoginPage> {
    Json(LoginPage::default())
}

/// Log in and receive a session cookie
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Logged in; redirected to the role's dashboard"),
        (status = 400, description = "Malformed form", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = LoginPage),
        (status = 403, description = "Account has no profile for its role", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar, dto), fields(username = %dto.username))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedForm(dto): ValidatedForm<LoginForm>,
) -> Result<Response, AppError> {
    let Some(user) = AuthService::authenticate(&state.db, &dto).await? else {
        track_user_login_failure("invalid_credentials");
        let page = LoginPage {
            error: Some(INVALID_CREDENTIALS.to_string()),
        };
        return Ok((StatusCode::UNAUTHORIZED, Json(page)).into_response());
    };

    let Some(account) = AuthService::load_account(&state.db, user.id).await? else {
        track_user_login_failure("missing_profile");
        return Err(AppError::forbidden(anyhow!(
            "No {} profile exists for this account",
            user.role.as_str()
        )));
    };

    let role = account.role();
    let token = create_session_token(user.id, role, &state.session_config)?;

    track_user_login_success(role);
    info!(user_id = user.id, role = role.as_str(), "User logged in");

    let jar = jar.add(session_cookie(token, &state.session_config));
    Ok((jar, Redirect::to(role.dashboard_path())).into_response())
}

/// Log out and clear the session cookie
#[utoipa::path(
    get,
    path = "/logout",
    responses(
        (status = 303, description = "Session cleared; redirected to the login page")
    ),
    tag = "Authentication"
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    (jar.remove(session_removal_cookie()), Redirect::to(LOGIN_PATH))
}
