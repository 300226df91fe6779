use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::debug;

use crate::config::session::SessionConfig;
use crate::metrics::track_session_restore;
use crate::modules::auth::model::{Account, Role};
use crate::modules::auth::service::AuthService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_session_token;

pub const SESSION_COOKIE: &str = "session";
pub const LOGIN_PATH: &str = "/login";

/// Builds the cookie that carries a freshly issued session token.
pub fn session_cookie(token: String, session_config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(session_config.secure_cookie)
        .build()
}

/// A cookie that, once removed from the jar, clears the session.
pub fn session_removal_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}

/// Why a guarded route did not run.
#[derive(Debug)]
pub enum SessionRejection {
    /// No valid session; the client is sent to the login page.
    Unauthenticated,
    /// Valid session for the other role; the client is sent to its own
    /// dashboard.
    WrongRole(Role),
    Failed(AppError),
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        match self {
            SessionRejection::Unauthenticated => Redirect::to(LOGIN_PATH).into_response(),
            SessionRejection::WrongRole(role) => Redirect::to(role.dashboard_path()).into_response(),
            SessionRejection::Failed(err) => err.into_response(),
        }
    }
}

impl From<AppError> for SessionRejection {
    fn from(err: AppError) -> Self {
        SessionRejection::Failed(err)
    }
}

/// Extractor that restores the session cookie into an [`Account`].
///
/// The user and profile are reloaded from the database on every request,
/// so a deleted user or missing profile ends the session immediately.
#[derive(Debug, Clone)]
pub struct CurrentAccount(pub Account);

impl FromRequestParts<AppState> for CurrentAccount {
    type Rejection = SessionRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_owned())
            .ok_or(SessionRejection::Unauthenticated)?;

        let claims = verify_session_token(&token, &state.session_config).map_err(|_| {
            debug!("Rejected invalid or expired session cookie");
            track_session_restore(false);
            SessionRejection::Unauthenticated
        })?;

        let user_id = claims
            .user_id()
            .ok_or(SessionRejection::Unauthenticated)?;

        let account = AuthService::load_account(&state.db, user_id)
            .await?
            .ok_or_else(|| {
                debug!(user_id, "Session refers to a missing user or profile");
                track_session_restore(false);
                SessionRejection::Unauthenticated
            })?;

        track_session_restore(true);

        Ok(CurrentAccount(account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, header};

    fn location(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    #[test]
    fn test_unauthenticated_redirects_to_login() {
        let response = SessionRejection::Unauthenticated.into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/login");
    }

    #[test]
    fn test_wrong_role_redirects_to_own_dashboard() {
        let response = SessionRejection::WrongRole(Role::Student).into_response();
        assert_eq!(location(&response), "/student_dashboard");

        let response = SessionRejection::WrongRole(Role::Faculty).into_response();
        assert_eq!(location(&response), "/faculty/dashboard");
    }

    #[test]
    fn test_session_cookie_flags() {
        let config = SessionConfig {
            secret: "s".to_string(),
            expiry: 60,
            secure_cookie: true,
        };
        let cookie = session_cookie("token".to_string(), &config);

        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "token");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }
}
