//! Role guards.
//!
//! Each extractor restores the session and insists on one role. A request
//! with a session of the other role is redirected to that role's dashboard;
//! a request without a session is redirected to the login page.
//!
//! ```rust,ignore
//! pub async fn faculty_dashboard(
//!     State(state): State<AppState>,
//!     FacultySession { faculty, .. }: FacultySession,
//! ) -> Result<Json<FacultyDashboard>, AppError> {
//!     // Only faculty accounts reach this point
//! }
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::metrics::track_authorization_check;
use crate::middleware::auth::{CurrentAccount, SessionRejection};
use crate::modules::auth::model::{Account, Role, User};
use crate::modules::faculty::model::Faculty;
use crate::modules::students::model::Student;
use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct StudentSession {
    pub user: User,
    pub student: Student,
}

impl FromRequestParts<AppState> for StudentSession {
    type Rejection = SessionRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentAccount(account) = CurrentAccount::from_request_parts(parts, state).await?;

        match account {
            Account::Student { user, student } => {
                track_authorization_check(true, Role::Student);
                Ok(StudentSession { user, student })
            }
            other => {
                track_authorization_check(false, other.role());
                Err(SessionRejection::WrongRole(other.role()))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct FacultySession {
    pub user: User,
    pub faculty: Faculty,
}

impl FromRequestParts<AppState> for FacultySession {
    type Rejection = SessionRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentAccount(account) = CurrentAccount::from_request_parts(parts, state).await?;

        match account {
            Account::Faculty { user, faculty } => {
                track_authorization_check(true, Role::Faculty);
                Ok(FacultySession { user, faculty })
            }
            other => {
                track_authorization_check(false, other.role());
                Err(SessionRejection::WrongRole(other.role()))
            }
        }
    }
}
