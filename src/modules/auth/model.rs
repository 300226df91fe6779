//! Authentication data models.
//!
//! - [`Role`]: which kind of profile a user owns
//! - [`User`]: the login identity (never carries the password hash)
//! - [`Account`]: a restored session, the user together with its profile
//! - [`Claims`]: what the session cookie token carries

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::faculty::model::Faculty;
use crate::modules::students::model::Student;

/// The kind of profile attached to a user.
///
/// Stored as the `role` column of `users`; a user is always exactly one of
/// these.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Student,
    Faculty,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
        }
    }

    /// Where a freshly logged-in user of this role lands.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Student => "/student_dashboard",
            Role::Faculty => "/faculty/dashboard",
        }
    }
}

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

#[derive(FromRow, Debug)]
pub struct UserWithPassword {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl From<UserWithPassword> for User {
    fn from(value: UserWithPassword) -> Self {
        Self {
            id: value.id,
            username: value.username,
            role: value.role,
        }
    }
}

/// An authenticated user together with the profile its role implies.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Account {
    Student { user: User, student: Student },
    Faculty { user: User, faculty: Faculty },
}

impl Account {
    pub fn user(&self) -> &User {
        match self {
            Account::Student { user, .. } | Account::Faculty { user, .. } => user,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Account::Student { .. } => Role::Student,
            Account::Faculty { .. } => Role::Faculty,
        }
    }
}

// Session token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub role: Role,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

/// Login form body (`application/x-www-form-urlencoded`).
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginForm {
    #[validate(length(min = 1, max = 80, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// The login view. `error` is set when a submission was rejected.
#[derive(Debug, Serialize, Default, ToSchema)]
pub struct LoginPage {
    pub error: Option<String>,
}
