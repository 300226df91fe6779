//! Faculty domain models and views.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::classes::model::Class;

/// A faculty profile, linked one-to-one with a `users` row.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Faculty {
    pub id: i64,
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Free-text description of the subjects taught.
    pub taught_classes: String,
}

#[derive(Debug, Clone, Validate)]
pub struct CreateFacultyDto {
    #[validate(length(min = 1, max = 80))]
    pub username: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[validate(length(min = 1, max = 50))]
    pub taught_classes: String,
}

/// The faculty dashboard view: the classes this faculty member instructs.
#[derive(Debug, Serialize, ToSchema)]
pub struct FacultyDashboard {
    pub faculty: Faculty,
    pub class_options: Vec<Class>,
}
