//! Student domain models and views.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::attendance::model::AttendanceRecord;
use crate::modules::classes::model::{Class, ClassOption};

/// A student profile, linked one-to-one with a `users` row.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Student {
    pub id: i64,
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// Class-selection form posted to the student dashboard.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ClassSelectionForm {
    /// Batch of the selected class.
    pub subject: Option<i64>,
}

/// Fields needed to create a student account.
#[derive(Debug, Clone, Validate)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 80))]
    pub username: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
}

/// The student dashboard view.
///
/// A plain visit fills `class_options` and `registered_classes` only. After a
/// class selection either `attendance_data` is non-empty and
/// `selected_class` is set, or `warning` explains that nothing was found.
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentDashboard {
    pub student: Student,
    pub class_options: Vec<ClassOption>,
    pub registered_classes: Vec<Class>,
    pub selected_class: Option<i64>,
    pub attendance_data: Vec<AttendanceRecord>,
    pub warning: Option<String>,
}

pub const NO_ATTENDANCE_WARNING: &str = "No attendance data found for the selected class.";
