use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Monthly attendance percentage of one student in one class.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Summary {
    pub id: i64,
    pub student_id: i64,
    pub class_id: i64,
    pub month: i64,
    pub year: i64,
    pub attendance_percentage: f64,
}

/// Attendance counts of one (student, class) pair within a month.
#[derive(FromRow, Debug, Clone, PartialEq, Eq)]
pub struct AttendanceTally {
    pub student_id: i64,
    pub class_id: i64,
    pub present: i64,
    pub total: i64,
}

impl AttendanceTally {
    pub fn percentage(&self) -> f64 {
        attendance_percentage(self.present, self.total)
    }
}

/// `present / total` as a percentage in `[0, 100]`; zero when nothing was
/// recorded.
pub fn attendance_percentage(present: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    let present = present.clamp(0, total);
    (present as f64 * 100.0) / total as f64
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryPage {
    pub summaries: Vec<Summary>,
}
