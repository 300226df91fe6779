use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Attendance mark, stored as `P` or `A`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
pub enum AttendanceStatus {
    #[serde(rename = "P")]
    #[sqlx(rename = "P")]
    Present,
    #[serde(rename = "A")]
    #[sqlx(rename = "A")]
    Absent,
}

impl AttendanceStatus {
    pub fn code(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "P",
            AttendanceStatus::Absent => "A",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for AttendanceStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "P" | "PRESENT" => Ok(AttendanceStatus::Present),
            "A" | "ABSENT" => Ok(AttendanceStatus::Absent),
            other => Err(anyhow::anyhow!(
                "Unknown attendance status '{}', expected P or A",
                other
            )),
        }
    }
}

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct AttendanceRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub student_id: i64,
    pub class_id: i64,
    pub status: AttendanceStatus,
}
