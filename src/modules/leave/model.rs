//! Leave application models and views.
//!
//! A leave application starts out [`LeaveStatus::Pending`] and is resolved
//! once, by a faculty member, to either `Approved` or `Rejected`.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::students::model::Student;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }
}

/// A faculty member's verdict on a pending application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveDecision {
    Approve,
    Reject,
}

impl From<LeaveDecision> for LeaveStatus {
    fn from(decision: LeaveDecision) -> Self {
        match decision {
            LeaveDecision::Approve => LeaveStatus::Approved,
            LeaveDecision::Reject => LeaveStatus::Rejected,
        }
    }
}

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct LeaveApplication {
    pub id: i64,
    pub student_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
    /// `faculty.id` of the reviewer once resolved.
    pub reviewed_by: Option<i64>,
    pub reviewed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

/// A leave application joined with the applying student's name.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct LeaveApplicationWithStudent {
    pub id: i64,
    pub student_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
    pub created_at: NaiveDateTime,
}

/// Leave request form. Dates are ISO `YYYY-MM-DD`; their order is not
/// checked.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LeaveForm {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// The apply-leave view, with the student's earlier applications.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApplyLeavePage {
    pub student: Student,
    pub leave_applications: Vec<LeaveApplication>,
}

/// The faculty review view: every pending application in the system.
#[derive(Debug, Serialize, ToSchema)]
pub struct FacultyLeaveApplications {
    pub leave_applications: Vec<LeaveApplicationWithStudent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_maps_to_terminal_status() {
        assert_eq!(LeaveStatus::from(LeaveDecision::Approve), LeaveStatus::Approved);
        assert_eq!(LeaveStatus::from(LeaveDecision::Reject), LeaveStatus::Rejected);
    }

    #[test]
    fn test_status_serializes_capitalized() {
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Pending).unwrap(),
            "\"Pending\""
        );
        assert_eq!(LeaveStatus::Rejected.as_str(), "Rejected");
    }
}
