use anyhow::{Context, anyhow};
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::modules::leave::model::{
    LeaveApplication, LeaveApplicationWithStudent, LeaveDecision, LeaveForm, LeaveStatus,
};
use crate::utils::errors::AppError;

const LEAVE_COLUMNS: &str =
    "id, student_id, start_date, end_date, status, reviewed_by, reviewed_at, created_at";

pub struct LeaveService;

impl LeaveService {
    /// Stores a new pending application. Date order, overlaps and duplicates
    /// are not checked.
    #[instrument(skip(db))]
    pub async fn apply(
        db: &SqlitePool,
        student_id: i64,
        form: &LeaveForm,
    ) -> Result<LeaveApplication, AppError> {
        let application = sqlx::query_as::<_, LeaveApplication>(&format!(
            r#"
            INSERT INTO leave_applications (student_id, start_date, end_date, status)
            VALUES (?, ?, ?, ?)
            RETURNING {LEAVE_COLUMNS}
            "#
        ))
        .bind(student_id)
        .bind(form.start_date)
        .bind(form.end_date)
        .bind(LeaveStatus::Pending)
        .fetch_one(db)
        .await
        .context("Failed to create leave application")
        .map_err(AppError::database)?;

        Ok(application)
    }

    #[instrument(skip(db))]
    pub async fn list_for_student(
        db: &SqlitePool,
        student_id: i64,
    ) -> Result<Vec<LeaveApplication>, AppError> {
        let applications = sqlx::query_as::<_, LeaveApplication>(&format!(
            r#"
            SELECT {LEAVE_COLUMNS}
            FROM leave_applications
            WHERE student_id = ?
            ORDER BY start_date DESC, id DESC
            "#
        ))
        .bind(student_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch leave applications for student")
        .map_err(AppError::database)?;

        Ok(applications)
    }

    /// Every pending application, regardless of student or class.
    #[instrument(skip(db))]
    pub async fn list_pending(
        db: &SqlitePool,
    ) -> Result<Vec<LeaveApplicationWithStudent>, AppError> {
        let applications = sqlx::query_as::<_, LeaveApplicationWithStudent>(
            r#"
            SELECT la.id, la.student_id, s.first_name, s.last_name,
                   la.start_date, la.end_date, la.status, la.created_at
            FROM leave_applications la
            INNER JOIN students s ON s.id = la.student_id
            WHERE la.status = ?
            ORDER BY la.created_at, la.id
            "#,
        )
        .bind(LeaveStatus::Pending)
        .fetch_all(db)
        .await
        .context("Failed to fetch pending leave applications")
        .map_err(AppError::database)?;

        Ok(applications)
    }

    #[instrument(skip(db))]
    pub async fn get_leave_application(
        db: &SqlitePool,
        id: i64,
    ) -> Result<LeaveApplication, AppError> {
        sqlx::query_as::<_, LeaveApplication>(&format!(
            "SELECT {LEAVE_COLUMNS} FROM leave_applications WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch leave application")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow!("Leave application not found")))
    }

    /// Resolves a pending application.
    ///
    /// The status check and the update are one statement, so two reviewers
    /// racing on the same row cannot both succeed.
    #[instrument(skip(db))]
    pub async fn review(
        db: &SqlitePool,
        id: i64,
        reviewer_id: i64,
        decision: LeaveDecision,
    ) -> Result<LeaveApplication, AppError> {
        let status = LeaveStatus::from(decision);

        let updated = sqlx::query_as::<_, LeaveApplication>(&format!(
            r#"
            UPDATE leave_applications
            SET status = ?, reviewed_by = ?, reviewed_at = ?
            WHERE id = ? AND status = ?
            RETURNING {LEAVE_COLUMNS}
            "#
        ))
        .bind(status)
        .bind(reviewer_id)
        .bind(Utc::now().naive_utc())
        .bind(id)
        .bind(LeaveStatus::Pending)
        .fetch_optional(db)
        .await
        .context("Failed to update leave application")
        .map_err(AppError::database)?;

        match updated {
            Some(application) => Ok(application),
            None => {
                let existing = Self::get_leave_application(db, id).await?;
                Err(AppError::conflict(anyhow!(
                    "Leave application {} is already {}",
                    id,
                    existing.status.as_str()
                )))
            }
        }
    }
}
