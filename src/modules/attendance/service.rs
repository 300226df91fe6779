use anyhow::{Context, anyhow};
use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::modules::attendance::model::{AttendanceRecord, AttendanceStatus};
use crate::utils::errors::AppError;

pub struct AttendanceService;

impl AttendanceService {
    /// Every mark of one student in one class, oldest first.
    #[instrument(skip(db))]
    pub async fn for_student_in_class(
        db: &SqlitePool,
        student_id: i64,
        class_id: i64,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let records = sqlx::query_as::<_, AttendanceRecord>(
            r#"
            SELECT id, date, student_id, class_id, status
            FROM attendance
            WHERE student_id = ? AND class_id = ?
            ORDER BY date, id
            "#,
        )
        .bind(student_id)
        .bind(class_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch attendance")
        .map_err(AppError::database)?;

        Ok(records)
    }

    #[instrument(skip(db))]
    pub async fn record(
        db: &SqlitePool,
        student_id: i64,
        class_id: i64,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Result<AttendanceRecord, AppError> {
        let record = sqlx::query_as::<_, AttendanceRecord>(
            r#"
            INSERT INTO attendance (date, student_id, class_id, status)
            VALUES (?, ?, ?, ?)
            RETURNING id, date, student_id, class_id, status
            "#,
        )
        .bind(date)
        .bind(student_id)
        .bind(class_id)
        .bind(status)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_foreign_key_violation() {
                    return AppError::not_found(anyhow!(
                        "Student {} or class {} does not exist",
                        student_id,
                        class_id
                    ));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(record)
    }
}
