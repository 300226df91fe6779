use anyhow::{Context, anyhow};
use chrono::{Datelike, NaiveDate};
use sqlx::SqlitePool;
use tracing::{info, instrument};

use crate::modules::summaries::model::{AttendanceTally, Summary};
use crate::utils::errors::AppError;

pub struct SummaryService;

/// First day of the month and first day of the following month.
pub fn month_bounds(month: u32, year: i32) -> Result<(NaiveDate, NaiveDate), AppError> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::bad_request(anyhow!("Invalid month {}/{}", month, year)))?;

    let (next_year, next_month) = if start.month() == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .ok_or_else(|| AppError::bad_request(anyhow!("Invalid month {}/{}", month, year)))?;

    Ok((start, end))
}

impl SummaryService {
    /// Computes and upserts the attendance percentage of every (student,
    /// class) pair with marks in the given month. Re-running for the same
    /// month overwrites the previous figures.
    #[instrument(skip(db))]
    pub async fn summarize_month(
        db: &SqlitePool,
        month: u32,
        year: i32,
    ) -> Result<Vec<Summary>, AppError> {
        let (start, end) = month_bounds(month, year)?;

        let tallies = sqlx::query_as::<_, AttendanceTally>(
            r#"
            SELECT student_id,
                   class_id,
                   SUM(CASE WHEN status = 'P' THEN 1 ELSE 0 END) AS present,
                   COUNT(*) AS total
            FROM attendance
            WHERE date >= ? AND date < ?
            GROUP BY student_id, class_id
            ORDER BY student_id, class_id
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(db)
        .await
        .context("Failed to tally attendance")
        .map_err(AppError::database)?;

        let mut tx = db.begin().await.context("Failed to begin transaction")?;
        let mut summaries = Vec::with_capacity(tallies.len());

        for tally in &tallies {
            let summary = sqlx::query_as::<_, Summary>(
                r#"
                INSERT INTO summaries (student_id, class_id, month, year, attendance_percentage)
                VALUES (?, ?, ?, ?, ?)
                ON CONFLICT (student_id, class_id, month, year)
                DO UPDATE SET attendance_percentage = excluded.attendance_percentage
                RETURNING id, student_id, class_id, month, year, attendance_percentage
                "#,
            )
            .bind(tally.student_id)
            .bind(tally.class_id)
            .bind(i64::from(month))
            .bind(i64::from(year))
            .bind(tally.percentage())
            .fetch_one(&mut *tx)
            .await
            .context("Failed to store summary")
            .map_err(AppError::database)?;

            summaries.push(summary);
        }

        tx.commit().await.context("Failed to commit summaries")?;

        info!(month, year, count = summaries.len(), "Attendance summarized");

        Ok(summaries)
    }

    #[instrument(skip(db))]
    pub async fn list_for_student(
        db: &SqlitePool,
        student_id: i64,
    ) -> Result<Vec<Summary>, AppError> {
        let summaries = sqlx::query_as::<_, Summary>(
            r#"
            SELECT id, student_id, class_id, month, year, attendance_percentage
            FROM summaries
            WHERE student_id = ?
            ORDER BY year DESC, month DESC, class_id
            "#,
        )
        .bind(student_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch summaries")
        .map_err(AppError::database)?;

        Ok(summaries)
    }
}
