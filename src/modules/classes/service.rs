use anyhow::{Context, anyhow};
use sqlx::SqlitePool;
use tracing::instrument;

use crate::modules::classes::model::{Class, CreateClassDto};
use crate::utils::errors::AppError;

pub struct ClassService;

impl ClassService {
    #[instrument(skip(db))]
    pub async fn list_all(db: &SqlitePool) -> Result<Vec<Class>, AppError> {
        let classes = sqlx::query_as::<_, Class>(
            "SELECT batch, class_name, instructor_id FROM classes ORDER BY batch",
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch classes")
        .map_err(AppError::database)?;

        Ok(classes)
    }

    /// Classes whose instructor is the given faculty profile.
    #[instrument(skip(db))]
    pub async fn list_by_instructor(
        db: &SqlitePool,
        faculty_id: i64,
    ) -> Result<Vec<Class>, AppError> {
        let classes = sqlx::query_as::<_, Class>(
            r#"
            SELECT batch, class_name, instructor_id
            FROM classes
            WHERE instructor_id = ?
            ORDER BY batch
            "#,
        )
        .bind(faculty_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch classes by instructor")
        .map_err(AppError::database)?;

        Ok(classes)
    }

    #[instrument(skip(db))]
    pub async fn list_registered(
        db: &SqlitePool,
        student_id: i64,
    ) -> Result<Vec<Class>, AppError> {
        let classes = sqlx::query_as::<_, Class>(
            r#"
            SELECT c.batch, c.class_name, c.instructor_id
            FROM classes c
            INNER JOIN student_classes sc ON sc.class_id = c.batch
            WHERE sc.student_id = ?
            ORDER BY c.batch
            "#,
        )
        .bind(student_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch registered classes")
        .map_err(AppError::database)?;

        Ok(classes)
    }

    #[instrument(skip(db))]
    pub async fn create_class(db: &SqlitePool, dto: CreateClassDto) -> Result<Class, AppError> {
        let class = sqlx::query_as::<_, Class>(
            r#"
            INSERT INTO classes (batch, class_name, instructor_id)
            VALUES (?, ?, ?)
            RETURNING batch, class_name, instructor_id
            "#,
        )
        .bind(dto.batch)
        .bind(&dto.class_name)
        .bind(dto.instructor_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::conflict(anyhow!(
                        "Class with batch {} already exists",
                        dto.batch
                    ));
                }
                if db_err.is_foreign_key_violation() {
                    return AppError::bad_request(anyhow!(
                        "Instructor {:?} does not exist",
                        dto.instructor_id
                    ));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(class)
    }

    /// Registers a student in a class. Returns `false` when the student was
    /// already registered.
    #[instrument(skip(db))]
    pub async fn enroll(db: &SqlitePool, student_id: i64, batch: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO student_classes (student_id, class_id)
            VALUES (?, ?)
            ON CONFLICT (student_id, class_id) DO NOTHING
            "#,
        )
        .bind(student_id)
        .bind(batch)
        .execute(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_foreign_key_violation() {
                    return AppError::not_found(anyhow!(
                        "Student {} or class {} does not exist",
                        student_id,
                        batch
                    ));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(result.rows_affected() == 1)
    }
}
