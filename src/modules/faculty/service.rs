use anyhow::Context;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::modules::auth::model::{Role, User};
use crate::modules::auth::service::AuthService;
use crate::modules::faculty::model::{CreateFacultyDto, Faculty};
use crate::utils::errors::AppError;

pub struct FacultyService;

impl FacultyService {
    #[instrument(skip(db))]
    pub async fn get_by_user_id(db: &SqlitePool, user_id: i64) -> Result<Option<Faculty>, AppError> {
        let faculty = sqlx::query_as::<_, Faculty>(
            r#"
            SELECT id, user_id, first_name, last_name, taught_classes
            FROM faculty
            WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch faculty by user ID")
        .map_err(AppError::database)?;

        Ok(faculty)
    }

    /// Creates the `users` row and the faculty profile in one transaction.
    #[instrument(skip(db, dto), fields(username = %dto.username))]
    pub async fn create_faculty(
        db: &SqlitePool,
        dto: CreateFacultyDto,
    ) -> Result<(User, Faculty), AppError> {
        let mut tx = db.begin().await.context("Failed to begin transaction")?;

        let user = AuthService::insert_user(&mut tx, &dto.username, &dto.password, Role::Faculty)
            .await?;

        let faculty = sqlx::query_as::<_, Faculty>(
            r#"
            INSERT INTO faculty (user_id, first_name, last_name, taught_classes)
            VALUES (?, ?, ?, ?)
            RETURNING id, user_id, first_name, last_name, taught_classes
            "#,
        )
        .bind(user.id)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.taught_classes)
        .fetch_one(&mut *tx)
        .await
        .context("Failed to create faculty profile")
        .map_err(AppError::database)?;

        tx.commit().await.context("Failed to commit faculty")?;

        Ok((user, faculty))
    }
}
