use anyhow::{Context, anyhow};
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{instrument, warn};

use crate::modules::auth::model::{Account, LoginForm, Role, User, UserWithPassword};
use crate::modules::faculty::service::FacultyService;
use crate::modules::students::service::StudentService;
use crate::utils::errors::AppError;
use crate::utils::password::{hash_password, verify_password};

pub struct AuthService;

impl AuthService {
    /// Checks a username/password pair.
    ///
    /// Returns `Ok(None)` for an unknown username and for a wrong password
    /// alike.
    #[instrument(skip(db, dto), fields(username = %dto.username))]
    pub async fn authenticate(db: &SqlitePool, dto: &LoginForm) -> Result<Option<User>, AppError> {
        let Some(user) = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, username, password, role FROM users WHERE username = ?",
        )
        .bind(&dto.username)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user by username")
        .map_err(AppError::database)?
        else {
            return Ok(None);
        };

        // A stored value that is not a bcrypt hash can never match.
        let is_valid = verify_password(&dto.password, &user.password).unwrap_or_else(|e| {
            warn!(user_id = user.id, error = ?e.error, "Stored password is not a valid hash");
            false
        });

        Ok(is_valid.then(|| User::from(user)))
    }

    #[instrument(skip(db))]
    pub async fn get_user(db: &SqlitePool, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT id, username, role FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(db)
            .await
            .context("Failed to fetch user by ID")
            .map_err(AppError::database)?;

        Ok(user)
    }

    /// Restores a user and the profile its role implies.
    ///
    /// `None` when the user does not exist or has no profile row for its
    /// role.
    #[instrument(skip(db))]
    pub async fn load_account(db: &SqlitePool, user_id: i64) -> Result<Option<Account>, AppError> {
        let Some(user) = Self::get_user(db, user_id).await? else {
            return Ok(None);
        };

        let account = match user.role {
            Role::Student => StudentService::get_by_user_id(db, user.id)
                .await?
                .map(|student| Account::Student { user, student }),
            Role::Faculty => FacultyService::get_by_user_id(db, user.id)
                .await?
                .map(|faculty| Account::Faculty { user, faculty }),
        };

        Ok(account)
    }

    /// Inserts a `users` row with a bcrypt-hashed password inside an open
    /// transaction.
    #[instrument(skip(tx, password))]
    pub async fn insert_user(
        tx: &mut Transaction<'_, Sqlite>,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<User, AppError> {
        let hashed_password = hash_password(password)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password, role)
            VALUES (?, ?, ?)
            RETURNING id, username, role
            "#,
        )
        .bind(username)
        .bind(&hashed_password)
        .bind(role)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::conflict(anyhow!("Username {} is already taken", username));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(user)
    }
}
