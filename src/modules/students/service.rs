use anyhow::Context;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::metrics::track_attendance_query;
use crate::modules::attendance::service::AttendanceService;
use crate::modules::auth::model::{Role, User};
use crate::modules::auth::service::AuthService;
use crate::modules::classes::model::ClassOption;
use crate::modules::classes::service::ClassService;
use crate::modules::students::model::{
    CreateStudentDto, NO_ATTENDANCE_WARNING, Student, StudentDashboard,
};
use crate::utils::errors::AppError;

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db))]
    pub async fn get_by_user_id(db: &SqlitePool, user_id: i64) -> Result<Option<Student>, AppError> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, user_id, first_name, last_name FROM students WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch student by user ID")
        .map_err(AppError::database)?;

        Ok(student)
    }

    /// Creates the `users` row and the student profile in one transaction.
    #[instrument(skip(db, dto), fields(username = %dto.username))]
    pub async fn create_student(
        db: &SqlitePool,
        dto: CreateStudentDto,
    ) -> Result<(User, Student), AppError> {
        let mut tx = db.begin().await.context("Failed to begin transaction")?;

        let user = AuthService::insert_user(&mut tx, &dto.username, &dto.password, Role::Student)
            .await?;

        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (user_id, first_name, last_name)
            VALUES (?, ?, ?)
            RETURNING id, user_id, first_name, last_name
            "#,
        )
        .bind(user.id)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .fetch_one(&mut *tx)
        .await
        .context("Failed to create student profile")
        .map_err(AppError::database)?;

        tx.commit().await.context("Failed to commit student")?;

        Ok((user, student))
    }

    /// Builds the plain dashboard for `student`: every class plus the
    /// classes they are registered in.
    #[instrument(skip(db, student), fields(student_id = student.id))]
    pub async fn dashboard(db: &SqlitePool, student: Student) -> Result<StudentDashboard, AppError> {
        let class_options = ClassService::list_all(db)
            .await?
            .into_iter()
            .map(ClassOption::from)
            .collect();
        let registered_classes = ClassService::list_registered(db, student.id).await?;

        Ok(StudentDashboard {
            student,
            class_options,
            registered_classes,
            selected_class: None,
            attendance_data: Vec::new(),
            warning: None,
        })
    }

    /// Builds the dashboard with the student's marks in `subject`.
    ///
    /// A missing subject, or one with no marks, yields the warning instead.
    #[instrument(skip(db, student), fields(student_id = student.id))]
    pub async fn select_class(
        db: &SqlitePool,
        student: Student,
        subject: Option<i64>,
    ) -> Result<StudentDashboard, AppError> {
        let mut dashboard = Self::dashboard(db, student).await?;

        let attendance_data = match subject {
            Some(class_id) => {
                AttendanceService::for_student_in_class(db, dashboard.student.id, class_id).await?
            }
            None => Vec::new(),
        };
        track_attendance_query(!attendance_data.is_empty());

        if attendance_data.is_empty() {
            dashboard.warning = Some(NO_ATTENDANCE_WARNING.to_string());
        } else {
            dashboard.selected_class = subject;
            dashboard.attendance_data = attendance_data;
        }

        Ok(dashboard)
    }
}
