//! Administrative operations behind the `rollcall-cli` binary.
//!
//! Accounts, classes, enrollments and attendance marks have no web form;
//! they are created here. Each function validates its input before touching
//! the store.

use anyhow::anyhow;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use validator::Validate;

use crate::modules::attendance::model::{AttendanceRecord, AttendanceStatus};
use crate::modules::attendance::service::AttendanceService;
use crate::modules::classes::model::{Class, CreateClassDto};
use crate::modules::classes::service::ClassService;
use crate::modules::faculty::model::{CreateFacultyDto, Faculty};
use crate::modules::faculty::service::FacultyService;
use crate::modules::students::model::{CreateStudentDto, Student};
use crate::modules::students::service::StudentService;
use crate::modules::summaries::model::Summary;
use crate::modules::summaries::service::SummaryService;

fn validate<T: Validate>(dto: &T) -> anyhow::Result<()> {
    dto.validate()
        .map_err(|e| anyhow!("Validation failed: {}", e))
}

pub async fn create_student(db: &SqlitePool, dto: CreateStudentDto) -> anyhow::Result<Student> {
    validate(&dto)?;
    let (_, student) = StudentService::create_student(db, dto)
        .await
        .map_err(|e| e.error)?;
    Ok(student)
}

pub async fn create_faculty(db: &SqlitePool, dto: CreateFacultyDto) -> anyhow::Result<Faculty> {
    validate(&dto)?;
    let (_, faculty) = FacultyService::create_faculty(db, dto)
        .await
        .map_err(|e| e.error)?;
    Ok(faculty)
}

pub async fn create_class(db: &SqlitePool, dto: CreateClassDto) -> anyhow::Result<Class> {
    validate(&dto)?;
    ClassService::create_class(db, dto).await.map_err(|e| e.error)
}

/// Returns `false` when the student was already registered in the class.
pub async fn enroll(db: &SqlitePool, student_id: i64, batch: i64) -> anyhow::Result<bool> {
    ClassService::enroll(db, student_id, batch)
        .await
        .map_err(|e| e.error)
}

pub async fn mark_attendance(
    db: &SqlitePool,
    student_id: i64,
    class_id: i64,
    date: NaiveDate,
    status: AttendanceStatus,
) -> anyhow::Result<AttendanceRecord> {
    AttendanceService::record(db, student_id, class_id, date, status)
        .await
        .map_err(|e| e.error)
}

pub async fn summarize(db: &SqlitePool, month: u32, year: i32) -> anyhow::Result<Vec<Summary>> {
    SummaryService::summarize_month(db, month, year)
        .await
        .map_err(|e| e.error)
}
