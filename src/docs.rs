use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::attendance::model::{AttendanceRecord, AttendanceStatus};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginForm, LoginPage, Role, User};
use crate::modules::classes::model::{Class, ClassOption, SubjectsPage};
use crate::modules::faculty::model::{Faculty, FacultyDashboard};
use crate::modules::leave::model::{
    ApplyLeavePage, FacultyLeaveApplications, LeaveApplication, LeaveApplicationWithStudent,
    LeaveForm, LeaveStatus,
};
use crate::modules::students::model::{ClassSelectionForm, Student, StudentDashboard};
use crate::modules::summaries::model::{Summary, SummaryPage};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_page,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::logout,
        crate::modules::students::controller::student_dashboard,
        crate::modules::students::controller::select_class,
        crate::modules::faculty::controller::faculty_dashboard,
        crate::modules::leave::controller::apply_leave_page,
        crate::modules::leave::controller::apply_leave,
        crate::modules::leave::controller::faculty_leave_applications,
        crate::modules::leave::controller::approve_leave,
        crate::modules::leave::controller::reject_leave,
        crate::modules::classes::controller::subjects,
        crate::modules::summaries::controller::student_summary,
    ),
    components(
        schemas(
            Role,
            User,
            LoginForm,
            LoginPage,
            ErrorResponse,
            Student,
            ClassSelectionForm,
            StudentDashboard,
            Faculty,
            FacultyDashboard,
            Class,
            ClassOption,
            SubjectsPage,
            AttendanceStatus,
            AttendanceRecord,
            LeaveStatus,
            LeaveForm,
            LeaveApplication,
            LeaveApplicationWithStudent,
            ApplyLeavePage,
            FacultyLeaveApplications,
            Summary,
            SummaryPage,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login, logout and the session cookie"),
        (name = "Students", description = "Student dashboard and attendance lookup"),
        (name = "Faculty", description = "Faculty dashboard"),
        (name = "Leave", description = "Leave submission and review"),
        (name = "Classes", description = "Public class listing"),
        (name = "Summaries", description = "Monthly attendance summaries")
    ),
    info(
        title = "Rollcall",
        version = "0.1.0",
        description = "School attendance tracking with student and faculty views, built with Rust, Axum, and SQLite.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("session"))),
            )
        }
    }
}
