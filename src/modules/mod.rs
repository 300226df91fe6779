pub mod attendance;
pub mod auth;
pub mod classes;
pub mod faculty;
pub mod leave;
pub mod students;
pub mod summaries;
