//! Session restoration and role guards.
//!
//! # Modules
//!
//! - [`auth`]: Session cookie handling and the [`auth::CurrentAccount`] extractor
//! - [`role`]: Role-specific extractors for student and faculty routes
//!
//! # Flow
//!
//! 1. Login sets an HttpOnly `session` cookie holding a signed token
//! 2. `CurrentAccount` verifies the token and reloads the account
//! 3. `StudentSession` / `FacultySession` narrow the account to one role
//! 4. Handler executes if all checks pass, otherwise the client is redirected

pub mod auth;
pub mod role;
