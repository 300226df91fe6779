//! # Rollcall
//!
//! A school attendance tracker built with Rust, Axum, and SQLite. Students
//! look up their own attendance and apply for leave; faculty see the classes
//! they instruct and resolve pending leave applications.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── bin/cli.rs        # rollcall-cli: accounts, classes, marks, summaries
//! ├── cli/              # Operations behind the CLI subcommands
//! ├── config/           # Configuration modules (database, session, CORS, server)
//! ├── middleware/       # Session cookie and role extractors
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Login, logout, account restore
//! │   ├── students/    # Student dashboard
//! │   ├── faculty/     # Faculty dashboard
//! │   ├── classes/     # Classes, enrollment, public subject list
//! │   ├── attendance/  # Attendance marks
//! │   ├── leave/       # Leave submission and review
//! │   └── summaries/   # Monthly attendance percentages
//! └── utils/           # Shared utilities
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic
//! - `model.rs`: Data models, forms, views
//! - `router.rs`: Axum router configuration
//!
//! `attendance` has no routes of its own and omits the last two.
//!
//! ## Accounts
//!
//! Every user is exactly one of:
//!
//! | Role | Profile | Landing page |
//! |------|---------|--------------|
//! | Student | `students` row | `/student_dashboard` |
//! | Faculty | `faculty` row | `/faculty/dashboard` |
//!
//! Accounts are created with `rollcall-cli`; there is no registration route.
//!
//! ## Sessions
//!
//! A successful login sets an HttpOnly `session` cookie carrying a signed
//! token with the user ID and role. Guarded routes reload the account from
//! the database on every request and redirect to `/login` when the cookie is
//! missing, expired, or refers to a user that no longer exists.
//!
//! ## Quick Start
//!
//! ```bash
//! SESSION_SECRET=change-me
//! cargo run --bin rollcall-cli -- create-faculty
//! cargo run --bin rollcall
//! ```
//!
//! API documentation is served at `http://localhost:3000/scalar`.

pub mod cli;
pub mod config;
pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
