//! Configuration modules for the Rollcall service.
//!
//! Each submodule reads one concern from environment variables, falling
//! back to a development default when a variable is unset. A `.env` file is
//! loaded by the binaries before any of these run.
//!
//! # Modules
//!
//! - [`cors`]: Front-end origins allowed to call the view endpoints
//! - [`database`]: SQLite pool initialization and migrations
//! - [`server`]: Listener addresses for the app and metrics servers
//! - [`session`]: Session token secret, lifetime and cookie flags

pub mod cors;
pub mod database;
pub mod server;
pub mod session;
