//! Utility modules for the Rollcall service.
//!
//! - [`errors`]: Application error type and its HTTP rendering
//! - [`jwt`]: Session token creation and verification
//! - [`password`]: Password hashing and verification

pub mod errors;
pub mod jwt;
pub mod password;
