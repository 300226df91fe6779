//! Session token creation and verification.
//!
//! A session is an HS256-signed JWT carried in the `session` cookie. The
//! token only names the user and the role they logged in with; the account
//! itself is reloaded from the database on every request.

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::session::SessionConfig;
use crate::modules::auth::model::{Claims, Role};
use crate::utils::errors::AppError;

pub fn create_session_token(
    user_id: i64,
    role: Role,
    session_config: &SessionConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = (now + session_config.expiry).max(0);

    let claims = Claims {
        sub: user_id.to_string(),
        role,
        exp: exp as usize,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(session_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create session token: {}", e)))
}

pub fn verify_session_token(
    token: &str,
    session_config: &SessionConfig,
) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(session_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(anyhow!("Invalid or expired session")))
}
