use std::env;

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub secret: String,
    /// Session lifetime in seconds.
    pub expiry: i64,
    pub secure_cookie: bool,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("SESSION_SECRET")
                .unwrap_or_else(|_| "rollcall-dev-secret-change-in-production".to_string()),
            expiry: env::var("SESSION_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(86400), // 1 day
            secure_cookie: env::var("SESSION_COOKIE_SECURE")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}
