use axum::{
    Router,
    extract::{MatchedPath, Request},
    http::{StatusCode, header},
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use crate::middleware::auth::LOGIN_PATH;
use crate::modules::auth::model::Role;
use crate::modules::leave::model::LeaveStatus;

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if observability is enabled via OBSERVABILITY_ENABLED env var
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true) // Enabled by default
    })
}

/// Initialize Prometheus metrics exporter with upkeep task.
/// Returns None if observability is disabled.
pub fn init_metrics() -> anyhow::Result<Option<PrometheusHandle>> {
    if !is_observability_enabled() {
        return Ok(None);
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[
                0.001, 0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0,
            ],
        )?
        .install_recorder()?;

    // Spawn upkeep task to clean stale metrics
    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Ok(Some(handle))
}

/// Records request counts and latency per matched route.
///
/// Requests that fall outside the app routes (docs assets, 404s) share the
/// `unmatched` path label. Guarded pages that bounce an anonymous visitor to
/// the login page also count towards `session_redirects_total`.
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    gauge!("http_requests_active").increment(1.0);
    let response = next.run(req).await;
    gauge!("http_requests_active").decrement(1.0);

    let status = response.status();
    counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status.as_u16().to_string()).increment(1);
    histogram!("http_request_duration_seconds", "method" => method, "path" => path.clone())
        .record(start.elapsed().as_secs_f64());

    let to_login = status == StatusCode::SEE_OTHER
        && response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok())
            == Some(LOGIN_PATH);
    if to_login && path != LOGIN_PATH && path != "/logout" {
        counter!("session_redirects_total", "path" => path).increment(1);
    }

    response
}

/// Router for metrics server
pub fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

// Business metrics helpers

pub fn track_user_login_success(role: Role) {
    if !is_observability_enabled() {
        return;
    }
    counter!("user_logins_total", "role" => role.as_str(), "status" => "success").increment(1);
}

pub fn track_user_login_failure(reason: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("user_logins_total", "role" => "unknown", "status" => "failure", "reason" => reason).increment(1);
}

pub fn track_session_restore(success: bool) {
    if !is_observability_enabled() {
        return;
    }
    let status = if success { "valid" } else { "invalid" };
    counter!("session_restores_total", "status" => status).increment(1);
}

pub fn track_authorization_check(allowed: bool, role: Role) {
    if !is_observability_enabled() {
        return;
    }
    let status = if allowed { "allowed" } else { "denied" };
    counter!("authorization_checks_total", "role" => role.as_str(), "status" => status)
        .increment(1);
}

pub fn track_leave_submitted() {
    if !is_observability_enabled() {
        return;
    }
    counter!("leave_applications_submitted_total").increment(1);
}

pub fn track_leave_reviewed(status: LeaveStatus) {
    if !is_observability_enabled() {
        return;
    }
    counter!("leave_applications_reviewed_total", "status" => status.as_str()).increment(1);
}

pub fn track_attendance_query(found: bool) {
    if !is_observability_enabled() {
        return;
    }
    let result = if found { "found" } else { "empty" };
    counter!("attendance_queries_total", "result" => result).increment(1);
}
