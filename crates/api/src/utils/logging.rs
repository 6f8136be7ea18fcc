use std::time::Duration;

use flexprice_infra::{ApiError, ApiErrorCategory};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` selects levels (default `info`); `FLEXPRICE_LOG_FORMAT=json`
/// switches to one JSON object per line. Calling this twice is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("FLEXPRICE_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let result = if json {
        fmt().json().with_env_filter(filter).with_writer(std::io::stderr).try_init()
    } else {
        fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init()
    };
    if result.is_err() {
        tracing::debug!("global subscriber already installed");
    }
}

/// Log the outcome of a dashboard command with structured fields.
///
/// `command` must be a stable identifier (e.g. `"dashboard::recent_events"`)
/// without customer data in it.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error: Option<&ApiError>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(err) => {
            warn!(command, duration_ms, error_type = error_label(err), "command_execution_failure")
        }
    }
}

/// Stable label for an [`ApiError`], suitable for log fields.
#[inline]
pub fn error_label(error: &ApiError) -> &'static str {
    match error.category() {
        ApiErrorCategory::Unauthenticated => "unauthenticated",
        ApiErrorCategory::Forbidden => "forbidden",
        ApiErrorCategory::NotFound => "not_found",
        ApiErrorCategory::Server => "server",
        ApiErrorCategory::Status => "status",
        ApiErrorCategory::NoResponse => "no_response",
        ApiErrorCategory::RequestSetup => "request_setup",
        ApiErrorCategory::InvalidResponse => "invalid_response",
        ApiErrorCategory::Unsupported => "unsupported",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_category() {
        assert_eq!(error_label(&ApiError::NoResponse("refused".into())), "no_response");
        assert_eq!(error_label(&ApiError::Unsupported("x".into())), "unsupported");
        assert_eq!(error_label(&ApiError::RequestSetup("bad header".into())), "request_setup");
    }

    #[test]
    fn init_is_idempotent() {
        init_logging();
        init_logging();
    }
}
