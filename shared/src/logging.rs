//! Shared logging utilities for consistent tracing across the server and client

use crate::types::ServiceId;
use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Build the per-service filter directive for `base_level`
pub fn filter_directive(service_id: &ServiceId, base_level: &str) -> String {
    match service_id {
        ServiceId::Server => {
            format!("kitchen_server={base_level},shared={base_level},tower_http=debug,axum={base_level}")
        }
        ServiceId::Client => {
            format!("kitchen_client={base_level},shared={base_level},reqwest=warn")
        }
    }
}

/// Initialize the stdout tracing subscriber with an optional log level
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let service_id = ServiceId::current();
    let base_level = log_level.unwrap_or("info");
    let env_filter = filter_directive(service_id, base_level);

    fmt()
        .with_env_filter(EnvFilter::new(&env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for service-aware info logging
#[macro_export]
macro_rules! process_info {
    ($service_id:expr, $($arg:tt)*) => {
        tracing::info!(
            process = %$service_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-aware warning logging
#[macro_export]
macro_rules! process_warn {
    ($service_id:expr, $($arg:tt)*) => {
        tracing::warn!(
            process = %$service_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-aware error logging
#[macro_export]
macro_rules! process_error {
    ($service_id:expr, $($arg:tt)*) => {
        tracing::error!(
            process = %$service_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-aware debug logging
#[macro_export]
macro_rules! process_debug {
    ($service_id:expr, $($arg:tt)*) => {
        tracing::debug!(
            process = %$service_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(service_id: &ServiceId, details: &str) {
    info!(
        process = %service_id,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(service_id: &ServiceId, reason: &str) {
    info!(
        process = %service_id,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(service_id: &ServiceId, context: &str, error: &dyn std::fmt::Display) {
    error!(
        process = %service_id,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(service_id: &ServiceId, message: &str) {
    info!(
        process = %service_id,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
