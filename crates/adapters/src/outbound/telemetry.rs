//! Telemetry adapters - Observability implementations.

use application::ports::outbound::TelemetryPort;

/// Tracing-based telemetry adapter.
#[derive(Default)]
pub struct TracingTelemetry;

impl TracingTelemetry {
    /// Create a new [`TracingTelemetry`].
    pub fn new() -> Self {
        Self
    }
}

impl TelemetryPort for TracingTelemetry {
    fn record_account_created(&self, login: &str) {
        tracing::info!(login = login, "account created");
    }

    fn record_account_rejected(&self, reason: &str) {
        tracing::info!(reason = reason, "account creation rejected");
    }

    fn record_login_taken(&self, login: &str) {
        tracing::debug!(login = login, "login already taken");
    }
}
