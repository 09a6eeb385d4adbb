//! Interface for observability.

/// Port for telemetry/observability operations.
pub trait TelemetryPort: Send + Sync {
    /// Record a new account creation.
    fn record_account_created(&self, login: &str);

    /// Record a creation request refused on validation.
    fn record_account_rejected(&self, reason: &str);

    /// Record a login proposal already held by another account.
    fn record_login_taken(&self, login: &str);
}
