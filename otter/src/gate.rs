use axum::extract::Request;
use std::fmt;
use std::sync::Arc;

type AuthCallback = Arc<dyn Fn(&Request) -> bool + Send + Sync>;

/// Decides who may use the dashboard.
///
/// Without a callback only the `local` environment is let in. A callback
/// replaces that rule entirely:
///
/// ```rust,ignore
/// let gate = DashboardGate::new("production").auth(|request| {
///     request.headers().get("x-admin-token").is_some_and(|token| token == "secret")
/// });
/// ```
#[derive(Clone)]
pub struct DashboardGate {
    environment: String,
    callback: Option<AuthCallback>,
}

impl DashboardGate {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            callback: None,
        }
    }

    /// Install the callback that answers every access check
    #[must_use]
    pub fn auth<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Request) -> bool + Send + Sync + 'static,
    {
        self.callback = Some(Arc::new(callback));
        self
    }

    #[must_use]
    pub fn check(&self, request: &Request) -> bool {
        match &self.callback {
            Some(callback) => callback(request),
            None => self.environment == "local",
        }
    }
}

impl fmt::Debug for DashboardGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardGate")
            .field("environment", &self.environment)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}
