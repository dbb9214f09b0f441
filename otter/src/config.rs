use serde::Deserialize;

/// Runtime settings of the dashboard.
///
/// Every field has a default, so a partial config file deserializes:
///
/// ```
/// let config: otter::OtterConfig = serde_json::from_str(r#"{"per_page": 25}"#).unwrap();
/// assert_eq!(config.per_page, 25);
/// assert_eq!(config.environment, "production");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OtterConfig {
    /// Prefix resources are registered under
    pub namespace: String,
    /// Application environment; the gate only opens by default in `local`
    pub environment: String,
    /// Default page size of resource listings
    pub per_page: u64,
}

impl Default for OtterConfig {
    fn default() -> Self {
        Self {
            namespace: "App\\Otter\\".to_string(),
            environment: "production".to_string(),
            per_page: 10,
        }
    }
}

impl OtterConfig {
    /// Defaults overridden by `OTTER_NAMESPACE`, `APP_ENV` and
    /// `OTTER_PER_PAGE`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup. Values that are empty, or a page
    /// size that is not a positive integer, are ignored.
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(namespace) = lookup("OTTER_NAMESPACE") {
            self.namespace = namespace;
        }
        if let Some(environment) = lookup("APP_ENV") {
            self.environment = environment;
        }
        if let Some(raw) = lookup("OTTER_PER_PAGE") {
            match raw.trim().parse::<u64>() {
                Ok(per_page) if per_page > 0 => self.per_page = per_page,
                _ => tracing::warn!(value = %raw, "ignoring invalid OTTER_PER_PAGE"),
            }
        }
        self
    }

    #[must_use]
    pub fn is_local(&self) -> bool {
        self.environment == "local"
    }
}
