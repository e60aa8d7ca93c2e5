use query_complexity_config::QueryComplexityConfig;

use crate::violation::{ViolationReporter, DEFAULT_FAILURE_HANDLER};

/// Request context property holding the access control policy by default.
pub const DEFAULT_POLICY_KEY: &str = "GRAPHQL_ACCESS_CONTROL_POLICY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexitySettings {
    pub enabled: bool,
    pub policy_key: String,
    pub failure_handler: String,
}

impl Default for ComplexitySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            policy_key: DEFAULT_POLICY_KEY.to_string(),
            failure_handler: DEFAULT_FAILURE_HANDLER.to_string(),
        }
    }
}

impl ComplexitySettings {
    pub fn reporter(&self) -> ViolationReporter {
        ViolationReporter::new(self.failure_handler.clone())
    }
}

impl From<&QueryComplexityConfig> for ComplexitySettings {
    fn from(config: &QueryComplexityConfig) -> Self {
        let name_or_default = |value: Option<&str>, key: &str, default: &str| match value {
            Some(value) if value.trim().is_empty() => {
                tracing::warn!("query_complexity.{key} is blank. Assuming \"{default}\"");
                default.to_string()
            }
            Some(value) => value.to_string(),
            None => default.to_string(),
        };

        ComplexitySettings {
            enabled: config.enabled,
            policy_key: name_or_default(config.policy_key.as_deref(), "policy_key", DEFAULT_POLICY_KEY),
            failure_handler: name_or_default(
                config.failure_handler.as_deref(),
                "failure_handler",
                DEFAULT_FAILURE_HANDLER,
            ),
        }
    }
}
