/// The `[query_complexity]` section.
///
/// Every key is optional. Missing names fall back to the defaults of the
/// scoring crate.
#[derive(Debug, serde::Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct QueryComplexityConfig {
    pub enabled: bool,
    /// Request context property holding the access control policy.
    pub policy_key: Option<String>,
    /// Name under which a custom failure handler is registered.
    pub failure_handler: Option<String>,
}

impl Default for QueryComplexityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            policy_key: None,
            failure_handler: None,
        }
    }
}
