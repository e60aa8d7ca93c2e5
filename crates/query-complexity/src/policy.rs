use std::{collections::HashMap, num::NonZeroU64};

use crate::PolicyParseError;

/// Weight of a field the policy says nothing about.
pub const DEFAULT_FIELD_WEIGHT: u64 = 1;

type FieldWeights = HashMap<String, HashMap<String, NonZeroU64>>;

/// Operator assigned field weights, keyed by parent type then field name.
///
/// Built once per request and never mutated afterwards. Lookups never fail:
/// a missing entry is worth [`DEFAULT_FIELD_WEIGHT`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyDefinition {
    weights: FieldWeights,
}

/// Outcome of [`PolicyDefinition::load`].
///
/// `policy` is always usable. When the input was malformed it is empty and
/// `error` says why.
#[derive(Debug)]
pub struct LoadedPolicy {
    pub policy: PolicyDefinition,
    pub error: Option<PolicyParseError>,
}

// Sibling sections of the access control policy (depth limits and the like)
// are not our concern and are skipped.
#[derive(serde::Deserialize)]
struct AccessControlPolicy {
    #[serde(default)]
    complexity: Option<FieldWeights>,
}

impl PolicyDefinition {
    /// Loads the policy from the raw access control policy of a request.
    pub fn load(raw: Option<&str>) -> LoadedPolicy {
        let Some(raw) = raw else {
            return LoadedPolicy {
                policy: PolicyDefinition::default(),
                error: None,
            };
        };

        match Self::parse(raw) {
            Ok(policy) => LoadedPolicy { policy, error: None },
            Err(error) => LoadedPolicy {
                policy: PolicyDefinition::default(),
                error: Some(error),
            },
        }
    }

    /// Strict variant of [`PolicyDefinition::load`].
    pub fn parse(raw: &str) -> Result<Self, PolicyParseError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        if !value.is_object() {
            return Err(PolicyParseError::NotAnObject);
        }

        let policy: AccessControlPolicy = serde_json::from_value(value)?;

        Ok(Self {
            weights: policy.complexity.unwrap_or_default(),
        })
    }

    #[must_use]
    pub fn with_weight(mut self, parent_type: &str, field_name: &str, weight: NonZeroU64) -> Self {
        self.weights
            .entry(parent_type.to_string())
            .or_default()
            .insert(field_name.to_string(), weight);
        self
    }

    pub fn custom_weight(&self, parent_type: &str, field_name: &str) -> Option<NonZeroU64> {
        self.weights.get(parent_type)?.get(field_name).copied()
    }

    pub fn weight(&self, parent_type: &str, field_name: &str) -> u64 {
        match self.custom_weight(parent_type, field_name) {
            Some(weight) => weight.get(),
            None => {
                tracing::debug!(
                    parent_type,
                    field_name,
                    "No custom complexity was assigned, using the default"
                );
                DEFAULT_FIELD_WEIGHT
            }
        }
    }

    /// Number of weighted fields across all types.
    pub fn len(&self) -> usize {
        self.weights.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
