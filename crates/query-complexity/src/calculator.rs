use crate::{
    arguments::{argument_weight, Argument},
    context::RequestContext,
    policy::{LoadedPolicy, PolicyDefinition},
    settings::ComplexitySettings,
    violation::Violation,
};

/// A field as handed over by the traversal engine, once its children are scored.
#[derive(Debug, Clone, Copy)]
pub struct QueryField<'a> {
    pub field_name: &'a str,
    pub parent_type: &'a str,
    pub arguments: &'a [Argument],
    pub child_complexity: u64,
}

/// Scores one field at a time, children before parents.
#[derive(Debug, Clone, Default)]
pub struct FieldComplexityCalculator {
    policy: PolicyDefinition,
}

impl FieldComplexityCalculator {
    pub fn new(policy: PolicyDefinition) -> Self {
        Self { policy }
    }

    /// Builds the calculator from the policy attached to the request.
    ///
    /// A malformed policy is reported as a violation, which halts the request.
    /// The returned calculator then uses the empty policy.
    pub fn from_request(ctx: &mut RequestContext, settings: &ComplexitySettings) -> Self {
        let LoadedPolicy { policy, error } = PolicyDefinition::load(ctx.property(&settings.policy_key));

        if let Some(error) = error {
            tracing::warn!(policy_key = %settings.policy_key, %error, "Could not parse the access control policy");
            settings
                .reporter()
                .report_violation(ctx, &Violation::policy_parse(&error));
        }

        Self::new(policy)
    }

    pub fn policy(&self) -> &PolicyDefinition {
        &self.policy
    }

    /// `argument_weight * (field_weight + child_complexity)`
    ///
    /// The argument weight multiplies rather than adds so that nested
    /// paginated lists compound: N items each fetching M sub-items cost N×M.
    pub fn score(&self, field_name: &str, parent_type: &str, arguments: &[Argument], child_complexity: u64) -> u64 {
        let argument_weight = argument_weight(arguments);
        let field_weight = self.policy.weight(parent_type, field_name);

        argument_weight.saturating_mul(field_weight.saturating_add(child_complexity))
    }

    pub fn score_field(&self, field: &QueryField<'_>) -> u64 {
        self.score(
            field.field_name,
            field.parent_type,
            field.arguments,
            field.child_complexity,
        )
    }
}
