//! Complexity scoring for GraphQL style queries.
//!
//! A gateway computes the cost of an incoming query before doing any backend
//! work, so that deeply nested or heavily paginated queries can be rejected
//! early. Each field scores
//!
//! ```text
//! argument_weight * (field_weight + child_complexity)
//! ```
//!
//! where `field_weight` comes from the operator's access control policy and
//! `argument_weight` from the integer literals passed to the field. Comparing
//! the total against a limit is left to the caller.

mod arguments;
mod calculator;
mod context;
mod error;
mod policy;
mod settings;
mod violation;
pub mod walk;

pub use arguments::{argument_weight, Argument, ArgumentValue};
pub use calculator::{FieldComplexityCalculator, QueryField};
pub use context::{ErrorDetails, Fault, RequestContext};
pub use error::PolicyParseError;
pub use policy::{LoadedPolicy, PolicyDefinition, DEFAULT_FIELD_WEIGHT};
pub use settings::{ComplexitySettings, DEFAULT_POLICY_KEY};
pub use violation::{
    Disposition, FailureHandler, FailureHandlers, Handled, Violation, ViolationKind, ViolationReporter,
    DEFAULT_FAILURE_HANDLER, GRAPHQL_INVALID_QUERY,
};
pub use walk::{FieldNode, QueryNode};
