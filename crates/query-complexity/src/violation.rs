//! Rejection of requests whose complexity could not or should not be served.
//!
//! Every violation carries the same error code. Operators may register a
//! failure handler under a well-known name to shape the rejection; without
//! one, or when the handler declines, the request gets a bare 400.

use std::{collections::HashMap, fmt, sync::Arc};

use http::StatusCode;

use crate::{
    context::{ErrorDetails, RequestContext},
    PolicyParseError,
};

/// Error code shared by every complexity related rejection.
pub const GRAPHQL_INVALID_QUERY: u32 = 900422;

/// Name the failure handler is looked up by unless configured otherwise.
pub const DEFAULT_FAILURE_HANDLER: &str = "_graphql_failure_handler_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Yes,
    No,
}

/// Custom rejection logic, invoked with the context of the rejected request.
///
/// The error properties are already set on the context when it runs.
pub trait FailureHandler: Send + Sync {
    fn handle(&self, ctx: &mut RequestContext) -> Handled;
}

impl<F> FailureHandler for F
where
    F: Fn(&mut RequestContext) -> Handled + Send + Sync,
{
    fn handle(&self, ctx: &mut RequestContext) -> Handled {
        self(ctx)
    }
}

/// Failure handlers by name.
#[derive(Default)]
pub struct FailureHandlers {
    handlers: HashMap<String, Arc<dyn FailureHandler>>,
}

impl FailureHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, handler: impl FailureHandler + 'static) -> Self {
        self.register(name, handler);
        self
    }

    pub fn register(&mut self, name: impl Into<String>, handler: impl FailureHandler + 'static) {
        self.handlers.insert(name.into(), Arc::new(handler));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn FailureHandler>> {
        self.handlers.get(name).cloned()
    }
}

impl fmt::Debug for FailureHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    PolicyParse,
    ThresholdExceeded { actual: u64, max: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Violation {
    pub code: u32,
    pub kind: ViolationKind,
    pub message: String,
    pub description: String,
}

impl Violation {
    pub fn policy_parse(error: &PolicyParseError) -> Self {
        Self {
            code: GRAPHQL_INVALID_QUERY,
            kind: ViolationKind::PolicyParse,
            message: "Policy definition parsing failed.".to_string(),
            description: error.to_string(),
        }
    }

    /// For callers comparing the computed complexity against their limit.
    pub fn threshold_exceeded(actual: u64, max: u64) -> Self {
        Self {
            code: GRAPHQL_INVALID_QUERY,
            kind: ViolationKind::ThresholdExceeded { actual, max },
            message: "Query is too complex.".to_string(),
            description: format!("Query complexity of {actual} exceeds the maximum allowed complexity of {max}"),
        }
    }
}

/// What became of a reported violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The failure handler produced the response.
    Handled,
    /// The default 400 fault was sent.
    Faulted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationReporter {
    failure_handler: String,
}

impl Default for ViolationReporter {
    fn default() -> Self {
        Self::new(DEFAULT_FAILURE_HANDLER)
    }
}

impl ViolationReporter {
    pub fn new(failure_handler: impl Into<String>) -> Self {
        Self {
            failure_handler: failure_handler.into(),
        }
    }

    pub fn failure_handler(&self) -> &str {
        &self.failure_handler
    }

    /// Marks the request as rejected and produces the rejection.
    ///
    /// Normal processing of the request stops in every case.
    pub fn report(&self, ctx: &mut RequestContext, code: u32, message: &str, description: &str) -> Disposition {
        ctx.set_error(ErrorDetails {
            code,
            message: message.to_string(),
            description: description.to_string(),
        });
        ctx.halt();

        match ctx.failure_handler(&self.failure_handler) {
            Some(handler) => {
                if handler.handle(ctx) == Handled::Yes {
                    tracing::debug!(handler = %self.failure_handler, code, "Violation handled by failure handler");
                    return Disposition::Handled;
                }
                tracing::debug!(handler = %self.failure_handler, "Failure handler declined the violation");
            }
            None => {
                tracing::debug!(handler = %self.failure_handler, "No failure handler registered");
            }
        }

        ctx.send_fault(StatusCode::BAD_REQUEST);
        Disposition::Faulted
    }

    pub fn report_violation(&self, ctx: &mut RequestContext, violation: &Violation) -> Disposition {
        self.report(ctx, violation.code, &violation.message, &violation.description)
    }
}
