use std::{collections::HashMap, sync::Arc};

use http::StatusCode;

use crate::violation::{FailureHandler, FailureHandlers};

/// Error properties set on a rejected request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetails {
    pub code: u32,
    pub message: String,
    pub description: String,
}

/// Response sent when no failure handler took care of a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fault {
    pub status: StatusCode,
}

/// State shared by everything processing a single request.
#[derive(Debug, Default)]
pub struct RequestContext {
    properties: HashMap<String, String>,
    failure_handlers: Arc<FailureHandlers>,
    error: Option<ErrorDetails>,
    fault: Option<Fault>,
    halted: bool,
}

impl RequestContext {
    pub fn new(failure_handlers: Arc<FailureHandlers>) -> Self {
        Self {
            failure_handlers,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_property(key, value);
        self
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn failure_handler(&self, name: &str) -> Option<Arc<dyn FailureHandler>> {
        self.failure_handlers.get(name)
    }

    pub fn set_error(&mut self, error: ErrorDetails) {
        self.error = Some(error);
    }

    pub fn error(&self) -> Option<&ErrorDetails> {
        self.error.as_ref()
    }

    /// Stops normal processing of the request.
    pub fn halt(&mut self) {
        self.halted = true;
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Responds with a bodyless error status and halts.
    pub fn send_fault(&mut self, status: StatusCode) {
        self.fault = Some(Fault { status });
        self.halt();
    }

    pub fn fault(&self) -> Option<Fault> {
        self.fault
    }
}
