use serde::{Deserialize, Serialize};
use std::fmt;

/// Single structured error shape used across the core and exposed to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
    pub retryable: bool,
}

impl AppError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            retryable: false,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    /// Unparseable timestamp input. Never retryable; the caller must fix the value.
    pub fn invalid_date(field: &str, value: &str) -> Self {
        Self::new("INVALID_DATE", format!("Unparseable timestamp for {field}"))
            .with_details(format!("value={value}"))
    }

    /// Priority value outside the five known tiers.
    pub fn unknown_priority(value: impl fmt::Display) -> Self {
        Self::new("UNKNOWN_PRIORITY", "Unrecognized priority tier")
            .with_details(format!("value={value}"))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
