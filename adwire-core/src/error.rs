//! Error types for adwire operations

use std::time::Duration;
use thiserror::Error;

/// Builder-level errors. Builders assume already-validated input, so the
/// only failure mode is a lookup miss on one of the code tables.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Unknown {kind} value: '{value}'")]
    UnknownEnumValue { kind: &'static str, value: String },
}

impl BuildError {
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        BuildError::UnknownEnumValue {
            kind,
            value: value.into(),
        }
    }
}

/// Remote API and client errors, classified into actionable categories.
///
/// Every variant carries enough structured context (customer id, resource
/// ids, underlying remote message) for an operator to act without digging
/// through stringified exceptions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Authentication failed for customer {customer_id}: {message}")]
    Authentication { customer_id: String, message: String },

    #[error("Quota exhausted for customer {customer_id}, retry after {retry_after:?}: {message}")]
    QuotaExhausted {
        customer_id: String,
        retry_after: Duration,
        message: String,
    },

    #[error("Resource not found: {resource_type} '{resource_id}': {message}")]
    ResourceNotFound {
        resource_type: String,
        resource_id: String,
        message: String,
    },

    #[error("Invalid request in field '{field}': {message}")]
    InvalidRequest { field: String, message: String },

    #[error("Request failed for customer {customer_id}: {message}")]
    Request { customer_id: String, message: String },

    #[error("Retries exhausted after {attempts} attempts: {last_cause}")]
    RetriesExhausted { attempts: u32, last_cause: String },
}

/// Master error type for all adwire errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdwireError {
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

impl AdwireError {
    /// Whether this error should never be retried by the caller either.
    /// Only `RetriesExhausted` wraps a transient cause; everything else is
    /// a hard failure until externally remediated.
    pub fn is_transient_exhaustion(&self) -> bool {
        matches!(self, AdwireError::Api(ApiError::RetriesExhausted { .. }))
    }
}

/// Result type alias for adwire operations.
pub type AdwireResult<T> = Result<T, AdwireError>;
