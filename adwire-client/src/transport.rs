//! Transport seam between the client and the remote ads API.
//!
//! `AdsClient` only knows this trait; the production implementation is the
//! REST transport in [`crate::rest`], and tests plug in mocks.

use std::fmt;

use adwire_core::MutateOperation;
use async_trait::async_trait;
use thiserror::Error;

/// One row returned by a search query. Rows are schema-free because the
/// shape depends entirely on the query's SELECT clause; callers pick out
/// the fields they asked for.
pub type SearchRow = serde_json::Value;

/// Per-operation outcome of a mutate call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutateResult {
    /// Resource name of the created or updated resource, when the remote
    /// side reports one.
    pub resource_name: Option<String>,
}

/// Response to a mutate call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutateResponse {
    /// One result per submitted operation, in submission order.
    pub results: Vec<MutateResult>,
    /// Populated when the call ran with partial failure enabled and some
    /// operations were rejected.
    pub partial_failure: Option<GoogleAdsFailure>,
}

/// A single sub-error inside a remote rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    /// Symbolic error code, e.g. `AUTHENTICATION_ERROR` or `QUOTA_ERROR`.
    pub code: String,
    pub message: String,
}

/// Structured rejection returned by the remote API. A single request can
/// fail with several sub-errors; classification looks at them in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoogleAdsFailure {
    pub errors: Vec<RemoteError>,
    pub request_id: Option<String>,
}

impl GoogleAdsFailure {
    /// Failure with a single synthetic sub-error, for cases where the
    /// response body could not be decoded into the structured form.
    pub fn raw(code: impl Into<String>, message: impl Into<String>) -> Self {
        GoogleAdsFailure {
            errors: vec![RemoteError {
                code: code.into(),
                message: message.into(),
            }],
            request_id: None,
        }
    }
}

impl fmt::Display for GoogleAdsFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.first() {
            Some(first) if self.errors.len() == 1 => {
                write!(f, "{}: {}", first.code, first.message)
            }
            Some(first) => write!(
                f,
                "{}: {} (+{} more)",
                first.code,
                first.message,
                self.errors.len() - 1
            ),
            None => write!(f, "remote failure with no error detail"),
        }
    }
}

/// Transport-level failure. The split drives retry policy: transient
/// failures are retried with backoff, remote rejections are classified
/// into an [`adwire_core::ApiError`] and surfaced immediately.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// Network faults and server-side unavailability. Safe to retry.
    #[error("transient transport failure: {message}")]
    Transient { message: String },

    /// The remote API accepted the connection and rejected the request.
    /// Never retried.
    #[error("remote rejection: {0}")]
    Remote(GoogleAdsFailure),
}

/// Async interface to the remote ads API.
#[async_trait]
pub trait AdsTransport: Send + Sync {
    /// Run a search query against one customer account.
    async fn search(
        &self,
        customer_id: &str,
        query: &str,
        page_size: i32,
    ) -> Result<Vec<SearchRow>, TransportError>;

    /// Submit a batch of mutate operations atomically (or with partial
    /// failure enabled) against one customer account.
    async fn mutate(
        &self,
        customer_id: &str,
        operations: &[MutateOperation],
        partial_failure: bool,
    ) -> Result<MutateResponse, TransportError>;
}
