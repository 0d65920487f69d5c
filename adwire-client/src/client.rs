//! Retrying query/mutate client.
//!
//! Wraps an [`AdsTransport`] with the shared execution policy: query
//! guarding, retry with exponential backoff on transient failures, and
//! classification of remote rejections. Mutations are not idempotent, so
//! a retried mutate can apply twice if the first attempt succeeded
//! remotely but the response was lost; callers who need exactly-once must
//! dedupe at a higher level.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use adwire_core::{AdwireResult, ApiError, MutateOperation};

use crate::classify::classify_remote_failure;
use crate::transport::{AdsTransport, MutateResponse, SearchRow, TransportError};

/// Retry policy knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Additional attempts after the first, for transient failures only.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each subsequent retry.
    pub base_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

/// Client for the remote ads API.
pub struct AdsClient {
    transport: Arc<dyn AdsTransport>,
    config: ClientConfig,
}

impl AdsClient {
    pub fn new(transport: Arc<dyn AdsTransport>) -> Self {
        Self::with_config(transport, ClientConfig::default())
    }

    pub fn with_config(transport: Arc<dyn AdsTransport>, config: ClientConfig) -> Self {
        AdsClient { transport, config }
    }

    /// Run a read-only search query.
    ///
    /// The query must start with `SELECT` (case-insensitive, leading
    /// whitespace ignored); anything else is rejected before the
    /// transport is touched. The guard checks only the first token, it
    /// is not a query parser.
    pub async fn query(
        &self,
        customer_id: &str,
        query: &str,
        page_size: i32,
    ) -> AdwireResult<Vec<SearchRow>> {
        let trimmed = query.trim();
        let first_token = trimmed.split_whitespace().next().unwrap_or_default();
        if !first_token.eq_ignore_ascii_case("SELECT") {
            return Err(ApiError::InvalidRequest {
                field: "query".to_string(),
                message: "only SELECT queries are allowed".to_string(),
            }
            .into());
        }

        let transport = Arc::clone(&self.transport);
        let customer_id_owned = customer_id.to_string();
        let query_owned = trimmed.to_string();
        self.execute_with_retry(customer_id, move || {
            let transport = Arc::clone(&transport);
            let customer_id = customer_id_owned.clone();
            let query = query_owned.clone();
            async move { transport.search(&customer_id, &query, page_size).await }
        })
        .await
    }

    /// Submit a batch of mutate operations in submission order.
    pub async fn mutate(
        &self,
        customer_id: &str,
        operations: &[MutateOperation],
        partial_failure: bool,
    ) -> AdwireResult<MutateResponse> {
        let transport = Arc::clone(&self.transport);
        let customer_id_owned = customer_id.to_string();
        let operations: Arc<[MutateOperation]> = operations.to_vec().into();
        self.execute_with_retry(customer_id, move || {
            let transport = Arc::clone(&transport);
            let customer_id = customer_id_owned.clone();
            let operations = Arc::clone(&operations);
            async move {
                transport
                    .mutate(&customer_id, &operations, partial_failure)
                    .await
            }
        })
        .await
    }

    /// Retry loop shared by query and mutate.
    ///
    /// Transient failures back off with `base_delay * 2^attempt` and try
    /// again up to `max_retries` times. Remote rejections are classified
    /// and returned on the spot; retrying a request the API has already
    /// rejected cannot help.
    async fn execute_with_retry<T, F, Fut>(&self, customer_id: &str, mut call: F) -> AdwireResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, TransportError>>,
    {
        let mut last_cause = String::new();
        for attempt in 0..=self.config.max_retries {
            match call().await {
                Ok(value) => return Ok(value),
                Err(TransportError::Remote(failure)) => {
                    return Err(classify_remote_failure(customer_id, &failure).into());
                }
                Err(TransportError::Transient { message }) => {
                    last_cause = message;
                    if attempt < self.config.max_retries {
                        // saturates instead of overflowing for very large
                        // retry budgets
                        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
                        let delay = self.config.base_delay.saturating_mul(factor);
                        tracing::warn!(
                            customer_id,
                            attempt = attempt + 1,
                            delay_ms = delay.as_millis() as u64,
                            cause = %last_cause,
                            "transient failure, retrying"
                        );
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        Err(ApiError::RetriesExhausted {
            attempts: self.config.max_retries + 1,
            last_cause,
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

    use adwire_core::AdwireError;
    use async_trait::async_trait;
    use tokio::time::Instant;

    use super::*;
    use crate::transport::{GoogleAdsFailure, MutateResult};

    /// Fails with a transient error until `succeed_after` calls have been
    /// made, then succeeds.
    struct FlakyTransport {
        calls: AtomicU32,
        succeed_after: u32,
    }

    impl FlakyTransport {
        fn new(succeed_after: u32) -> Arc<Self> {
            Arc::new(FlakyTransport {
                calls: AtomicU32::new(0),
                succeed_after,
            })
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }

        fn next(&self) -> Result<(), TransportError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n < self.succeed_after {
                Err(TransportError::Transient {
                    message: "connection reset".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl AdsTransport for FlakyTransport {
        async fn search(
            &self,
            _customer_id: &str,
            _query: &str,
            _page_size: i32,
        ) -> Result<Vec<SearchRow>, TransportError> {
            self.next()?;
            Ok(vec![serde_json::json!({"campaign": {"id": "111"}})])
        }

        async fn mutate(
            &self,
            _customer_id: &str,
            operations: &[MutateOperation],
            _partial_failure: bool,
        ) -> Result<MutateResponse, TransportError> {
            self.next()?;
            Ok(MutateResponse {
                results: operations
                    .iter()
                    .map(|_| MutateResult {
                        resource_name: Some("customers/1234567890/campaigns/111".to_string()),
                    })
                    .collect(),
                partial_failure: None,
            })
        }
    }

    /// Always rejects with the given remote failure.
    struct RejectingTransport {
        calls: AtomicU32,
        failure: GoogleAdsFailure,
        saw_partial_failure: AtomicBool,
    }

    impl RejectingTransport {
        fn new(failure: GoogleAdsFailure) -> Arc<Self> {
            Arc::new(RejectingTransport {
                calls: AtomicU32::new(0),
                failure,
                saw_partial_failure: AtomicBool::new(false),
            })
        }
    }

    #[async_trait]
    impl AdsTransport for RejectingTransport {
        async fn search(
            &self,
            _customer_id: &str,
            _query: &str,
            _page_size: i32,
        ) -> Result<Vec<SearchRow>, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(TransportError::Remote(self.failure.clone()))
        }

        async fn mutate(
            &self,
            _customer_id: &str,
            _operations: &[MutateOperation],
            partial_failure: bool,
        ) -> Result<MutateResponse, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.saw_partial_failure
                .store(partial_failure, Ordering::SeqCst);
            Err(TransportError::Remote(self.failure.clone()))
        }
    }

    const CID: &str = "1234567890";

    #[tokio::test(start_paused = true)]
    async fn test_query_retries_transient_then_succeeds() {
        let transport = FlakyTransport::new(2);
        let client = AdsClient::new(transport.clone());

        let start = Instant::now();
        let rows = client
            .query(CID, "SELECT campaign.id FROM campaign", 100)
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(transport.calls(), 3);
        // backoff before attempts 2 and 3: 1s + 2s
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retries_exhausted_reports_attempt_count() {
        let transport = FlakyTransport::new(u32::MAX);
        let client = AdsClient::with_config(
            transport.clone(),
            ClientConfig {
                max_retries: 2,
                base_delay: Duration::from_secs(1),
            },
        );

        let start = Instant::now();
        let err = client
            .query(CID, "SELECT campaign.id FROM campaign", 100)
            .await
            .unwrap_err();

        match err {
            AdwireError::Api(ApiError::RetriesExhausted { attempts, last_cause }) => {
                assert_eq!(attempts, 3);
                assert_eq!(last_cause, "connection reset");
            }
            other => panic!("expected retries exhausted, got {:?}", other),
        }
        assert_eq!(transport.calls(), 3);
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_saturates_for_large_retry_budgets() {
        let transport = FlakyTransport::new(u32::MAX);
        let client = AdsClient::with_config(
            transport.clone(),
            ClientConfig {
                max_retries: 40,
                base_delay: Duration::from_nanos(1),
            },
        );

        let err = client
            .query(CID, "SELECT campaign.id FROM campaign", 100)
            .await
            .unwrap_err();

        match err {
            AdwireError::Api(ApiError::RetriesExhausted { attempts, .. }) => {
                assert_eq!(attempts, 41);
            }
            other => panic!("expected retries exhausted, got {:?}", other),
        }
        assert_eq!(transport.calls(), 41);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remote_rejection_is_never_retried() {
        let transport =
            RejectingTransport::new(GoogleAdsFailure::raw("AUTHENTICATION_ERROR", "bad token"));
        let client = AdsClient::new(transport.clone());

        let start = Instant::now();
        let err = client
            .query(CID, "SELECT campaign.id FROM campaign", 100)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AdwireError::Api(ApiError::Authentication { .. })
        ));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_query_guard_rejects_non_select() {
        let transport = FlakyTransport::new(0);
        let client = AdsClient::new(transport.clone());

        for query in [
            "DELETE FROM campaign",
            "UPDATE campaign SET status = 4",
            "",
            "   ",
        ] {
            let err = client.query(CID, query, 100).await.unwrap_err();
            assert!(
                matches!(err, AdwireError::Api(ApiError::InvalidRequest { ref field, .. }) if field == "query"),
                "query {:?} should be rejected",
                query
            );
        }
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_query_guard_accepts_select_case_insensitively() {
        let transport = FlakyTransport::new(0);
        let client = AdsClient::new(transport.clone());

        for query in [
            "SELECT campaign.id FROM campaign",
            "  select campaign.id from campaign",
            "\n\tSeLeCt campaign.id FROM campaign",
        ] {
            client.query(CID, query, 100).await.unwrap();
        }
        assert_eq!(transport.calls(), 3);
    }

    #[tokio::test]
    async fn test_mutate_returns_per_operation_results() {
        let transport = FlakyTransport::new(0);
        let client = AdsClient::new(transport.clone());

        let ops = vec![
            MutateOperation::Campaign(adwire_core::ResourceOperation::Create {
                create: adwire_core::Campaign::default(),
            }),
            MutateOperation::AdGroup(adwire_core::ResourceOperation::Create {
                create: adwire_core::AdGroup::default(),
            }),
        ];
        let response = client.mutate(CID, &ops, false).await.unwrap();
        assert_eq!(response.results.len(), 2);
        assert!(response.partial_failure.is_none());
    }

    #[tokio::test]
    async fn test_mutate_forwards_partial_failure_flag() {
        let transport =
            RejectingTransport::new(GoogleAdsFailure::raw("MUTATE_ERROR", "rejected"));
        let client = AdsClient::new(transport.clone());

        let err = client.mutate(CID, &[], true).await.unwrap_err();
        assert!(matches!(err, AdwireError::Api(ApiError::Request { .. })));
        assert!(transport.saw_partial_failure.load(Ordering::SeqCst));
    }
}
