//! Remote failure classification.
//!
//! Turns a structured remote rejection into the matching [`ApiError`]
//! category. Sub-errors are inspected in order and the first one that
//! matches a known category decides the classification; later sub-errors
//! are ignored even if they would match a different category.

use std::time::Duration;

use adwire_core::ApiError;

use crate::transport::GoogleAdsFailure;

/// Retry hint attached to quota errors when the remote side gives none.
const DEFAULT_QUOTA_RETRY_AFTER: Duration = Duration::from_secs(60);

/// Classify a remote rejection into an actionable error category.
///
/// Matching is case-insensitive substring matching on the sub-error code:
/// authentication and authorization failures, quota and rate limits, and
/// missing resources each get their own variant. Anything else, including
/// a rejection with zero sub-errors, falls through to the generic
/// [`ApiError::Request`] carrying the failure's string form.
pub fn classify_remote_failure(customer_id: &str, failure: &GoogleAdsFailure) -> ApiError {
    for error in &failure.errors {
        let code = error.code.to_ascii_lowercase();

        if code.contains("authentication") || code.contains("authorization") {
            return ApiError::Authentication {
                customer_id: customer_id.to_string(),
                message: error.message.clone(),
            };
        }
        if code.contains("quota") || code.contains("rate") {
            return ApiError::QuotaExhausted {
                customer_id: customer_id.to_string(),
                retry_after: DEFAULT_QUOTA_RETRY_AFTER,
                message: error.message.clone(),
            };
        }
        if code.contains("not_found") {
            return ApiError::ResourceNotFound {
                resource_type: "unknown".to_string(),
                resource_id: "unknown".to_string(),
                message: error.message.clone(),
            };
        }
    }

    ApiError::Request {
        customer_id: customer_id.to_string(),
        message: failure.to_string(),
    }
}
