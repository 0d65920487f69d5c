//! REST transport backed by `reqwest`.
//!
//! Talks to the `googleAds:search` / `googleAds:mutate` endpoints with
//! bearer-token auth plus the developer-token header. Network faults and
//! 5xx responses map to [`TransportError::Transient`]; 4xx responses are
//! decoded into a structured [`GoogleAdsFailure`].

use std::fmt;

use adwire_core::MutateOperation;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::transport::{
    AdsTransport, GoogleAdsFailure, MutateResponse, MutateResult, RemoteError, SearchRow,
    TransportError,
};

const DEFAULT_BASE_URL: &str = "https://googleads.googleapis.com/v19";

pub struct GoogleAdsRestTransport {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
    developer_token: String,
    login_customer_id: Option<String>,
}

impl GoogleAdsRestTransport {
    pub fn new(access_token: impl Into<String>, developer_token: impl Into<String>) -> Self {
        GoogleAdsRestTransport {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: access_token.into(),
            developer_token: developer_token.into(),
            login_customer_id: None,
        }
    }

    /// Override the API endpoint, mainly for tests and staging setups.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Manager account to authenticate under when operating on a client
    /// account.
    pub fn with_login_customer_id(mut self, login_customer_id: impl Into<String>) -> Self {
        self.login_customer_id = Some(login_customer_id.into());
        self
    }

    async fn post(&self, url: String, body: &Value) -> Result<Value, TransportError> {
        let mut request = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .header("developer-token", &self.developer_token)
            .json(body);
        if let Some(login_customer_id) = &self.login_customer_id {
            request = request.header("login-customer-id", login_customer_id);
        }

        let response = request.send().await.map_err(|e| TransportError::Transient {
            message: format!("request failed: {}", e),
        })?;
        let status = response.status();
        let text = response.text().await.map_err(|e| TransportError::Transient {
            message: format!("failed to read response body: {}", e),
        })?;

        if status.is_server_error() {
            return Err(TransportError::Transient {
                message: format!("server error {}: {}", status.as_u16(), text),
            });
        }
        if !status.is_success() {
            return Err(TransportError::Remote(parse_failure_body(status, &text)));
        }
        serde_json::from_str(&text).map_err(|e| {
            TransportError::Remote(GoogleAdsFailure::raw(
                "RESPONSE_PARSE_ERROR",
                format!("malformed response body: {}", e),
            ))
        })
    }
}

// Credentials stay out of logs.
impl fmt::Debug for GoogleAdsRestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleAdsRestTransport")
            .field("base_url", &self.base_url)
            .field("access_token", &"[REDACTED]")
            .field("developer_token", &"[REDACTED]")
            .field("login_customer_id", &self.login_customer_id)
            .finish()
    }
}

#[async_trait]
impl AdsTransport for GoogleAdsRestTransport {
    async fn search(
        &self,
        customer_id: &str,
        query: &str,
        page_size: i32,
    ) -> Result<Vec<SearchRow>, TransportError> {
        let url = format!("{}/customers/{}/googleAds:search", self.base_url, customer_id);
        let body = serde_json::json!({
            "query": query,
            "pageSize": page_size,
        });
        let response = self.post(url, &body).await?;
        Ok(parse_search_response(&response))
    }

    async fn mutate(
        &self,
        customer_id: &str,
        operations: &[MutateOperation],
        partial_failure: bool,
    ) -> Result<MutateResponse, TransportError> {
        let url = format!("{}/customers/{}/googleAds:mutate", self.base_url, customer_id);
        let operations = serde_json::to_value(operations).map_err(|e| {
            TransportError::Remote(GoogleAdsFailure::raw(
                "REQUEST_SERIALIZATION_ERROR",
                format!("failed to encode operations: {}", e),
            ))
        })?;
        let body = serde_json::json!({
            "mutateOperations": operations,
            "partialFailure": partial_failure,
        });
        let response = self.post(url, &body).await?;
        Ok(parse_mutate_response(&response))
    }
}

fn parse_search_response(response: &Value) -> Vec<SearchRow> {
    response
        .get("results")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

fn parse_mutate_response(response: &Value) -> MutateResponse {
    let results = response
        .get("mutateOperationResponses")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .map(|entry| MutateResult {
                    // each entry is {"<kind>Result": {"resourceName": ...}}
                    resource_name: entry
                        .as_object()
                        .and_then(|obj| obj.values().next())
                        .and_then(|result| result.get("resourceName"))
                        .and_then(Value::as_str)
                        .map(str::to_string),
                })
                .collect()
        })
        .unwrap_or_default();

    let partial_failure = response
        .get("partialFailureError")
        .map(|error| parse_error_object(error, None));

    MutateResponse {
        results,
        partial_failure,
    }
}

/// Decode a non-2xx response body into the structured failure form.
/// Bodies that are not the expected JSON shape degrade to a single raw
/// sub-error so classification still has something to look at.
fn parse_failure_body(status: StatusCode, body: &str) -> GoogleAdsFailure {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return GoogleAdsFailure::raw(format!("HTTP_{}", status.as_u16()), body),
    };
    match value.get("error") {
        Some(error) => parse_error_object(error, Some(status)),
        None => GoogleAdsFailure::raw(format!("HTTP_{}", status.as_u16()), body),
    }
}

/// Decode one `google.rpc.Status`-shaped error object. Sub-errors live in
/// `details[].errors[]`, each with an `errorCode` object whose single
/// entry's value is the symbolic code.
fn parse_error_object(error: &Value, status: Option<StatusCode>) -> GoogleAdsFailure {
    let mut errors = Vec::new();
    let mut request_id = None;

    if let Some(details) = error.get("details").and_then(Value::as_array) {
        for detail in details {
            if let Some(rid) = detail.get("requestId").and_then(Value::as_str) {
                request_id = Some(rid.to_string());
            }
            if let Some(sub_errors) = detail.get("errors").and_then(Value::as_array) {
                for sub_error in sub_errors {
                    let code = sub_error
                        .get("errorCode")
                        .and_then(Value::as_object)
                        .and_then(|codes| codes.values().next())
                        .and_then(Value::as_str)
                        .unwrap_or("UNKNOWN")
                        .to_string();
                    let message = sub_error
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string();
                    errors.push(RemoteError { code, message });
                }
            }
        }
    }

    if errors.is_empty() {
        let code = error
            .get("status")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| match status {
                Some(status) => format!("HTTP_{}", status.as_u16()),
                None => "UNKNOWN".to_string(),
            });
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        errors.push(RemoteError { code, message });
    }

    GoogleAdsFailure { errors, request_id }
}
