//! adwire client - query and mutate execution
//!
//! Executes the operations built by `adwire-ops` against the remote ads
//! API. The crate is split along one seam: [`AdsTransport`] is the async
//! interface to the wire, and [`AdsClient`] layers the shared execution
//! policy on top of any transport:
//!
//! - read queries are guarded to `SELECT` before touching the network
//! - transient failures retry with exponential backoff
//! - remote rejections are classified into `ApiError` categories
//!
//! [`GoogleAdsRestTransport`] is the production transport; tests swap in
//! in-memory mocks.

pub mod classify;
pub mod client;
pub mod rest;
pub mod transport;

pub use classify::classify_remote_failure;
pub use client::{AdsClient, ClientConfig};
pub use rest::GoogleAdsRestTransport;
pub use transport::{
    AdsTransport, GoogleAdsFailure, MutateResponse, MutateResult, RemoteError, SearchRow,
    TransportError,
};
