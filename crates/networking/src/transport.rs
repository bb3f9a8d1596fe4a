//! The request seam between sessions and the wire

use crate::api::Endpoint;
use crate::ApiResponse;
use async_trait::async_trait;
use matchfarm_core::Result;
use reqwest::header::HeaderMap;
use serde_json::Value;

/// Sends one request and resolves once a response is obtained
///
/// A body means POST, no body means GET. Implementations absorb transient
/// failures themselves; an `Err` only surfaces once their retry policy is
/// exhausted. Non-200 statuses are returned, never retried.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        endpoint: Endpoint,
        headers: &HeaderMap,
        body: Option<&Value>,
    ) -> Result<ApiResponse>;
}
