//! Matchain HTTP client with retry on transport failure

use crate::api::Endpoint;
use crate::{ApiResponse, Transport};
use async_trait::async_trait;
use matchfarm_core::{ClientConfig, Error, Result, RetryPolicy};
use reqwest::{header::HeaderMap, Client, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// HTTP client for the Matchain mini-app API
///
/// Holds no per-account state: headers (including the session token) are
/// supplied by the caller on every request, so one client can serve every
/// account in a pass.
pub struct MatchainClient {
    http: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl MatchainClient {
    /// Create a new client from transport settings
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| Error::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry: config.retry.clone(),
        })
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Issue one request without retrying
    ///
    /// A 200 whose body is not JSON is a malformed response and counts as a
    /// transport failure; other statuses with unreadable bodies come back
    /// with no body.
    async fn send_once(
        &self,
        endpoint: Endpoint,
        headers: &HeaderMap,
        body: Option<&Value>,
    ) -> Result<ApiResponse> {
        let url = self.url(endpoint);

        let request = match body {
            Some(payload) => self.http.post(&url).json(payload),
            None => self.http.get(&url),
        };

        let response = request.headers(headers.clone()).send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!("{} -> HTTP {}", endpoint, status);

        if text.trim().is_empty() {
            return Ok(ApiResponse::new(status.as_u16(), None));
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(json) => Ok(ApiResponse::new(status.as_u16(), Some(json))),
            Err(e) if status == StatusCode::OK => Err(Error::InvalidData(format!(
                "{}: malformed response body: {}",
                endpoint, e
            ))),
            Err(_) => Ok(ApiResponse::new(status.as_u16(), None)),
        }
    }
}

#[async_trait]
impl Transport for MatchainClient {
    #[instrument(skip_all, fields(endpoint = %endpoint))]
    async fn send(
        &self,
        endpoint: Endpoint,
        headers: &HeaderMap,
        body: Option<&Value>,
    ) -> Result<ApiResponse> {
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;

            match self.send_once(endpoint, headers, body).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    if !self.retry.allows_retry(attempts) {
                        return Err(Error::RetriesExhausted {
                            endpoint: endpoint.path().to_string(),
                            attempts,
                            last_error: e.to_string(),
                        });
                    }

                    let delay = self.retry.delay_for(attempts);
                    warn!(
                        "Request to {} failed (attempt {}): {}; retrying in {:?}",
                        endpoint, attempts, e, delay
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}
