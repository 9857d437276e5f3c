//! HTTP transport used by the translation client.
//!
//! The client only needs "POST this JSON, give me status and body", so the
//! transport is a small trait. Tests substitute an in-memory fake.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use thiserror::Error;

/// Status code and raw body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Errors raised before a status code is available.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request could not be delivered or the response could not be read.
    #[error("{0}")]
    Network(String),
    /// The request could not be built.
    #[error("{0}")]
    Other(String),
}

/// Sends a JSON POST request and returns the response.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: Url, body: String) -> Result<HttpResponse, TransportError>;
}

/// `reqwest`-backed transport.
///
/// Idle connections are not kept, so every request opens its own connection
/// and releases it once the response body has been read or the request fails.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self::with_client(client))
    }

    /// Wraps an already configured client.
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn post_json(&self, url: Url, body: String) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            // The status alone is enough to report a failed request
            Err(_) if !status.is_success() => String::new(),
            Err(e) => return Err(map_reqwest_error(e)),
        };

        Ok(HttpResponse {
            status: status.as_u16(),
            body,
        })
    }
}

// The URL carries the API key as a query parameter, so it is stripped before
// the error text reaches the terminal.
fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    let is_builder = err.is_builder();
    let message = err.without_url().to_string();
    if is_builder {
        TransportError::Other(message)
    } else {
        TransportError::Network(message)
    }
}
