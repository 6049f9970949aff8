//! Transport boundary and the reqwest-backed default

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::config::HttpConfig;
use crate::error::{HttpError, Result};
use crate::request::Request;
use crate::response::Response;

/// Network-level failure (connect, DNS, TLS, read).
///
/// Kept distinct from HTTP status failures; the pipeline never reinterprets
/// one category as the other.
#[derive(Debug, Error)]
#[error("transport error: {0}")]
pub struct TransportError(String);

impl TransportError {
    /// Create a transport error from a message
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Pluggable network exchange: one request in, one response out.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Transmit the request and return the buffered response
    async fn send(&self, request: Request) -> std::result::Result<Response, TransportError>;
}

/// Default transport over a shared `reqwest::Client`.
///
/// reqwest's own redirect following is disabled: redirect policy belongs to
/// the pipeline's redirect stage.
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport from pipeline configuration
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: Request) -> std::result::Result<Response, TransportError> {
        let url = reqwest::Url::parse(request.target())
            .map_err(|e| TransportError::new(format!("invalid URL {:?}: {e}", request.target())))?;

        debug!(method = %request.method(), %url, "sending request");

        let mut builder = self
            .inner
            .request(request.method().clone(), url)
            .headers(request.headers().clone());
        if let Some(body) = request.body() {
            builder = builder.body(body.to_vec());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?
            .to_vec();

        debug!(status = status.as_u16(), bytes = body.len(), "received response");

        Ok(Response::new(status, headers, body))
    }
}
