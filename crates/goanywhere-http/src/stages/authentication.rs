//! Basic authentication stage

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use http::header::{HeaderValue, AUTHORIZATION};

use crate::error::{HttpError, Result};
use crate::pipeline::{Next, Stage};
use crate::request::Request;
use crate::response::Response;

/// Sets `Authorization: Basic ...` on every request, overwriting any value
/// already present.
pub struct Authentication {
    value: HeaderValue,
}

impl Authentication {
    /// Build the stage from Basic credentials
    pub fn basic(username: &str, password: &str) -> Result<Self> {
        let encoded = general_purpose::STANDARD.encode(format!("{username}:{password}"));
        let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))
            .map_err(|e| HttpError::InvalidHeader(e.to_string()))?;
        value.set_sensitive(true);
        Ok(Self { value })
    }
}

#[async_trait]
impl Stage for Authentication {
    async fn process(&self, request: Request, next: Next<'_>) -> Result<Response> {
        next.run(request.with_header(AUTHORIZATION, self.value.clone()))
            .await
    }
}
