//! Base-URI resolution stage

use async_trait::async_trait;
use url::Url;

use crate::error::{HttpError, Result};
use crate::pipeline::{Next, Stage};
use crate::request::Request;
use crate::response::Response;

/// Rewrites the request authority (scheme + host + port) to the configured
/// endpoint, preserving path and query.
///
/// Applies to absolute targets too: a redirect `Location` may move the path
/// but never steers the client to another host.
pub struct BaseUri {
    endpoint: Url,
}

impl BaseUri {
    /// Build the stage from the endpoint URL
    pub fn new(endpoint: Url) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl Stage for BaseUri {
    async fn process(&self, request: Request, next: Next<'_>) -> Result<Response> {
        let target = request.target();
        let path_and_query = match Url::parse(target) {
            Ok(absolute) => {
                let mut s = absolute.path().to_string();
                if let Some(query) = absolute.query() {
                    s.push('?');
                    s.push_str(query);
                }
                s
            }
            Err(_) => target.to_string(),
        };

        let resolved = self
            .endpoint
            .join(&path_and_query)
            .map_err(|e| HttpError::InvalidEndpoint(e.to_string()))?;

        next.run(request.with_target(resolved.to_string())).await
    }
}
