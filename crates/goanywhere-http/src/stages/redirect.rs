//! Redirect-following stage

use async_trait::async_trait;
use http::header::LOCATION;
use http::{Method, StatusCode};
use tracing::debug;

use crate::error::{HttpError, Result};
use crate::pipeline::{Next, Stage};
use crate::request::Request;
use crate::response::Response;

/// Follows redirect responses through the rest of the chain, bounded by a
/// hop limit.
///
/// The sole automatic re-execution behavior in the pipeline. A chain of
/// exactly `limit` redirects succeeds; one more fails with
/// [`HttpError::RedirectLimit`]. 303 resends as GET with the body dropped;
/// the other redirect codes resend the request unchanged.
pub struct FollowRedirects {
    limit: usize,
}

impl FollowRedirects {
    /// Build the stage with the given hop limit
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

fn should_follow(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::MOVED_PERMANENTLY
            | StatusCode::FOUND
            | StatusCode::SEE_OTHER
            | StatusCode::TEMPORARY_REDIRECT
            | StatusCode::PERMANENT_REDIRECT
    )
}

#[async_trait]
impl Stage for FollowRedirects {
    async fn process(&self, request: Request, next: Next<'_>) -> Result<Response> {
        let mut request = request;
        let mut hops = 0;
        loop {
            let response = next.run(request.clone()).await?;
            if !should_follow(response.status()) {
                return Ok(response);
            }

            // A redirect status without a Location header is handed back as-is.
            let Some(location) = response
                .headers()
                .get(LOCATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
            else {
                return Ok(response);
            };

            if hops >= self.limit {
                return Err(HttpError::RedirectLimit { limit: self.limit });
            }
            hops += 1;

            debug!(status = response.status().as_u16(), %location, hops, "following redirect");

            request = request.with_target(location);
            if response.status() == StatusCode::SEE_OTHER {
                request = request.with_method(Method::GET).with_body(None);
            }
        }
    }
}
