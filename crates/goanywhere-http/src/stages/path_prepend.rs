//! Path-prefix rewriting stage

use async_trait::async_trait;
use url::Url;

use crate::error::Result;
use crate::pipeline::{Next, Stage};
use crate::request::Request;
use crate::response::Response;

/// Prepends a fixed prefix (the API root) to every request path.
///
/// Pure concatenation: duplicate slashes are not collapsed and the target's
/// leading slash is never dropped.
pub struct PathPrepend {
    prefix: String,
}

impl PathPrepend {
    /// Build the stage from the prefix string
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

#[async_trait]
impl Stage for PathPrepend {
    async fn process(&self, request: Request, next: Next<'_>) -> Result<Response> {
        let target = request.target();
        let rewritten = match Url::parse(target) {
            Ok(mut absolute) => {
                let path = format!("{}{}", self.prefix, absolute.path());
                absolute.set_path(&path);
                absolute.to_string()
            }
            Err(_) => format!("{}{}", self.prefix, target),
        };
        next.run(request.with_target(rewritten)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Pipeline;
    use crate::transport::{Transport, TransportError};
    use http::{HeaderMap, Method, StatusCode};
    use std::sync::{Arc, Mutex};

    struct CaptureTransport {
        seen: Arc<Mutex<Option<Request>>>,
    }

    #[async_trait]
    impl Transport for CaptureTransport {
        async fn send(&self, request: Request) -> std::result::Result<Response, TransportError> {
            *self.seen.lock().unwrap() = Some(request);
            Ok(Response::new(StatusCode::OK, HeaderMap::new(), Vec::new()))
        }
    }

    async fn prefixed_target(prefix: &str, target: &str) -> String {
        let seen = Arc::new(Mutex::new(None));
        let pipeline = Pipeline::new(
            vec![Arc::new(PathPrepend::new(prefix))],
            Arc::new(CaptureTransport { seen: seen.clone() }),
        );
        pipeline
            .execute(Request::new(Method::GET, target))
            .await
            .unwrap();
        let request = seen.lock().unwrap().take().unwrap();
        request.target().to_string()
    }

    #[tokio::test]
    async fn test_prefix_concatenated_to_relative_target() {
        let target = prefixed_target("/goanywhere/rest/gacmd/v1", "/jobs/1").await;
        assert_eq!(target, "/goanywhere/rest/gacmd/v1/jobs/1");
    }

    #[tokio::test]
    async fn test_query_survives_prefixing() {
        let target = prefixed_target("/api", "/jobs?limit=5").await;
        assert_eq!(target, "/api/jobs?limit=5");
    }

    #[tokio::test]
    async fn test_prefix_applied_to_absolute_target_path() {
        let target = prefixed_target("/api", "https://mft.example.com/jobs/1").await;
        assert_eq!(target, "https://mft.example.com/api/jobs/1");
    }

    #[tokio::test]
    async fn test_leading_slash_preserved_without_normalization() {
        let target = prefixed_target("/api/", "/jobs").await;
        assert_eq!(target, "/api//jobs");
    }
}
