//! Generic verb client

use std::sync::Arc;

use http::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use http::Method;
use tracing::debug;
use url::form_urlencoded;

use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::request::Request;
use crate::response::Response;

/// Parameter set for request bodies and query strings
pub type Params = serde_json::Map<String, serde_json::Value>;

/// How an empty parameter set encodes.
///
/// The default leaves the body entirely absent. `ForceObject` emits a body
/// of exactly `{}` for endpoints that insist on one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyMode {
    #[default]
    OmitEmpty,
    ForceObject,
}

/// Translates verb calls into pipeline requests.
///
/// Verb methods return the raw [`Response`] without inspecting the status;
/// classification of error statuses is the caller's responsibility.
#[derive(Clone)]
pub struct MethodsClient {
    pipeline: Arc<Pipeline>,
}

impl MethodsClient {
    /// Wrap a composed pipeline
    pub fn new(pipeline: Arc<Pipeline>) -> Self {
        Self { pipeline }
    }

    /// GET, with the query set URL-encoded onto the path when non-empty
    pub async fn get(
        &self,
        path: &str,
        query: &[(&str, &str)],
        headers: HeaderMap,
    ) -> Result<Response> {
        let target = if query.is_empty() {
            path.to_string()
        } else {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query)
                .finish();
            format!("{path}?{encoded}")
        };
        debug!(%target, "GET");
        self.pipeline
            .execute(Request::new(Method::GET, target).with_headers(headers))
            .await
    }

    /// POST with a JSON body encoded from `params`
    pub async fn post(&self, path: &str, params: &Params, headers: HeaderMap) -> Result<Response> {
        self.send_json(Method::POST, path, params, headers, BodyMode::default())
            .await
    }

    /// PUT with a JSON body encoded from `params`
    pub async fn put(&self, path: &str, params: &Params, headers: HeaderMap) -> Result<Response> {
        self.send_json(Method::PUT, path, params, headers, BodyMode::default())
            .await
    }

    /// PATCH with a JSON body encoded from `params`
    pub async fn patch(&self, path: &str, params: &Params, headers: HeaderMap) -> Result<Response> {
        self.send_json(Method::PATCH, path, params, headers, BodyMode::default())
            .await
    }

    /// DELETE with a JSON body encoded from `params`
    pub async fn delete(
        &self,
        path: &str,
        params: &Params,
        headers: HeaderMap,
    ) -> Result<Response> {
        self.send_json(Method::DELETE, path, params, headers, BodyMode::default())
            .await
    }

    /// Issue a verb with an explicit [`BodyMode`].
    ///
    /// `Content-Type: application/json` accompanies any body unless the
    /// caller already set a content type.
    pub async fn send_json(
        &self,
        method: Method,
        path: &str,
        params: &Params,
        headers: HeaderMap,
        mode: BodyMode,
    ) -> Result<Response> {
        debug!(%method, %path, "dispatching");
        let mut request = Request::new(method, path).with_headers(headers);
        if let Some(bytes) = json_body(params, mode)? {
            if !request.headers().contains_key(CONTENT_TYPE) {
                request =
                    request.with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
            request = request.with_body(Some(bytes));
        }
        self.pipeline.execute(request).await
    }
}

fn json_body(params: &Params, mode: BodyMode) -> Result<Option<Vec<u8>>> {
    if params.is_empty() {
        return Ok(match mode {
            BodyMode::OmitEmpty => None,
            BodyMode::ForceObject => Some(b"{}".to_vec()),
        });
    }
    Ok(Some(serde_json::to_vec(params)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::PipelineBuilder;
    use crate::config::HttpConfig;
    use crate::transport::{Transport, TransportError};
    use async_trait::async_trait;
    use http::StatusCode;
    use serde_json::json;
    use std::sync::Mutex;

    struct CaptureTransport {
        seen: Arc<Mutex<Vec<Request>>>,
    }

    #[async_trait]
    impl Transport for CaptureTransport {
        async fn send(&self, request: Request) -> std::result::Result<Response, TransportError> {
            self.seen.lock().unwrap().push(request);
            Ok(Response::new(StatusCode::OK, HeaderMap::new(), Vec::new()))
        }
    }

    fn bare_client() -> (MethodsClient, Arc<Mutex<Vec<Request>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let pipeline = PipelineBuilder::from_config(HttpConfig::new().with_path_prefix(""))
            .with_transport(Arc::new(CaptureTransport { seen: seen.clone() }))
            .build()
            .unwrap();
        (MethodsClient::new(Arc::new(pipeline)), seen)
    }

    #[test]
    fn test_json_body_empty_params_absent_by_default() {
        assert_eq!(json_body(&Params::new(), BodyMode::OmitEmpty).unwrap(), None);
    }

    #[test]
    fn test_json_body_forced_empty_object() {
        assert_eq!(
            json_body(&Params::new(), BodyMode::ForceObject).unwrap(),
            Some(b"{}".to_vec())
        );
    }

    #[test]
    fn test_json_body_encodes_params() {
        let mut params = Params::new();
        params.insert("a".to_string(), json!(1));
        let body = json_body(&params, BodyMode::OmitEmpty).unwrap().unwrap();
        assert_eq!(body, br#"{"a":1}"#.to_vec());
    }

    #[tokio::test]
    async fn test_get_appends_encoded_query() {
        let (client, seen) = bare_client();
        client
            .get("/jobs", &[("name", "a b"), ("limit", "5")], HeaderMap::new())
            .await
            .unwrap();
        let request = seen.lock().unwrap().pop().unwrap();
        assert_eq!(request.target(), "/jobs?name=a+b&limit=5");
        assert!(request.body().is_none());
    }

    #[tokio::test]
    async fn test_get_without_query_leaves_path_alone() {
        let (client, seen) = bare_client();
        client.get("/jobs/1", &[], HeaderMap::new()).await.unwrap();
        let request = seen.lock().unwrap().pop().unwrap();
        assert_eq!(request.target(), "/jobs/1");
    }

    #[tokio::test]
    async fn test_post_empty_params_has_no_body_and_no_content_type() {
        let (client, seen) = bare_client();
        client
            .post("/jobs/1/cancel", &Params::new(), HeaderMap::new())
            .await
            .unwrap();
        let request = seen.lock().unwrap().pop().unwrap();
        assert!(request.body().is_none());
        assert!(!request.headers().contains_key(CONTENT_TYPE));
    }

    #[tokio::test]
    async fn test_post_with_params_sets_json_content_type() {
        let (client, seen) = bare_client();
        let mut params = Params::new();
        params.insert("action".to_string(), json!("remove"));
        client
            .post("/webusers/x/virtualfiles", &params, HeaderMap::new())
            .await
            .unwrap();
        let request = seen.lock().unwrap().pop().unwrap();
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(request.body().unwrap(), br#"{"action":"remove"}"#);
    }

    #[tokio::test]
    async fn test_caller_content_type_is_respected() {
        let (client, seen) = bare_client();
        let mut params = Params::new();
        params.insert("a".to_string(), json!(1));
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        client.put("/x", &params, headers).await.unwrap();
        let request = seen.lock().unwrap().pop().unwrap();
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/json; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_forced_empty_object_body() {
        let (client, seen) = bare_client();
        client
            .send_json(
                Method::POST,
                "/x",
                &Params::new(),
                HeaderMap::new(),
                BodyMode::ForceObject,
            )
            .await
            .unwrap();
        let request = seen.lock().unwrap().pop().unwrap();
        assert_eq!(request.body().unwrap(), b"{}");
    }

    #[tokio::test]
    async fn test_error_status_is_returned_not_raised() {
        struct TeapotTransport;

        #[async_trait]
        impl Transport for TeapotTransport {
            async fn send(
                &self,
                _request: Request,
            ) -> std::result::Result<Response, TransportError> {
                Ok(Response::new(
                    StatusCode::IM_A_TEAPOT,
                    HeaderMap::new(),
                    Vec::new(),
                ))
            }
        }

        let pipeline = PipelineBuilder::from_config(HttpConfig::new().with_path_prefix(""))
            .with_transport(Arc::new(TeapotTransport))
            .build()
            .unwrap();
        let client = MethodsClient::new(Arc::new(pipeline));
        let response = client.get("/x", &[], HeaderMap::new()).await.unwrap();
        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    }
}
