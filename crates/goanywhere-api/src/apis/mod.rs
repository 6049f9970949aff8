//! Per-resource API bindings
//!
//! Each binding is a thin caller of the generic verb client: build a path,
//! issue a verb, surface error statuses, optionally decode the body.

use std::sync::Arc;

use goanywhere_http::{classify, HeaderMap, MethodsClient, Params, Pipeline, Response};

use crate::error::Result;

mod jobs;
mod monitors;
mod projects;
mod resources;
mod schedules;
mod ssh_keys;
mod triggers;
mod web_groups;
mod web_users;

pub use jobs::Jobs;
pub use monitors::Monitors;
pub use projects::Projects;
pub use resources::Resources;
pub use schedules::Schedules;
pub use ssh_keys::SshKeys;
pub use triggers::Triggers;
pub use web_groups::WebGroups;
pub use web_users::WebUsers;

/// Shared plumbing for the bindings.
pub(crate) struct HttpApi {
    client: MethodsClient,
}

impl HttpApi {
    pub(crate) fn new(pipeline: Arc<Pipeline>) -> Self {
        Self {
            client: MethodsClient::new(pipeline),
        }
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(path, &[], HeaderMap::new()).await?)
    }

    pub(crate) async fn post(&self, path: &str, params: &Params) -> Result<Response> {
        Ok(self.client.post(path, params, HeaderMap::new()).await?)
    }

    pub(crate) async fn put(&self, path: &str, params: &Params) -> Result<Response> {
        Ok(self.client.put(path, params, HeaderMap::new()).await?)
    }

    pub(crate) async fn delete(&self, path: &str, params: &Params) -> Result<Response> {
        Ok(self.client.delete(path, params, HeaderMap::new()).await?)
    }

    /// Surface an error status (>= 400) as a classified failure.
    pub(crate) fn ensure_ok(response: Response) -> Result<Response> {
        let status = response.status().as_u16();
        if status >= 400 {
            return Err(classify(status, &response.text()).into());
        }
        Ok(response)
    }
}

/// Percent-encode a caller-supplied path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Body for removing a virtual file or folder from a user or group.
pub(crate) fn remove_virtual_path(path: &str) -> Params {
    let mut params = Params::new();
    params.insert(
        "action".to_string(),
        serde_json::Value::String("remove".to_string()),
    );
    params.insert(
        "virtualPath".to_string(),
        serde_json::Value::String(path.to_string()),
    );
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use goanywhere_http::{HeaderMap, StatusCode};

    #[test]
    fn test_segment_encodes_reserved_characters() {
        assert_eq!(segment("sftp server"), "sftp%20server");
        assert_eq!(segment("a/b"), "a%2Fb");
        assert_eq!(segment("plain"), "plain");
    }

    #[test]
    fn test_ensure_ok_passes_success_through() {
        let response = Response::new(StatusCode::OK, HeaderMap::new(), b"fine".to_vec());
        assert!(HttpApi::ensure_ok(response).is_ok());
    }

    #[test]
    fn test_ensure_ok_classifies_error_statuses() {
        let response = Response::new(StatusCode::NOT_FOUND, HeaderMap::new(), b"missing".to_vec());
        let err = HttpApi::ensure_ok(response).unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("Not Found: missing"));
    }

    #[test]
    fn test_remove_virtual_path_body() {
        let params = remove_virtual_path("/inbound/report.csv");
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"action":"remove","virtualPath":"/inbound/report.csv"}"#
        );
    }
}
