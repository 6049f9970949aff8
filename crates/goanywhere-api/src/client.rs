//! Top-level client and API selection

use std::str::FromStr;
use std::sync::Arc;

use goanywhere_http::{HttpConfig, Pipeline, PipelineBuilder};
use tracing::debug;

use crate::apis::{
    Jobs, Monitors, Projects, Resources, Schedules, SshKeys, Triggers, WebGroups, WebUsers,
};
use crate::error::{ApiError, Result};

/// Client for the GoAnywhere MFT administrative REST API.
///
/// One instance owns one composed pipeline and hands out per-resource
/// bindings over it; it is cheap to clone and safe to share across tasks.
#[derive(Clone)]
pub struct Client {
    pipeline: Arc<Pipeline>,
}

impl Client {
    /// Create a client for the given endpoint with Basic credentials.
    pub fn create(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let pipeline = PipelineBuilder::new()
            .with_endpoint(endpoint)
            .with_credentials(username, password)
            .build()?;
        Ok(Self::with_pipeline(pipeline))
    }

    /// Create a client from full configuration.
    pub fn from_config(config: HttpConfig) -> Result<Self> {
        let pipeline = PipelineBuilder::from_config(config).build()?;
        Ok(Self::with_pipeline(pipeline))
    }

    /// Wrap an already composed pipeline (custom transport or extra stages).
    pub fn with_pipeline(pipeline: Pipeline) -> Self {
        debug!(stages = pipeline.stage_count(), "client created");
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// Job control operations
    pub fn jobs(&self) -> Jobs {
        Jobs::new(self.pipeline.clone())
    }

    /// Folder monitor operations
    pub fn monitors(&self) -> Monitors {
        Monitors::new(self.pipeline.clone())
    }

    /// Project operations
    pub fn projects(&self) -> Projects {
        Projects::new(self.pipeline.clone())
    }

    /// Resource operations
    pub fn resources(&self) -> Resources {
        Resources::new(self.pipeline.clone())
    }

    /// Schedule operations
    pub fn schedules(&self) -> Schedules {
        Schedules::new(self.pipeline.clone())
    }

    /// SSH key operations
    pub fn sshkeys(&self) -> SshKeys {
        SshKeys::new(self.pipeline.clone())
    }

    /// Trigger operations
    pub fn triggers(&self) -> Triggers {
        Triggers::new(self.pipeline.clone())
    }

    /// Web group operations
    pub fn webgroups(&self) -> WebGroups {
        WebGroups::new(self.pipeline.clone())
    }

    /// Web user operations
    pub fn webusers(&self) -> WebUsers {
        WebUsers::new(self.pipeline.clone())
    }

    /// Select an API group by name.
    ///
    /// An unrecognized name is an [`ApiError::UnknownApi`] failure, distinct
    /// from any HTTP-level error.
    pub fn api(&self, name: &str) -> Result<ApiHandle> {
        let kind = name.parse::<ApiKind>()?;
        Ok(self.api_for(kind))
    }

    /// Select an API group by enumerated kind.
    pub fn api_for(&self, kind: ApiKind) -> ApiHandle {
        match kind {
            ApiKind::Jobs => ApiHandle::Jobs(self.jobs()),
            ApiKind::Monitors => ApiHandle::Monitors(self.monitors()),
            ApiKind::Projects => ApiHandle::Projects(self.projects()),
            ApiKind::Resources => ApiHandle::Resources(self.resources()),
            ApiKind::Schedules => ApiHandle::Schedules(self.schedules()),
            ApiKind::SshKeys => ApiHandle::SshKeys(self.sshkeys()),
            ApiKind::Triggers => ApiHandle::Triggers(self.triggers()),
            ApiKind::WebGroups => ApiHandle::WebGroups(self.webgroups()),
            ApiKind::WebUsers => ApiHandle::WebUsers(self.webusers()),
        }
    }
}

/// The fixed set of API groups the server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiKind {
    Jobs,
    Monitors,
    Projects,
    Resources,
    Schedules,
    SshKeys,
    Triggers,
    WebGroups,
    WebUsers,
}

impl FromStr for ApiKind {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "jobs" => Ok(ApiKind::Jobs),
            "monitors" => Ok(ApiKind::Monitors),
            "projects" => Ok(ApiKind::Projects),
            "resources" => Ok(ApiKind::Resources),
            "schedules" => Ok(ApiKind::Schedules),
            "sshkeys" => Ok(ApiKind::SshKeys),
            "triggers" => Ok(ApiKind::Triggers),
            "webgroups" => Ok(ApiKind::WebGroups),
            "webusers" => Ok(ApiKind::WebUsers),
            _ => Err(ApiError::UnknownApi(s.to_string())),
        }
    }
}

/// A binding selected at runtime via [`Client::api`].
pub enum ApiHandle {
    Jobs(Jobs),
    Monitors(Monitors),
    Projects(Projects),
    Resources(Resources),
    Schedules(Schedules),
    SshKeys(SshKeys),
    Triggers(Triggers),
    WebGroups(WebGroups),
    WebUsers(WebUsers),
}

impl ApiHandle {
    /// The kind this handle was selected as
    pub fn kind(&self) -> ApiKind {
        match self {
            ApiHandle::Jobs(_) => ApiKind::Jobs,
            ApiHandle::Monitors(_) => ApiKind::Monitors,
            ApiHandle::Projects(_) => ApiKind::Projects,
            ApiHandle::Resources(_) => ApiKind::Resources,
            ApiHandle::Schedules(_) => ApiKind::Schedules,
            ApiHandle::SshKeys(_) => ApiKind::SshKeys,
            ApiHandle::Triggers(_) => ApiKind::Triggers,
            ApiHandle::WebGroups(_) => ApiKind::WebGroups,
            ApiHandle::WebUsers(_) => ApiKind::WebUsers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_kind_parses_case_insensitively() {
        assert_eq!("jobs".parse::<ApiKind>().unwrap(), ApiKind::Jobs);
        assert_eq!("SshKeys".parse::<ApiKind>().unwrap(), ApiKind::SshKeys);
        assert_eq!("WEBUSERS".parse::<ApiKind>().unwrap(), ApiKind::WebUsers);
    }

    #[test]
    fn test_unknown_api_name_is_a_typed_failure() {
        let err = "ftpservers".parse::<ApiKind>().unwrap_err();
        assert!(matches!(err, ApiError::UnknownApi(name) if name == "ftpservers"));
    }

    #[test]
    fn test_client_create_wires_the_standard_pipeline() {
        let client = Client::create("https://mft.example.com:8001", "admin", "secret").unwrap();
        // redirects, base-uri, path-prepend, authentication, header defaults
        assert_eq!(client.pipeline.stage_count(), 5);
    }

    #[test]
    fn test_api_selection_by_name() {
        let client = Client::create("https://mft.example.com:8001", "admin", "secret").unwrap();
        let handle = client.api("schedules").unwrap();
        assert_eq!(handle.kind(), ApiKind::Schedules);
        assert!(client.api("nonsense").is_err());
    }
}
