//! Pipeline assembly

use std::sync::Arc;

use http::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;
use url::Url;

use crate::config::HttpConfig;
use crate::error::{HttpError, Result};
use crate::pipeline::{Pipeline, Stage};
use crate::stages::{Authentication, BaseUri, FollowRedirects, HeaderDefaults, PathPrepend};
use crate::transport::{ReqwestTransport, Transport};

/// Assembles the ordered stage chain into a [`Pipeline`].
///
/// The standard chain, outermost first: redirect handling, base-URI
/// resolution, path-prefix rewriting, authentication, default headers.
/// Prepended stages run before the standard chain, appended stages after it
/// (closest to the transport).
pub struct PipelineBuilder {
    config: HttpConfig,
    transport: Option<Arc<dyn Transport>>,
    prepended: Vec<Arc<dyn Stage>>,
    appended: Vec<Arc<dyn Stage>>,
}

impl PipelineBuilder {
    /// Start from default configuration
    pub fn new() -> Self {
        Self::from_config(HttpConfig::default())
    }

    /// Start from the given configuration
    pub fn from_config(config: HttpConfig) -> Self {
        Self {
            config,
            transport: None,
            prepended: Vec::new(),
            appended: Vec::new(),
        }
    }

    /// Set the server endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = Some(endpoint.into());
        self
    }

    /// Set both halves of the Basic credentials
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.config.username = Some(username.into());
        self.config.password = Some(password.into());
        self
    }

    /// Use a specific transport instead of the reqwest default
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Add a stage after all previously appended stages
    pub fn append_stage(mut self, stage: impl Stage + 'static) -> Self {
        self.appended.push(Arc::new(stage));
        self
    }

    /// Add a stage before all previously prepended stages.
    ///
    /// Calls accumulate front-first: after `prepend_stage(a)` then
    /// `prepend_stage(b)`, execution order is `b, a, ...rest`.
    pub fn prepend_stage(mut self, stage: impl Stage + 'static) -> Self {
        self.prepended.insert(0, Arc::new(stage));
        self
    }

    /// Compose the configured stages and transport into a pipeline.
    ///
    /// A missing endpoint skips the base-URI stage (the transport may be
    /// preconfigured). Partially set credentials skip the authentication
    /// stage; that is "authentication not configured", not an error.
    pub fn build(self) -> Result<Pipeline> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&self.config)?),
        };

        let mut stages = self.prepended;
        stages.push(Arc::new(FollowRedirects::new(self.config.max_redirects)));

        if let Some(endpoint) = &self.config.endpoint {
            let url = Url::parse(endpoint)
                .map_err(|e| HttpError::InvalidEndpoint(format!("{endpoint:?}: {e}")))?;
            stages.push(Arc::new(BaseUri::new(url)));
        }

        if !self.config.path_prefix.is_empty() {
            stages.push(Arc::new(PathPrepend::new(self.config.path_prefix.clone())));
        }

        match (&self.config.username, &self.config.password) {
            (Some(username), Some(password)) => {
                stages.push(Arc::new(Authentication::basic(username, password)?));
            }
            (None, None) => {}
            _ => debug!("credentials partially set, authentication stage not installed"),
        }

        let mut defaults = HeaderMap::new();
        defaults.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.config.user_agent)
                .map_err(|e| HttpError::InvalidHeader(e.to_string()))?,
        );
        stages.push(Arc::new(HeaderDefaults::new(defaults)));

        stages.extend(self.appended);

        debug!(stages = stages.len(), "pipeline built");
        Ok(Pipeline::new(stages, transport))
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
