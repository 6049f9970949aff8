//! Project management
//!
//! The server keys every project operation off the JSON body rather than
//! the path, so all four calls target `/projects`.

use std::sync::Arc;

use goanywhere_http::{decode, Content, Params, Pipeline};

use super::HttpApi;
use crate::error::Result;

/// Operations on projects
pub struct Projects {
    http: HttpApi,
}

impl Projects {
    pub(crate) fn new(pipeline: Arc<Pipeline>) -> Self {
        Self {
            http: HttpApi::new(pipeline),
        }
    }

    /// Delete a project.
    pub async fn delete_project(&self, params: &Params) -> Result<()> {
        let response = self.http.delete("/projects", params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Export a project as XML.
    pub async fn export_project(&self, params: &Params) -> Result<Content> {
        let response = HttpApi::ensure_ok(self.http.post("/projects", params).await?)?;
        Ok(decode(&response))
    }

    /// Import a project.
    pub async fn import_project(&self, params: &Params) -> Result<()> {
        let response = self.http.post("/projects", params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Promote a project to another GoAnywhere server.
    pub async fn promote_project(&self, params: &Params) -> Result<()> {
        let response = self.http.post("/projects", params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }
}
