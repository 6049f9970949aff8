//! Resource management

use std::sync::Arc;

use goanywhere_http::{decode, Content, Params, Pipeline};

use super::{segment, HttpApi};
use crate::error::Result;

/// Operations on server resources (network shares, SSH servers, ...)
pub struct Resources {
    http: HttpApi,
}

impl Resources {
    pub(crate) fn new(pipeline: Arc<Pipeline>) -> Self {
        Self {
            http: HttpApi::new(pipeline),
        }
    }

    /// Delete a resource.
    pub async fn delete_resource(&self, kind: &str, resource: &str) -> Result<()> {
        let path = format!("/resources/{}/{}", segment(kind), segment(resource));
        let response = self.http.delete(&path, &Params::new()).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Export a resource as XML.
    pub async fn export_resource(&self, kind: &str, resource: &str) -> Result<Content> {
        let path = format!("/resources/{}/{}", segment(kind), segment(resource));
        let response = HttpApi::ensure_ok(self.http.get(&path).await?)?;
        Ok(decode(&response))
    }

    /// Import a resource.
    pub async fn import_resource(&self, params: &Params) -> Result<()> {
        let response = self.http.post("/resources", params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Promote a resource to another GoAnywhere server.
    pub async fn promote_resource(
        &self,
        kind: &str,
        resource: &str,
        params: &Params,
    ) -> Result<()> {
        let path = format!("/resources/{}/{}", segment(kind), segment(resource));
        let response = self.http.post(&path, params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }
}
