//! Folder monitor management

use std::sync::Arc;

use goanywhere_http::{decode, Content, Params, Pipeline};

use super::{segment, HttpApi};
use crate::error::Result;

/// Operations on folder monitors
pub struct Monitors {
    http: HttpApi,
}

impl Monitors {
    pub(crate) fn new(pipeline: Arc<Pipeline>) -> Self {
        Self {
            http: HttpApi::new(pipeline),
        }
    }

    /// Delete a monitor.
    pub async fn delete_monitor(&self, kind: &str, monitor: &str) -> Result<()> {
        let path = format!("/monitors/{}/{}", segment(kind), segment(monitor));
        let response = self.http.delete(&path, &Params::new()).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Export a monitor as XML.
    pub async fn export_monitor(&self, kind: &str, monitor: &str) -> Result<Content> {
        let path = format!("/monitors/{}/{}", segment(kind), segment(monitor));
        let response = HttpApi::ensure_ok(self.http.get(&path).await?)?;
        Ok(decode(&response))
    }

    /// Import a monitor.
    pub async fn import_monitor(&self, params: &Params) -> Result<()> {
        let response = self.http.post("/monitors", params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Promote a monitor to another GoAnywhere server.
    pub async fn promote_monitor(&self, kind: &str, monitor: &str, params: &Params) -> Result<()> {
        let path = format!("/monitors/{}/{}/promote", segment(kind), segment(monitor));
        let response = self.http.post(&path, params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }
}
