//! Trigger management

use std::sync::Arc;

use goanywhere_http::{decode, Content, Params, Pipeline};

use super::{segment, HttpApi};
use crate::error::Result;

/// Operations on event triggers
pub struct Triggers {
    http: HttpApi,
}

impl Triggers {
    pub(crate) fn new(pipeline: Arc<Pipeline>) -> Self {
        Self {
            http: HttpApi::new(pipeline),
        }
    }

    /// Delete a trigger.
    pub async fn delete_trigger(&self, kind: &str, trigger: &str) -> Result<()> {
        let path = format!("/triggers/{}/{}", segment(kind), segment(trigger));
        let response = self.http.delete(&path, &Params::new()).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Export a trigger as XML.
    pub async fn export_trigger(&self, kind: &str, trigger: &str) -> Result<Content> {
        let path = format!("/triggers/{}/{}", segment(kind), segment(trigger));
        let response = HttpApi::ensure_ok(self.http.get(&path).await?)?;
        Ok(decode(&response))
    }

    /// Import a trigger.
    pub async fn import_trigger(&self, params: &Params) -> Result<()> {
        let response = self.http.post("/triggers", params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Promote a trigger to another GoAnywhere server.
    pub async fn promote_trigger(&self, kind: &str, trigger: &str, params: &Params) -> Result<()> {
        let path = format!("/triggers/{}/{}/promote", segment(kind), segment(trigger));
        let response = self.http.post(&path, params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }
}
