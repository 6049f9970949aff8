//! Schedule management

use std::sync::Arc;

use goanywhere_http::{decode, Content, Params, Pipeline};

use super::{segment, HttpApi};
use crate::error::Result;

/// Operations on project schedules
pub struct Schedules {
    http: HttpApi,
}

impl Schedules {
    pub(crate) fn new(pipeline: Arc<Pipeline>) -> Self {
        Self {
            http: HttpApi::new(pipeline),
        }
    }

    /// Delete a schedule.
    pub async fn delete_schedule(&self, schedule: &str) -> Result<()> {
        let path = format!("/schedules/{}", segment(schedule));
        let response = self.http.delete(&path, &Params::new()).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Export a schedule as XML.
    pub async fn export_schedule(&self, schedule: &str) -> Result<Content> {
        let path = format!("/schedules/{}", segment(schedule));
        let response = HttpApi::ensure_ok(self.http.get(&path).await?)?;
        Ok(decode(&response))
    }

    /// Import a schedule.
    pub async fn import_schedule(&self, params: &Params) -> Result<()> {
        let response = self.http.post("/schedules", params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Promote a schedule to another GoAnywhere server.
    pub async fn promote_schedule(&self, schedule: &str, params: &Params) -> Result<()> {
        let path = format!("/schedules/{}/promote", segment(schedule));
        let response = self.http.post(&path, params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }
}
