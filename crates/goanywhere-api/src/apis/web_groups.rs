//! Web group management

use std::sync::Arc;

use goanywhere_http::{decode, Content, Params, Pipeline};

use super::{remove_virtual_path, segment, HttpApi};
use crate::error::Result;

/// Operations on web user groups
pub struct WebGroups {
    http: HttpApi,
}

impl WebGroups {
    pub(crate) fn new(pipeline: Arc<Pipeline>) -> Self {
        Self {
            http: HttpApi::new(pipeline),
        }
    }

    /// Delete a web group.
    pub async fn delete_group(&self, group: &str) -> Result<()> {
        let path = format!("/webgroups/{}", segment(group));
        let response = self.http.delete(&path, &Params::new()).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Export a web group as XML.
    pub async fn export_group(&self, group: &str) -> Result<Content> {
        let path = format!("/webgroups/{}", segment(group));
        let response = HttpApi::ensure_ok(self.http.get(&path).await?)?;
        Ok(decode(&response))
    }

    /// Import a web group.
    pub async fn import_group(&self, params: &Params) -> Result<()> {
        let response = self.http.post("/webgroups", params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Promote a web group to another GoAnywhere server.
    pub async fn promote_group(&self, group: &str, params: &Params) -> Result<()> {
        let path = format!("/webgroups/{}/promote", segment(group));
        let response = self.http.post(&path, params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Add a virtual file to a web group.
    pub async fn add_virtual_file(&self, group: &str, params: &Params) -> Result<()> {
        let path = format!("/webgroups/{}/virtualfiles", segment(group));
        let response = self.http.post(&path, params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Remove a virtual file from a web group.
    pub async fn remove_virtual_file(&self, group: &str, filename: &str) -> Result<()> {
        let path = format!("/webgroups/{}/virtualfiles", segment(group));
        let response = self.http.post(&path, &remove_virtual_path(filename)).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Update a virtual file of a web group.
    pub async fn update_virtual_file(&self, group: &str, params: &Params) -> Result<()> {
        let path = format!("/webgroups/{}/virtualfiles", segment(group));
        let response = self.http.put(&path, params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Add a virtual folder to a web group.
    pub async fn add_virtual_folder(&self, group: &str, params: &Params) -> Result<()> {
        let path = format!("/webgroups/{}/virtualfolders", segment(group));
        let response = self.http.post(&path, params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Remove a virtual folder from a web group.
    pub async fn remove_virtual_folder(&self, group: &str, folder: &str) -> Result<()> {
        let path = format!("/webgroups/{}/virtualfolders", segment(group));
        let response = self.http.post(&path, &remove_virtual_path(folder)).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Update a virtual folder of a web group.
    pub async fn update_virtual_folder(&self, group: &str, params: &Params) -> Result<()> {
        let path = format!("/webgroups/{}/virtualfolders", segment(group));
        let response = self.http.put(&path, params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }
}
