//! User-facing resource endpoints.

use super::api::{segment, ApiClient, Auth};
use crate::error::Result;
use crate::models::resource::{AccessedResource, ResourcesEnvelope};
use crate::models::Resource;

#[derive(Clone)]
pub struct ResourcesService {
    api: ApiClient,
}

impl ResourcesService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Every active resource, with per-user unlock state.
    pub async fn list(&self) -> Result<Vec<Resource>> {
        let envelope: ResourcesEnvelope = self.api.get_json("/resources", Auth::Session).await?;
        Ok(envelope.resources)
    }

    pub async fn get(&self, resource_id: &str) -> Result<Resource> {
        let path = format!("/auth/resources/{}", segment(resource_id));
        self.api.get_json(&path, Auth::Session).await
    }

    /// Unlock a resource, spending tokens. Returns the link when the
    /// backend includes one.
    pub async fn access(&self, resource_id: &str) -> Result<AccessedResource> {
        let path = format!("/auth/access/{}", segment(resource_id));
        let response = self.api.post_empty(&path, Auth::Session).await?;
        tracing::info!(resource_id, "Resource unlocked");
        Ok(response)
    }

    pub async fn list_accessed(&self) -> Result<Vec<Resource>> {
        self.api
            .get_json("/auth/accessed-resources", Auth::Session)
            .await
    }
}
