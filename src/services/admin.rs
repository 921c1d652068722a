// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin console endpoints. Every call carries the admin bearer token.

use super::api::{segment, ApiClient, Auth};
use crate::error::{ClientError, Result};
use crate::models::community::AdminPostsEnvelope;
use crate::models::{
    AdminUser, Analytics, FileUpload, Lead, LeadPage, LeadUpdate, MessageResponse, NewResource,
    Post, Resource, ResourceUpdate,
};
use reqwest::multipart::Form;
use reqwest::Method;

#[derive(Clone)]
pub struct AdminService {
    api: ApiClient,
}

impl AdminService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn users(&self) -> Result<Vec<AdminUser>> {
        self.api.get_json("/admin/users", Auth::Admin).await
    }

    pub async fn analytics(&self) -> Result<Analytics> {
        self.api.get_json("/admin/analytics", Auth::Admin).await
    }

    // ─── Leads ───────────────────────────────────────────────────────────────

    pub async fn leads(&self, page: u32, limit: u32) -> Result<LeadPage> {
        let query = [("page", page), ("limit", limit)];
        self.api
            .get_query("/admin/leads", &query, Auth::Admin)
            .await
    }

    pub async fn lead(&self, lead_id: &str) -> Result<Lead> {
        let path = format!("/admin/get-lead/{}", segment(lead_id));
        self.api.get_json(&path, Auth::Admin).await
    }

    pub async fn update_lead(&self, lead_id: &str, update: &LeadUpdate) -> Result<MessageResponse> {
        let path = format!("/admin/update-leads/{}", segment(lead_id));
        self.api.put_json(&path, update, Auth::Admin).await
    }

    pub async fn delete_lead(&self, lead_id: &str) -> Result<MessageResponse> {
        let path = format!("/admin/leads/{}", segment(lead_id));
        self.api.delete_json(&path, Auth::Admin).await
    }

    /// Import leads from an Excel sheet.
    pub async fn upload_leads(&self, file: FileUpload) -> Result<MessageResponse> {
        if !file.is_excel() {
            return Err(ClientError::Validation(
                "Please upload an Excel file".to_string(),
            ));
        }

        let name = file.file_name.clone();
        let form = Form::new().part("file", file.into_part());
        let response = self
            .api
            .send_multipart(Method::POST, "/admin/leads/upload", form, Auth::Admin)
            .await?;
        tracing::info!(file = %name, "Lead sheet uploaded");
        Ok(response)
    }

    // ─── Resources ───────────────────────────────────────────────────────────

    pub async fn resources(&self) -> Result<Vec<Resource>> {
        self.api.get_json("/admin/resources", Auth::Admin).await
    }

    pub async fn create_resource(&self, resource: NewResource) -> Result<MessageResponse> {
        let form = Form::new()
            .text("title", resource.title)
            .text("description", resource.description)
            .text("type", resource.kind.as_str())
            .part("file", resource.file.into_part());

        self.api
            .send_multipart(Method::POST, "/admin/resources", form, Auth::Admin)
            .await
    }

    /// Edit metadata, or replace the file when `file` is given.
    pub async fn update_resource(
        &self,
        resource_id: &str,
        update: &ResourceUpdate,
        file: Option<FileUpload>,
    ) -> Result<MessageResponse> {
        let path = format!("/admin/resources/{}", segment(resource_id));

        match file {
            None => self.api.put_json(&path, update, Auth::Admin).await,
            Some(file) => {
                let mut form = Form::new();
                if let Some(title) = &update.title {
                    form = form.text("title", title.clone());
                }
                if let Some(description) = &update.description {
                    form = form.text("description", description.clone());
                }
                form = form.part("file", file.into_part());
                self.api
                    .send_multipart(Method::PUT, &path, form, Auth::Admin)
                    .await
            }
        }
    }

    pub async fn set_resource_active(
        &self,
        resource_id: &str,
        active: bool,
    ) -> Result<MessageResponse> {
        let update = ResourceUpdate {
            is_active: Some(active),
            ..Default::default()
        };
        self.update_resource(resource_id, &update, None).await
    }

    pub async fn delete_resource(&self, resource_id: &str) -> Result<MessageResponse> {
        let path = format!("/admin/resources/{}", segment(resource_id));
        self.api.delete_json(&path, Auth::Admin).await
    }

    // ─── Community moderation ────────────────────────────────────────────────

    pub async fn community_posts(&self) -> Result<Vec<Post>> {
        let envelope: AdminPostsEnvelope = self
            .api
            .get_json("/admin/community/all", Auth::Admin)
            .await?;
        Ok(envelope.into_posts())
    }

    pub async fn delete_post(&self, post_id: &str) -> Result<MessageResponse> {
        let path = format!("/admin/community/post/{}", segment(post_id));
        self.api.delete_json(&path, Auth::Admin).await
    }

    pub async fn delete_comment(&self, comment_id: &str) -> Result<MessageResponse> {
        let path = format!("/admin/community/comment/{}", segment(comment_id));
        self.api.delete_json(&path, Auth::Admin).await
    }
}
