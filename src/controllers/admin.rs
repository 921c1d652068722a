// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin console orchestration.
//!
//! Reads never fail outward: a missing admin login or a failed request
//! surfaces a message and yields an empty result, the way the console
//! renders an empty table.

use super::notifier::Notifier;
use crate::error::{ClientError, Result};
use crate::models::{AdminUser, Analytics, FileUpload, LeadPage, MessageResponse, Post, Resource};
use crate::services::AdminService;
use std::sync::Arc;

pub const LOGIN_REQUIRED: &str = "Please login as admin first";

#[derive(Clone)]
pub struct AdminController {
    service: AdminService,
    notifier: Arc<dyn Notifier>,
    leads_page_size: u32,
}

impl AdminController {
    pub fn new(service: AdminService, notifier: Arc<dyn Notifier>, leads_page_size: u32) -> Self {
        Self {
            service,
            notifier,
            leads_page_size,
        }
    }

    // ─── Community moderation ────────────────────────────────────────────────

    pub async fn community_posts(&self) -> Vec<Post> {
        match self.service.community_posts().await {
            Ok(posts) => {
                if posts.is_empty() {
                    self.notifier.info("No community posts found");
                }
                tracing::debug!(count = posts.len(), "Admin community posts loaded");
                posts
            }
            Err(e) => {
                tracing::warn!(error = %e, "Admin community load failed");
                if e.is_auth_error() {
                    self.notifier
                        .error("Failed to load community posts. Please login as admin first.");
                } else {
                    self.notifier
                        .error("Error loading community posts. Please check your connection.");
                }
                Vec::new()
            }
        }
    }

    pub async fn delete_post(&self, post_id: &str) -> Result<()> {
        match self.service.delete_post(post_id).await {
            Ok(response) => {
                tracing::info!(post_id, "Post removed by admin");
                self.notifier.success(
                    &response.message_or("Post deleted successfully (5 points deducted from user)"),
                );
                Ok(())
            }
            Err(e) => {
                self.notifier.error("Error deleting post");
                Err(e)
            }
        }
    }

    pub async fn delete_comment(&self, comment_id: &str) -> Result<()> {
        match self.service.delete_comment(comment_id).await {
            Ok(response) => {
                tracing::info!(comment_id, "Comment removed by admin");
                self.notifier.success(
                    &response
                        .message_or("Comment deleted successfully (2 points deducted from user)"),
                );
                Ok(())
            }
            Err(e) => {
                self.notifier.error("Error deleting comment");
                Err(e)
            }
        }
    }

    // ─── Users, analytics, resources ─────────────────────────────────────────

    pub async fn users(&self) -> Vec<AdminUser> {
        let result = self.service.users().await;
        self.degrade(result, "users")
    }

    pub async fn analytics(&self) -> Analytics {
        let result = self.service.analytics().await;
        self.degrade(result, "analytics")
    }

    pub async fn resources(&self) -> Vec<Resource> {
        let result = self.service.resources().await;
        self.degrade(result, "resources")
    }

    // ─── Leads ───────────────────────────────────────────────────────────────

    pub async fn leads(&self, page: u32) -> LeadPage {
        let result = self.service.leads(page, self.leads_page_size).await;
        self.degrade(result, "leads")
    }

    /// Upload an Excel lead sheet. Non-Excel files are refused locally.
    pub async fn upload_leads(&self, file: FileUpload) -> Result<MessageResponse> {
        match self.service.upload_leads(file).await {
            Ok(response) => {
                self.notifier.success(&response.message_or("Leads uploaded"));
                Ok(response)
            }
            Err(e) => {
                self.notifier.error(&e.user_message("Upload failed"));
                Err(e)
            }
        }
    }

    fn degrade<T: Default>(&self, result: Result<T>, what: &str) -> T {
        match result {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(what, error = %e, "Admin load failed");
                self.notifier.error(&load_failure_message(&e, what));
                T::default()
            }
        }
    }
}

fn load_failure_message(err: &ClientError, what: &str) -> String {
    if err.is_auth_error() {
        LOGIN_REQUIRED.to_string()
    } else {
        err.user_message(&format!("Failed to load {}", what))
    }
}
