// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User-facing lead endpoints: browse, unlock, bulk unlock.

use super::api::{segment, ApiClient, Auth};
use crate::error::Result;
use crate::models::lead::BulkAccessRequest;
use crate::models::{Lead, LeadPage, MessageResponse};

#[derive(Clone)]
pub struct LeadsService {
    api: ApiClient,
}

impl LeadsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// All leads, paginated (1-indexed).
    pub async fn list(&self, page: u32, limit: u32) -> Result<LeadPage> {
        let query = [("page", page), ("limit", limit)];
        self.api
            .get_query("/auth/leads", &query, Auth::Session)
            .await
    }

    /// Leads the current user has unlocked.
    pub async fn list_accessed(&self, page: u32, limit: u32) -> Result<LeadPage> {
        let query = [("page", page), ("limit", limit)];
        // Path spelling is the backend's.
        self.api
            .get_query("/auth/get-accesse-leads/accessed", &query, Auth::Session)
            .await
    }

    /// Unlock one lead, spending one token.
    pub async fn access(&self, lead_id: &str) -> Result<MessageResponse> {
        let path = format!("/auth/leads/{}/access", segment(lead_id));
        let response = self.api.post_empty(&path, Auth::Session).await?;
        tracing::info!(lead_id, "Lead unlocked");
        Ok(response)
    }

    /// Unlock several leads in one request. The backend treats the batch as
    /// all-or-nothing.
    pub async fn bulk_access(&self, lead_ids: &[String]) -> Result<MessageResponse> {
        let body = BulkAccessRequest {
            lead_ids: lead_ids.to_vec(),
        };
        let response = self
            .api
            .post_json("/auth/leads/bulk-access", &body, Auth::Session)
            .await?;
        tracing::info!(count = lead_ids.len(), "Leads bulk unlocked");
        Ok(response)
    }

    /// Full details of an unlocked lead.
    pub async fn get_accessed(&self, lead_id: &str) -> Result<Lead> {
        let path = format!("/auth/leads/get-accessed/{}", segment(lead_id));
        self.api.get_json(&path, Auth::Session).await
    }
}
