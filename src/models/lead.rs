// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Lead models for the user and admin lead views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sales lead. Restricted fields are only filled once the current user
/// has unlocked the lead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Backend document ID (`id` on user endpoints, `_id` on admin ones)
    #[serde(alias = "_id")]
    pub id: String,
    /// Human-facing lead number from the import sheet
    #[serde(default)]
    pub lead_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub category: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub google_map_link: Option<String>,
    pub instagram: Option<String>,
    pub address_street: Option<String>,
    pub last_verified_at: Option<String>,
    /// Whether the current user already unlocked this lead
    #[serde(default)]
    pub is_accessed_by_user: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Pagination block returned with paged lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default = "default_total_pages")]
    pub total_pages: u32,
    #[serde(default)]
    pub total_items: u64,
}

fn default_total_pages() -> u32 {
    1
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            total_pages: 1,
            total_items: 0,
        }
    }
}

/// One page of leads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeadPage {
    #[serde(default)]
    pub leads: Vec<Lead>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Request body for `POST /auth/leads/bulk-access`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkAccessRequest {
    pub lead_ids: Vec<String>,
}

/// Partial lead edit sent by the admin console. Unset fields are omitted.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_street: Option<String>,
}
