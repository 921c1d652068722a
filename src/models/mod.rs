// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wire models for the ClientSure API.
//!
//! These are transient copies of backend-owned entities. The backend mixes
//! `id` and `_id` for identifiers, so id fields accept both.

pub mod admin;
pub mod auth;
pub mod community;
pub mod compose;
pub mod lead;
pub mod notification;
pub mod payment;
pub mod referral;
pub mod resource;
pub mod social;
pub mod upload;
pub mod user;

pub use admin::{AdminUser, Analytics};
pub use auth::{AdminLoginRequest, AdminLoginResponse, LoginRequest, ProfileUpdate, ResetPasswordForm};
pub use community::{
    Author, Comment, CommunityStats, LeaderboardEntry, Like, NewPost, Post, PostQuery, SortBy,
};
pub use compose::{ComposeRequest, ComposeResponse};
pub use lead::{Lead, LeadPage, LeadUpdate, Pagination};
pub use notification::Notification;
pub use payment::{OrderRequest, OrderResponse};
pub use referral::{ReferralSummary, ReferralValidation};
pub use resource::{NewResource, Resource, ResourceType, ResourceUpdate};
pub use social::{Platform, SocialAccount};
pub use upload::FileUpload;
pub use user::{Plan, Profile, Subscription, TokenBalance, UserSummary};

use serde::{Deserialize, Deserializer};
use validator::{ValidationError, ValidationErrors};

/// Generic acknowledgement body (`{"success": true, "message": "..."}`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageResponse {
    /// The server's message, or `fallback` when it sent none.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Accept either a bare id string or a populated object carrying `_id`/`id`.
pub(crate) fn id_or_object<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdOrObject {
        Id(String),
        Object {
            #[serde(alias = "_id")]
            id: String,
        },
    }

    Ok(match IdOrObject::deserialize(deserializer)? {
        IdOrObject::Id(id) => id,
        IdOrObject::Object { id } => id,
    })
}

/// Field validator rejecting empty or whitespace-only strings.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Pick a single message out of `errors`, checking fields in `order` first.
pub(crate) fn first_validation_message(errors: &ValidationErrors, order: &[&str]) -> String {
    let fields = errors.field_errors();

    let mut names: Vec<&str> = order.to_vec();
    let mut rest: Vec<&str> = fields.keys().map(|k| &**k).collect();
    rest.sort_unstable();
    names.extend(rest);

    names
        .into_iter()
        .filter_map(|name| fields.get(name))
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Please fill all required fields".to_string())
}
