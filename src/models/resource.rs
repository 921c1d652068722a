//! Resource models (course videos and PDF documents).

use super::FileUpload;
use serde::{Deserialize, Serialize};

/// Resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Video,
    Pdf,
    #[serde(other)]
    Other,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Video => "video",
            ResourceType::Pdf => "pdf",
            ResourceType::Other => "other",
        }
    }
}

/// A token-gated resource. `url` and `content` are only present once unlocked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    #[serde(default)]
    pub description: String,
    pub thumbnail_url: Option<String>,
    pub url: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub is_accessed_by_user: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: Option<String>,
}

fn default_active() -> bool {
    true
}

/// Response of `POST /auth/access/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessedResource {
    pub resource: Option<AccessedResourceLink>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccessedResourceLink {
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResourcesEnvelope {
    #[serde(default)]
    pub resources: Vec<Resource>,
}

/// New resource upload (admin, multipart).
#[derive(Debug, Clone)]
pub struct NewResource {
    pub title: String,
    pub description: String,
    pub kind: ResourceType,
    pub file: FileUpload,
}

/// JSON edit for an existing resource. Unset fields are omitted.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
