//! AI outreach message composer models.

use serde::{Deserialize, Serialize};

/// Request body for `POST /compose`.
#[derive(Debug, Clone, Serialize)]
pub struct ComposeRequest {
    /// Target channel, e.g. "email" or "linkedin"
    pub channel: String,
    pub industry: String,
    pub tone: String,
    pub goal: String,
    pub language: String,
    pub details: ComposeDetails,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComposeDetails {
    pub content: String,
}

impl ComposeRequest {
    /// Defaults matching the composer form.
    pub fn new(channel: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            industry: String::new(),
            tone: "friendly".to_string(),
            goal: "book a call".to_string(),
            language: "en".to_string(),
            details: ComposeDetails {
                content: details.into(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComposeResponse {
    pub text: Option<String>,
}
