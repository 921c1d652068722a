//! Notification models.

use serde::{Deserialize, Serialize};

/// A user notification (likes, comments, referral events).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(alias = "_id")]
    pub id: String,
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: String,
    pub from_user: Option<NotificationActor>,
    pub post_id: Option<NotificationPost>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationActor {
    pub name: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPost {
    pub post_title: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct NotificationCount {
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct NotificationList {
    #[serde(default)]
    pub notifications: Vec<Notification>,
}
