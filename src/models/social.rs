//! Linked social media accounts.

use super::not_blank;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Instagram,
    Facebook,
    Twitter,
    Linkedin,
    Youtube,
    #[serde(other)]
    Other,
}

/// A linked account. `id` is absent until the backend stores it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SocialAccount {
    #[serde(alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub platform: Platform,
    #[validate(custom(function = "not_blank", message = "Please fill all fields"))]
    pub username: String,
    #[validate(custom(function = "not_blank", message = "Please fill all fields"))]
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SocialAccountList {
    #[serde(default)]
    pub accounts: Vec<SocialAccount>,
}
