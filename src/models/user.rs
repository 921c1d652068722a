//! User profile, token balance and subscription models.

use serde::{Deserialize, Serialize};

/// Basic user identity as returned inside `/auth/profile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    /// Backend user ID
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    /// Avatar image URL
    pub avatar: Option<String>,
}

/// Token balance. Tokens gate access to leads and resources and are
/// decremented by the backend, never by this client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenBalance {
    /// Tokens left today
    pub daily: i64,
    pub daily_limit: i64,
    pub daily_used: i64,
    pub total_used: i64,
    pub monthly_total: i64,
    pub monthly_used: i64,
    pub monthly_remaining: i64,
}

/// Subscription plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    #[serde(alias = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

/// Subscription state of the current user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subscription {
    pub plan: Option<Plan>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_active: bool,
}

/// Response of `GET /auth/profile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user: UserSummary,
    #[serde(default)]
    pub tokens: TokenBalance,
    #[serde(default)]
    pub subscription: Subscription,
    pub referral_code: Option<String>,
}
