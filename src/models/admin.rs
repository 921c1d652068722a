//! Admin console models: user list and platform analytics.

use super::Plan;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row of `GET /admin/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub subscription: Option<AdminSubscription>,
    #[serde(default)]
    pub tokens: i64,
    #[serde(default)]
    pub monthly_tokens_remaining: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSubscription {
    /// Populated plan; absent for users without a plan
    pub plan_id: Option<Plan>,
    pub end_date: Option<String>,
}

impl AdminUser {
    /// Users count as active when they hold a plan.
    pub fn has_plan(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(|s| s.plan_id.is_some())
    }
}

/// Response of `GET /admin/analytics`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Analytics {
    pub users: UserAnalytics,
    pub orders: OrderAnalytics,
    pub revenue: RevenueAnalytics,
    pub tokens: TokenAnalytics,
    pub resources: ResourceAnalytics,
    pub leads: LeadAnalytics,
    pub recent_users: Vec<RecentUser>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserAnalytics {
    pub total: u64,
    pub new_today: u64,
    pub new_this_week: u64,
    pub new_this_month: u64,
    pub active_subscriptions: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderAnalytics {
    pub total: u64,
    pub completed: u64,
    pub pending: u64,
    pub failed: u64,
    pub today: u64,
    pub this_month: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueAnalytics {
    pub total: f64,
    pub monthly: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenAnalytics {
    pub distributed: i64,
    pub used: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceAnalytics {
    pub total: u64,
    pub active: u64,
    pub by_type: Vec<TypeCount>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeCount {
    #[serde(rename = "_id")]
    pub kind: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadAnalytics {
    pub total: u64,
    pub active: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecentUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: String,
}
