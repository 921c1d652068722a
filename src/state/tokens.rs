//! Dashboard view of the token balance and subscription.

use crate::models::Profile;
use serde::Serialize;

/// Numbers shown on the user dashboard and profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TokenDashboard {
    /// Tokens left today
    pub available: i64,
    pub daily_limit: i64,
    pub used_today: i64,
    pub used_total: i64,
    pub monthly_total: i64,
    pub monthly_used: i64,
    pub monthly_remaining: i64,
    pub subscription_active: bool,
    pub plan_name: Option<String>,
    pub subscription_end: Option<String>,
}

impl TokenDashboard {
    pub fn from_profile(profile: &Profile) -> Self {
        let tokens = &profile.tokens;
        let subscription = &profile.subscription;

        Self {
            available: tokens.daily,
            daily_limit: tokens.daily_limit,
            used_today: tokens.daily_used,
            used_total: tokens.total_used,
            monthly_total: tokens.monthly_total,
            monthly_used: tokens.monthly_used,
            monthly_remaining: tokens.monthly_remaining,
            subscription_active: subscription.is_active,
            plan_name: subscription.plan.as_ref().map(|p| p.name.clone()),
            subscription_end: subscription.end_date.clone(),
        }
    }

    /// Share of today's allowance used, 0-100. Zero when there is no limit.
    pub fn daily_usage_percent(&self) -> f64 {
        percent(self.used_today, self.daily_limit)
    }

    /// Share of this month's allocation used, 0-100.
    pub fn monthly_usage_percent(&self) -> f64 {
        percent(self.monthly_used, self.monthly_total)
    }

    /// Whether a purchase of `cost` tokens fits today's balance.
    pub fn can_afford(&self, cost: usize) -> bool {
        i64::try_from(cost).is_ok_and(|c| c <= self.available)
    }
}

fn percent(part: i64, whole: i64) -> f64 {
    if whole <= 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 100.0).clamp(0.0, 100.0)
}
