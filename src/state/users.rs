//! Admin user list totals.

use crate::models::AdminUser;
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

/// Totals shown above the admin user table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub total: usize,
    /// Users with a subscription plan
    pub active: usize,
    pub inactive: usize,
    /// Joined in the same calendar month and year as `now`
    pub new_this_month: usize,
}

impl UserStats {
    pub fn from_users(users: &[AdminUser], now: DateTime<Utc>) -> Self {
        let active = users.iter().filter(|u| u.has_plan()).count();
        let new_this_month = users
            .iter()
            .filter(|u| u.created_at.year() == now.year() && u.created_at.month() == now.month())
            .count();

        Self {
            total: users.len(),
            active,
            inactive: users.len() - active,
            new_this_month,
        }
    }
}
