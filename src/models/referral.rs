//! Referral code models.

use serde::{Deserialize, Serialize};

/// Response of `GET /referrals/validate/:code`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReferralValidation {
    #[serde(default)]
    pub valid: bool,
    pub referrer: Option<Referrer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Referrer {
    pub name: String,
}

/// Response of `GET /referrals/my-referrals`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralSummary {
    pub referral_code: String,
    #[serde(default)]
    pub stats: ReferralStats,
    #[serde(default)]
    pub referrals: Vec<Referral>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferralStats {
    pub total_referrals: u32,
    pub active_referrals: u32,
    pub total_earnings: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referral {
    pub user: ReferredUser,
    pub joined_at: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub subscription_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferredUser {
    pub name: String,
    pub email: String,
    pub created_at: String,
}
