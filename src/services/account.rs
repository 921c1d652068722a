//! Account extras: notifications, referrals, plan purchase, linked social
//! accounts and the AI message composer.

use super::api::{segment, ApiClient, Auth};
use crate::error::{ClientError, Result};
use crate::models::notification::{NotificationCount, NotificationList};
use crate::models::social::SocialAccountList;
use crate::models::{
    first_validation_message, ComposeRequest, ComposeResponse, MessageResponse, Notification,
    OrderRequest, OrderResponse, ReferralSummary, ReferralValidation, SocialAccount,
};
use validator::Validate;

/// Referral codes shorter than this are never sent for validation.
pub const MIN_REFERRAL_CODE_LEN: usize = 6;

#[derive(Clone)]
pub struct AccountService {
    api: ApiClient,
}

impl AccountService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    // ─── Notifications ───────────────────────────────────────────────────────

    pub async fn unread_count(&self) -> Result<u64> {
        let body: NotificationCount = self
            .api
            .get_json("/notifications/count", Auth::Session)
            .await?;
        Ok(body.count)
    }

    pub async fn notifications(&self, limit: u32) -> Result<Vec<Notification>> {
        let body: NotificationList = self
            .api
            .get_query("/notifications", &[("limit", limit)], Auth::Session)
            .await?;
        Ok(body.notifications)
    }

    pub async fn mark_all_read(&self) -> Result<MessageResponse> {
        self.api
            .put_empty("/notifications/mark-all-read", Auth::Session)
            .await
    }

    // ─── Referrals ───────────────────────────────────────────────────────────

    /// Check a referral code. Codes are upper-cased; short codes return
    /// `None` without a request.
    pub async fn validate_referral(&self, code: &str) -> Result<Option<ReferralValidation>> {
        let code = code.trim().to_uppercase();
        if code.chars().count() < MIN_REFERRAL_CODE_LEN {
            return Ok(None);
        }

        let path = format!("/referrals/validate/{}", segment(&code));
        let validation = self.api.get_json(&path, Auth::Session).await?;
        Ok(Some(validation))
    }

    pub async fn my_referrals(&self) -> Result<ReferralSummary> {
        self.api
            .get_json("/referrals/my-referrals", Auth::Session)
            .await
    }

    // ─── Payments ────────────────────────────────────────────────────────────

    /// Create a plan order and get the payment gateway checkout URL.
    pub async fn create_order(&self, order: &OrderRequest) -> Result<OrderResponse> {
        order
            .validate()
            .map_err(|e| ClientError::Validation(first_validation_message(&e, &["name", "email"])))?;

        let mut order = order.clone();
        order.referral_code = order
            .referral_code
            .map(|c| c.trim().to_uppercase())
            .filter(|c| !c.is_empty());

        let response = self
            .api
            .post_json("/payments/create-order", &order, Auth::Session)
            .await?;
        tracing::info!(plan = %order.plan_id, "Order created");
        Ok(response)
    }

    // ─── Social accounts ─────────────────────────────────────────────────────

    pub async fn social_accounts(&self) -> Result<Vec<SocialAccount>> {
        let body: SocialAccountList = self
            .api
            .get_json("/user/social-accounts", Auth::Session)
            .await?;
        Ok(body.accounts)
    }

    pub async fn link_social_account(&self, account: &SocialAccount) -> Result<MessageResponse> {
        account
            .validate()
            .map_err(|e| ClientError::Validation(first_validation_message(&e, &[])))?;
        self.api
            .post_json("/user/social-accounts", account, Auth::Session)
            .await
    }

    pub async fn unlink_social_account(&self, account_id: &str) -> Result<MessageResponse> {
        let path = format!("/user/social-accounts/{}", segment(account_id));
        self.api.delete_json(&path, Auth::Session).await
    }

    // ─── Composer ────────────────────────────────────────────────────────────

    /// Generate an outreach message. Details are capped before sending.
    pub async fn compose(&self, mut request: ComposeRequest) -> Result<String> {
        let (details, _) = crate::state::compose::limit_words(
            &request.details.content,
            crate::state::compose::MAX_COMPOSE_WORDS,
        );
        request.details.content = details;

        let response: ComposeResponse = self
            .api
            .post_json("/compose", &request, Auth::Session)
            .await?;
        Ok(response
            .text
            .unwrap_or_else(|| "No response received".to_string()))
    }
}
