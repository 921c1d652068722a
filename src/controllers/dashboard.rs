//! User dashboard orchestration: token balance, resources, notifications,
//! referrals and plan purchase.

use super::notifier::Notifier;
use crate::error::{ClientError, Result};
use crate::models::{OrderRequest, ReferralValidation, Resource};
use crate::services::{AccountService, AuthService, ResourcesService};
use crate::state::{NotificationInbox, TokenDashboard};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct DashboardController {
    auth: AuthService,
    resources: ResourcesService,
    account: AccountService,
    notifier: Arc<dyn Notifier>,
    inbox: Arc<Mutex<NotificationInbox>>,
}

impl DashboardController {
    pub fn new(
        auth: AuthService,
        resources: ResourcesService,
        account: AccountService,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            auth,
            resources,
            account,
            notifier,
            inbox: Arc::new(Mutex::new(NotificationInbox::default())),
        }
    }

    /// Token and subscription numbers for the current user.
    pub async fn tokens(&self) -> Result<TokenDashboard> {
        let profile = self.auth.profile().await.inspect_err(|e| {
            tracing::warn!(error = %e, "Error loading user stats");
        })?;
        Ok(TokenDashboard::from_profile(&profile))
    }

    /// Resource catalogue; empty on failure.
    pub async fn resources(&self) -> Vec<Resource> {
        match self.resources.list().await {
            Ok(resources) => resources,
            Err(e) => {
                tracing::warn!(error = %e, "Error loading resources");
                Vec::new()
            }
        }
    }

    /// Unlock a resource and return its link when the backend sends one.
    pub async fn access_resource(&self, resource_id: &str) -> Result<Option<String>> {
        match self.resources.access(resource_id).await {
            Ok(accessed) => {
                self.notifier.success("Resource accessed successfully!");
                Ok(accessed.resource.and_then(|r| r.url))
            }
            Err(e) => {
                self.notifier.error(&e.user_message("Failed to access resource"));
                Err(e)
            }
        }
    }

    pub async fn inbox(&self) -> NotificationInbox {
        self.inbox.lock().await.clone()
    }

    /// Refresh unread count and the latest notifications.
    pub async fn load_notifications(&self, limit: u32) -> Result<()> {
        let (count, items) = tokio::try_join!(
            self.account.unread_count(),
            self.account.notifications(limit),
        )
        .inspect_err(|e| tracing::warn!(error = %e, "Error loading notifications"))?;

        let mut inbox = self.inbox.lock().await;
        inbox.set_unread(count);
        inbox.set_items(items);
        Ok(())
    }

    pub async fn mark_all_read(&self) -> Result<()> {
        match self.account.mark_all_read().await {
            Ok(_) => {
                self.inbox.lock().await.mark_all_read();
                self.notifier.success("All notifications marked as read");
                Ok(())
            }
            Err(e) => {
                self.notifier.error(&e.user_message("Failed to mark notifications as read"));
                Err(e)
            }
        }
    }

    /// Check a referral code. Short codes are not checked and yield `None`.
    pub async fn validate_referral(&self, code: &str) -> Option<ReferralValidation> {
        match self.account.validate_referral(code).await {
            Ok(validation) => validation,
            Err(e) => {
                tracing::warn!(error = %e, "Referral validation failed");
                Some(ReferralValidation::default())
            }
        }
    }

    /// Create an order and return the checkout URL to open.
    pub async fn create_order(&self, order: &OrderRequest) -> Result<String> {
        let response = match self.account.create_order(order).await {
            Ok(response) => response,
            Err(e) => {
                self.notifier
                    .error(&e.user_message("Failed to create order. Please try again."));
                return Err(e);
            }
        };

        match response.checkout_url() {
            Some(url) => Ok(url.to_string()),
            None => {
                self.notifier.error("Payment gateway not available");
                Err(ClientError::Api {
                    status: 502,
                    server_message: Some("Payment gateway not available".to_string()),
                    message: None,
                })
            }
        }
    }
}
