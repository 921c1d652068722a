//! Plan purchase (order creation) models.

use super::not_blank;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /payments/create-order`.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub plan_id: String,
    #[validate(custom(function = "not_blank", message = "Full name is required"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(custom(function = "not_blank", message = "Phone number is required"))]
    pub phone: String,
    pub plan_price: String,
    pub plan_name: String,
    /// Sent as `null` when empty
    pub referral_code: Option<String>,
}

/// Response of `POST /payments/create-order`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub payment_payload: Option<PaymentPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPayload {
    pub checkout_url: Option<String>,
}

impl OrderResponse {
    /// Gateway checkout URL, if the backend returned one.
    pub fn checkout_url(&self) -> Option<&str> {
        self.payment_payload
            .as_ref()
            .and_then(|p| p.checkout_url.as_deref())
            .filter(|u| !u.is_empty())
    }
}
