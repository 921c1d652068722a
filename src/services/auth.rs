// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login, password reset and profile endpoints.

use super::api::{segment, ApiClient, Auth};
use crate::error::{ClientError, Result};
use crate::models::auth::ResetPasswordRequest;
use crate::models::{
    first_validation_message, AdminLoginRequest, AdminLoginResponse, LoginRequest,
    MessageResponse, Profile, ProfileUpdate, ResetPasswordForm,
};
use reqwest::multipart::Form;
use reqwest::Method;
use validator::Validate;

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// User login. The backend answers with a session cookie which the
    /// client's cookie store keeps for later calls.
    pub async fn login(&self, request: &LoginRequest) -> Result<MessageResponse> {
        request
            .validate()
            .map_err(|e| ClientError::Validation(first_validation_message(&e, &["email"])))?;

        let response = self
            .api
            .post_json("/auth/login", request, Auth::Session)
            .await?;
        tracing::info!(email = %request.email, "User login successful");
        Ok(response)
    }

    /// Admin login. A returned token is stored in the admin session.
    pub async fn admin_login(&self, request: &AdminLoginRequest) -> Result<AdminLoginResponse> {
        request
            .validate()
            .map_err(|e| ClientError::Validation(first_validation_message(&e, &["username"])))?;

        let response: AdminLoginResponse = self
            .api
            .post_json("/admin/login", request, Auth::Session)
            .await?;

        match &response.token {
            Some(token) => {
                self.api.admin_session().set_token(token.clone());
                tracing::info!(username = %request.username, "Admin login successful");
            }
            None => tracing::warn!("Admin login returned no token"),
        }
        Ok(response)
    }

    /// Forget the admin token.
    pub fn logout_admin(&self) {
        self.api.admin_session().clear();
        tracing::info!("Admin session cleared");
    }

    /// Reset a password using the token from the reset link.
    pub async fn reset_password(
        &self,
        reset_token: &str,
        form: &ResetPasswordForm,
    ) -> Result<MessageResponse> {
        if reset_token.trim().is_empty() {
            return Err(ClientError::Validation("Invalid reset link".to_string()));
        }
        form.check()?;

        let path = format!("/auth/reset-password/{}", segment(reset_token));
        let body = ResetPasswordRequest {
            password: &form.password,
        };
        self.api.post_json(&path, &body, Auth::Session).await
    }

    /// Current user's profile, token balance and subscription.
    pub async fn profile(&self) -> Result<Profile> {
        self.api.get_json("/auth/profile", Auth::Session).await
    }

    /// Update name, phone and optionally the avatar.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<MessageResponse> {
        update
            .validate()
            .map_err(|e| ClientError::Validation(first_validation_message(&e, &["name"])))?;

        let mut form = Form::new()
            .text("name", update.name.trim().to_string())
            .text("phone", update.phone.trim().to_string());
        if let Some(avatar) = update.avatar {
            form = form.part("avatar", avatar.into_part());
        }

        self.api
            .send_multipart(Method::PUT, "/auth/profile", form, Auth::Session)
            .await
    }
}
