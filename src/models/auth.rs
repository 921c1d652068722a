//! Login, password reset and profile edit forms.

use super::{first_validation_message, not_blank, FileUpload};
use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// User login (`POST /auth/login`). The session comes back as a cookie.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Admin login (`POST /admin/login`).
#[derive(Debug, Clone, Serialize, Validate)]
pub struct AdminLoginRequest {
    #[validate(custom(function = "not_blank", message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminLoginResponse {
    pub token: Option<String>,
    pub message: Option<String>,
}

/// Password reset form. Only `password` goes over the wire.
#[derive(Debug, Clone, Validate)]
pub struct ResetPasswordForm {
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

impl ResetPasswordForm {
    /// Validate, reporting a mismatch before a length problem.
    pub fn check(&self) -> Result<()> {
        self.validate().map_err(|errs| {
            ClientError::Validation(first_validation_message(
                &errs,
                &["confirm_password", "password"],
            ))
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ResetPasswordRequest<'a> {
    pub password: &'a str,
}

/// Profile edit (`PUT /auth/profile`, multipart).
#[derive(Debug, Clone, Validate)]
pub struct ProfileUpdate {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    pub phone: String,
    pub avatar: Option<FileUpload>,
}
