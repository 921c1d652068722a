// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin bearer token storage.
//!
//! The admin console authenticates with a bearer token issued by
//! `/admin/login`. It is kept in memory and mirrored to a small file so a
//! later run can reuse it. The user surface relies on the cookie session
//! held by the HTTP client instead.

use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// The only claim we read. Signatures are the server's business.
#[derive(Debug, Deserialize)]
struct ExpiryClaims {
    exp: Option<i64>,
}

/// File-backed token persistence.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored token. A missing or empty file means no token.
    pub fn load(&self) -> std::io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn save(&self, token: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, token)
    }

    pub fn clear(&self) -> std::io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

/// Shared admin session. Cloning shares the same token.
#[derive(Debug, Clone, Default)]
pub struct AdminSession {
    token: Arc<RwLock<Option<String>>>,
    store: Option<TokenStore>,
}

impl AdminSession {
    /// In-memory session with no persistence.
    pub fn ephemeral() -> Self {
        Self::default()
    }

    /// Session backed by `store`, seeded with whatever it holds.
    pub fn with_store(store: TokenStore) -> Self {
        let initial = match store.load() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, path = %store.path().display(), "Failed to read admin token");
                None
            }
        };

        Self {
            token: Arc::new(RwLock::new(initial)),
            store: Some(store),
        }
    }

    /// Current token, or `None` when absent or past its `exp` claim.
    pub fn token(&self) -> Option<String> {
        let guard = self.token.read().unwrap_or_else(|e| e.into_inner());
        let token = guard.as_ref()?;

        if is_expired(token, chrono::Utc::now().timestamp()) {
            tracing::debug!("Stored admin token has expired");
            return None;
        }
        Some(token.clone())
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    /// Replace the token and persist it.
    pub fn set_token(&self, token: String) {
        if let Some(store) = &self.store {
            if let Err(e) = store.save(&token) {
                tracing::warn!(error = %e, "Failed to persist admin token");
            }
        }
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token);
    }

    pub fn clear(&self) {
        if let Some(store) = &self.store {
            if let Err(e) = store.clear() {
                tracing::warn!(error = %e, "Failed to remove admin token file");
            }
        }
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

/// Whether a JWT's `exp` claim is at or before `now`.
///
/// Tokens that are not JWTs, or carry no `exp`, never expire locally.
pub fn is_expired(token: &str, now: i64) -> bool {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    match decode::<ExpiryClaims>(token, &DecodingKey::from_secret(&[]), &validation) {
        Ok(data) => data.claims.exp.is_some_and(|exp| exp <= now),
        Err(_) => false,
    }
}
