// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP transport for the ClientSure API.
//!
//! Handles:
//! - Base URL joining and per-request timeouts
//! - Cookie session (user surface) and bearer token (admin surface)
//! - Status checking with server error message extraction
//! - Empty-body tolerance on success

use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::session::AdminSession;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Which credentials a request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// Cookie session only (user pages, login endpoints)
    Session,
    /// Admin bearer token; the call fails locally when none is stored
    Admin,
}

/// Low-level ClientSure API client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    admin: AdminSession,
}

impl ApiClient {
    /// Create a client for `config.api_url` sharing `admin` for bearer auth.
    pub fn new(config: &Config, admin: AdminSession) -> Result<Self> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::Internal(anyhow::anyhow!("HTTP client setup: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_url.clone(),
            admin,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn admin_session(&self) -> &AdminSession {
        &self.admin
    }

    /// GET with JSON response.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, auth: Auth) -> Result<T> {
        let request = self.request(Method::GET, path, auth)?;
        self.send(request, path).await
    }

    /// GET with query parameters.
    pub async fn get_query<T, Q>(&self, path: &str, query: &Q, auth: Auth) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.request(Method::GET, path, auth)?.query(query);
        self.send(request, path).await
    }

    /// POST a JSON body.
    pub async fn post_json<T, B>(&self, path: &str, body: &B, auth: Auth) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::POST, path, auth)?.json(body);
        self.send(request, path).await
    }

    /// POST without a body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str, auth: Auth) -> Result<T> {
        let request = self.request(Method::POST, path, auth)?;
        self.send(request, path).await
    }

    /// PUT a JSON body.
    pub async fn put_json<T, B>(&self, path: &str, body: &B, auth: Auth) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::PUT, path, auth)?.json(body);
        self.send(request, path).await
    }

    /// PUT without a body.
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str, auth: Auth) -> Result<T> {
        let request = self.request(Method::PUT, path, auth)?;
        self.send(request, path).await
    }

    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str, auth: Auth) -> Result<T> {
        let request = self.request(Method::DELETE, path, auth)?;
        self.send(request, path).await
    }

    /// Send a multipart form with POST or PUT.
    pub async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: reqwest::multipart::Form,
        auth: Auth,
    ) -> Result<T> {
        let request = self.request(method, path, auth)?.multipart(form);
        self.send(request, path).await
    }

    /// Build a request with the credentials `auth` asks for.
    fn request(&self, method: Method, path: &str, auth: Auth) -> Result<RequestBuilder> {
        let url = format!("{}{}", self.base_url, path);
        let request = self.http.request(method, url);

        match auth {
            Auth::Session => Ok(request),
            Auth::Admin => {
                let token = self.admin.token().ok_or_else(|| {
                    tracing::warn!(path, "Admin request without a valid admin token");
                    ClientError::Unauthorized
                })?;
                Ok(request.bearer_auth(token))
            }
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, path: &str) -> Result<T> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(path, error = %e, "Request failed");
            ClientError::Network(e.to_string())
        })?;

        check_response_json(response, path).await
    }
}

/// Check response status and parse the JSON body.
///
/// An empty success body is read as `{}` so acknowledgement types with
/// defaulted fields still decode.
async fn check_response_json<T: DeserializeOwned>(
    response: reqwest::Response,
    path: &str,
) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(path, status = status.as_u16(), "API returned error status");
        return Err(ClientError::from_status(status.as_u16(), &body));
    }

    let text = response.text().await?;
    let text = if text.trim().is_empty() { "{}" } else { text.as_str() };

    serde_json::from_str(text).map_err(|e| {
        tracing::error!(path, error = %e, "Invalid JSON response");
        ClientError::Decode(format!("{}: {}", path, e))
    })
}

/// Percent-encode a value for use as one path segment.
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
