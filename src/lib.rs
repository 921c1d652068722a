// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! ClientSure client: async access to the ClientSure lead and resource
//! platform.
//!
//! The backend owns every business rule (token deduction, leaderboard,
//! referral validation). This crate fetches its state, keeps transient
//! local copies, applies optimistic changes and reconciles by re-fetching.

pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod state;
pub mod time_utils;

use config::Config;
use controllers::{
    AdminController, CommunityController, DashboardController, LeadsController, Notifier,
};
use services::{
    AccountService, AdminService, ApiClient, AuthService, CommunityService, LeadsService,
    ResourcesService,
};
use session::{AdminSession, TokenStore};
use std::sync::Arc;

/// Shared client state: configuration, transport and one handle per
/// service. Cheap to clone.
#[derive(Clone)]
pub struct ClientSure {
    pub config: Config,
    pub api: ApiClient,
    pub auth: AuthService,
    pub leads: LeadsService,
    pub resources: ResourcesService,
    pub community: CommunityService,
    pub account: AccountService,
    pub admin: AdminService,
}

impl ClientSure {
    /// Build a client whose admin token persists in `config.admin_token_file`.
    pub fn new(config: Config) -> error::Result<Self> {
        let session = AdminSession::with_store(TokenStore::new(config.admin_token_file.clone()));
        Self::with_session(config, session)
    }

    pub fn with_session(config: Config, session: AdminSession) -> error::Result<Self> {
        let api = ApiClient::new(&config, session)?;
        tracing::debug!(base_url = %api.base_url(), "ClientSure client ready");

        Ok(Self {
            auth: AuthService::new(api.clone()),
            leads: LeadsService::new(api.clone()),
            resources: ResourcesService::new(api.clone()),
            community: CommunityService::new(api.clone()),
            account: AccountService::new(api.clone()),
            admin: AdminService::new(api.clone()),
            api,
            config,
        })
    }

    pub fn community_controller(&self, notifier: Arc<dyn Notifier>) -> CommunityController {
        CommunityController::new(self.community.clone(), self.auth.clone(), notifier)
    }

    pub fn leads_controller(&self, notifier: Arc<dyn Notifier>) -> LeadsController {
        LeadsController::new(
            self.leads.clone(),
            notifier,
            self.config.leads_page_size,
            self.config.bulk_select_limit,
        )
    }

    pub fn admin_controller(&self, notifier: Arc<dyn Notifier>) -> AdminController {
        AdminController::new(
            self.admin.clone(),
            notifier,
            self.config.admin_leads_page_size,
        )
    }

    pub fn dashboard_controller(&self, notifier: Arc<dyn Notifier>) -> DashboardController {
        DashboardController::new(
            self.auth.clone(),
            self.resources.clone(),
            self.account.clone(),
            notifier,
        )
    }
}
