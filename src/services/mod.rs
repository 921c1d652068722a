// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - typed wrappers over the ClientSure HTTP API.

pub mod account;
pub mod admin;
pub mod api;
pub mod auth;
pub mod community;
pub mod leads;
pub mod resources;

pub use account::AccountService;
pub use admin::AdminService;
pub use api::{ApiClient, Auth};
pub use auth::AuthService;
pub use community::CommunityService;
pub use leads::LeadsService;
pub use resources::ResourcesService;
