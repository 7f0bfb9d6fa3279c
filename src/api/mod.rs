//! API Module
//!
//! Typed wrappers over the loyalty REST API.
//!
//! # Endpoints
//! - Session: `signup`, `login`, `logout`, `forgot_password`, `reset_password`
//! - User: `list_users`, `get_user`, `update_user`, email verification,
//!   avatar upload, Shopify multipass, platform disconnect, notifications,
//!   transactions
//! - Billing: `update_membership`, `confirm_update_membership`, `manage_billing`
//! - Catalog: team, memberships, tiers, creators, missions, shop items, events

pub mod auth;
pub mod billing;
pub mod catalog;
pub mod client;
pub mod user;

pub use client::{LoyaltyClient, MEDIA_BASE_URL};
