//! Response DTOs for the loyalty API
//!
//! Envelopes wrapping the entities of each endpoint.

use serde::{Deserialize, Serialize};

use crate::models::types::{
    Creator, Event, LoyaltyMembership, LoyaltyTier, Mission, Notification, ShopItem, Team,
    Transaction, User,
};

/// Response of `GET /`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamResponse {
    pub team: Team,
}

/// Response of `POST /login`, `POST /signup` and `POST /password/reset`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthResponse {
    pub user: Option<User>,
    /// The session token, stored by the client when present
    pub token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsersResponse {
    /// Leaderboard, most points first (top 100)
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserResponse {
    pub user: User,
}

/// Response of `GET /resource`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadAvatarResponse {
    /// The URL to upload the image to
    pub url: String,
    pub resource_id: u64,
}

/// A link the caller should open or redirect to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HrefResponse {
    pub href: Option<String>,
}

/// Response of `GET /billing/update`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MembershipUpdateResponse {
    /// Amount due in cents; when present the user must confirm the change
    pub amount_due: Option<u64>,
    /// When present, redirect here immediately
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MembershipsResponse {
    pub memberships: Vec<LoyaltyMembership>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MembershipResponse {
    pub membership: LoyaltyMembership,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiersResponse {
    pub tiers: Vec<LoyaltyTier>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierResponse {
    pub tier: LoyaltyTier,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatorsResponse {
    pub creators: Vec<Creator>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionsResponse {
    pub missions: Vec<Mission>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionResponse {
    pub mission: Mission,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopItemsResponse {
    pub shop_items: Vec<ShopItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopItemResponse {
    pub shop_item: ShopItem,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventsResponse {
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventResponse {
    pub event: Event,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
}

/// Error body shape shown to callers for all error conditions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
