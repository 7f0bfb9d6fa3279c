//! Domain entities returned by the loyalty API
//!
//! Every struct decodes from partial payloads: missing fields take their
//! default value.

use serde::{Deserialize, Serialize};

/// A team
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Team {
    /// The name of the team
    pub name: String,
    /// The name of the loyalty points
    pub currency_name: String,
    pub loyalty_memberships: Vec<LoyaltyMembership>,
    pub loyalty_tiers: Vec<LoyaltyTier>,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub url: String,
    /// The label for the call to action button
    pub call_to_action: String,
    pub location: String,
    /// Unix timestamp of start of event
    pub start: i64,
    /// Unix timestamp of end of event
    pub end: i64,
    /// `completed`, `upcoming` or `ongoing`
    pub status: String,
    pub resource_id: Option<u64>,
    pub tags: Vec<Tag>,
}

/// Membership to a loyalty team
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoyaltyMembership {
    pub id: u64,
    pub name: String,
    pub description: String,
    /// The cost of the membership per month in cents
    pub price_month: u64,
    /// The cost of the membership per year in cents
    pub price_year: u64,
    /// The loyalty points multiplier for this membership
    pub gold_multiplier: f64,
    pub resource_id: Option<u64>,
    pub badge_resource_id: Option<u64>,
}

/// A subscription level for a user to a team
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoyaltyTier {
    pub id: u64,
    pub name: String,
    pub description: String,
    /// The points required to achieve tier
    pub gold: i64,
    pub resource_id: Option<u64>,
    pub badge_resource_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Mission {
    pub id: u64,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// The number of loyalty points rewarded
    pub reward: i64,
    pub resource_id: Option<u64>,
    pub tags: Vec<Tag>,
    pub secret: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailUser {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub chat_name: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: Option<String>,
    /// URL to the user avatar
    pub avatar: String,
    pub avatar_resource_id: Option<u64>,
    pub created_at: String,
    pub updated_at: String,
    /// Date of birth formatted as MM/DD/YYYY
    pub date_of_birth: String,
    /// Loyalty points currently available
    pub gold: i64,
    /// Loyalty points earned all time
    pub gold_total: i64,
    /// Loyalty points spent
    pub gold_spent: i64,
    pub loyalty_membership: Option<LoyaltyMembership>,
    pub loyalty_membership_id: Option<u64>,
    pub loyalty_tier: Option<LoyaltyTier>,
    pub loyalty_tier_id: Option<u64>,
    /// The last time the user read the notifications, as an ISO date
    pub notifications: Option<String>,
    pub shipping_address_city: String,
    pub shipping_address_country: String,
    pub shipping_address_name: String,
    pub shipping_address_state: String,
    pub shipping_address_street: String,
    pub shipping_address_suite: String,
    pub shipping_address_zip: String,
    pub tags: Vec<Tag>,
    pub email_user: Option<EmailUser>,
    pub email_verified: bool,
    pub country: Option<String>,
    pub city: Option<String>,
}

/// Fields shared by every streaming-platform connection of a creator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionStatus {
    pub enabled: bool,
    /// True if the connection is currently live
    pub online: bool,
    pub current_viewers: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TwitchConnection {
    #[serde(flatten)]
    pub status: ConnectionStatus,
    pub twitch_id: String,
    pub twitch_logo: String,
    pub twitch_display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct YoutubeConnection {
    #[serde(flatten)]
    pub status: ConnectionStatus,
    pub youtube_id: String,
    pub youtube_logo: String,
    pub youtube_display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FacebookConnection {
    #[serde(flatten)]
    pub status: ConnectionStatus,
    pub facebook_id: String,
    pub facebook_logo: String,
    pub facebook_display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TwitterConnection {
    #[serde(flatten)]
    pub status: ConnectionStatus,
    pub twitter_id: String,
    pub twitter_logo: String,
    pub twitter_display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Creator {
    pub id: u64,
    pub has_twitch: bool,
    pub twitch_connections: Vec<TwitchConnection>,
    pub has_youtube: bool,
    pub youtube_connections: Vec<YoutubeConnection>,
    pub has_facebook: bool,
    pub facebook_connections: Vec<FacebookConnection>,
    pub has_twitter: bool,
    pub twitter_connections: Vec<TwitterConnection>,
    /// True if the creator is currently live
    pub live: bool,
    pub logo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopItem {
    pub id: u64,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// The price in loyalty points to redeem
    pub price: i64,
    /// The quantity available
    pub quantity: i64,
    pub resource_id: Option<u64>,
    /// The minimum loyalty tier required
    pub loyalty_tier_id: Option<u64>,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Notification {
    pub id: u64,
    /// ISO date of when the notification was created
    pub timestamp: String,
    pub body: String,
    pub event: Option<Event>,
    pub mission: Option<Mission>,
    pub rpg_shop_item: Option<ShopItem>,
    /// Prefer the resource of the event, mission or shop item when present
    pub resource_id: Option<u64>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    pub id: u64,
    /// Points for the transaction; negative when spent
    pub amount: i64,
    pub created_at: String,
    pub description: String,
    pub mission: Option<Mission>,
    pub rpg_shop_item: Option<ShopItem>,
    pub link: Option<String>,
}
